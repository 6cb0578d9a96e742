pub mod auth;
pub mod product;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
pub use product::{Category, Product, ProductCreate, ProductStats, ProductUpdate};
