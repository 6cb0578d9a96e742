pub mod dashboard;
pub mod login;
pub mod products;
pub mod register;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use products::ProductsPage;
pub use register::RegisterPage;
