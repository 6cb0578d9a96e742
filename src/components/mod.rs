pub mod app;
pub mod navbar;
pub mod toast;

pub use app::App;
pub use navbar::Navbar;
pub use toast::ToastContainer;
