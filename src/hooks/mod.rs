pub mod use_cancel;
pub mod use_toasts;

pub use use_cancel::{use_cancel_token, CancelToken};
pub use use_toasts::{use_toasts, ToastHandle, ToastMessage, ToastSeverity};
