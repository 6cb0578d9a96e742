pub mod session;

pub use session::{use_session, Session, SessionProvider};
