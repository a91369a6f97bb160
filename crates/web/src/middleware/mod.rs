//! Request middleware.

mod session;

pub use session::{session_middleware, Session, SESSION_HEADER};
