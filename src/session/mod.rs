// src/session/mod.rs

pub mod cookie;
pub mod store;

pub use cookie::{session_id, set_session_cookie, SESSION_COOKIE};
pub use store::{SessionData, SessionStore, SessionUser};
