// src/auth/mod.rs

pub mod handlers;
pub mod password;
pub mod service;
pub mod types;

pub use password::{hash_password, verify_password};
pub use service::{login, signup};
pub use types::{LoginRequest, MessageResponse, SignupRequest};
