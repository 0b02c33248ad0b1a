//! Authentication flows: registration, login, refresh, password reset.

pub mod reset;
pub mod service;

pub use reset::PasswordResetService;
pub use service::{AccountSummary, AuthService, LoginResult, RegisterData};
