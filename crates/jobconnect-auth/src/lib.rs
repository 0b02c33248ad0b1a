//! Authentication primitives: password hashing and policy, JWT tokens,
//! and password reset token generation.

pub mod jwt;
pub mod password;
pub mod reset;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair, TokenType};
pub use password::{PasswordHasher, PasswordValidator};
pub use reset::generate_reset_token;
