//! Password reset token generation.

use rand::Rng;

/// Generates a cryptographically random 64-character hex reset token.
pub fn generate_reset_token() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
