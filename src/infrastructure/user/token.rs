//! Activation token generation
//!
//! Tokens are opaque secrets drawn from a CSPRNG and hex-encoded. No
//! uniqueness check is performed against stored tokens; the collision
//! space makes one pointless.

use rand::RngCore;

/// Default random bytes per token; 8 bytes hex-encode to 16 characters
/// and give a 2^64 collision space.
const DEFAULT_TOKEN_BYTES: usize = 8;

/// Generator for opaque activation tokens
#[derive(Debug, Clone)]
pub struct ActivationTokenGenerator {
    token_bytes: usize,
}

impl ActivationTokenGenerator {
    pub fn new() -> Self {
        Self {
            token_bytes: DEFAULT_TOKEN_BYTES,
        }
    }

    /// Set the number of random bytes per token
    pub fn with_token_bytes(mut self, bytes: usize) -> Self {
        self.token_bytes = bytes;
        self
    }

    /// Generate a fresh hex-encoded token
    pub fn generate(&self) -> String {
        let mut random_bytes = vec![0u8; self.token_bytes];
        rand::thread_rng().fill_bytes(&mut random_bytes);

        hex::encode(random_bytes)
    }
}

impl Default for ActivationTokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}
