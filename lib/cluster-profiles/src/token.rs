//! Bootstrap token generation

use anyhow::Result;
use rand::Rng;

/// Source of single-use cluster bootstrap credentials
///
/// Implementations must return a fresh token on every call, unique with
/// overwhelming probability, and must be safe for concurrent use from
/// multiple simultaneous builds.
pub trait TokenGenerator: Send + Sync {
    fn random_token(&self) -> Result<String>;
}

const TOKEN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const TOKEN_ID_LEN: usize = 6;
const TOKEN_SECRET_LEN: usize = 16;

/// Default generator emitting kubeadm-format bootstrap tokens
/// (`[a-z0-9]{6}.[a-z0-9]{16}`)
#[derive(Clone, Copy, Debug, Default)]
pub struct BootstrapTokenGenerator;

impl BootstrapTokenGenerator {
    pub fn new() -> Self {
        Self
    }

    fn random_chunk(len: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..len)
            .map(|_| TOKEN_CHARSET[rng.gen_range(0..TOKEN_CHARSET.len())] as char)
            .collect()
    }
}

impl TokenGenerator for BootstrapTokenGenerator {
    fn random_token(&self) -> Result<String> {
        Ok(format!(
            "{}.{}",
            Self::random_chunk(TOKEN_ID_LEN),
            Self::random_chunk(TOKEN_SECRET_LEN)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_format() {
        let token = BootstrapTokenGenerator::new().random_token().unwrap();
        let (id, secret) = token.split_once('.').expect("token has a dot");
        assert_eq!(id.len(), 6);
        assert_eq!(secret.len(), 16);
        assert!(token
            .chars()
            .all(|c| c == '.' || c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_tokens_are_fresh_per_call() {
        let generator = BootstrapTokenGenerator::new();
        let a = generator.random_token().unwrap();
        let b = generator.random_token().unwrap();
        assert_ne!(a, b);
    }
}
