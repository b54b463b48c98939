//! API credential value object

use crate::core::error::DomainError;

/// Bearer token used to authenticate against the completion API.
///
/// `Debug` never prints the secret; use [`Credential::masked`] for display.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Create a credential, rejecting blank values.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::EmptyCredential);
        }
        Ok(Self(value))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Show only the last four characters, e.g. `****abcd`.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), tail)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_value() {
        let cred = Credential::new("  sk-test  ").unwrap();
        assert_eq!(cred.expose(), "sk-test");
    }

    #[test]
    fn test_new_rejects_blank() {
        assert_eq!(Credential::new("   "), Err(DomainError::EmptyCredential));
    }

    #[test]
    fn test_debug_is_redacted() {
        let cred = Credential::new("sk-secret-value").unwrap();
        let debug = format!("{:?}", cred);
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_masked_keeps_last_four() {
        let cred = Credential::new("sk-12345678").unwrap();
        assert_eq!(cred.masked(), "*******5678");
        let short = Credential::new("abc").unwrap();
        assert_eq!(short.masked(), "***");
    }
}
