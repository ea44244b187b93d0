//! # auth-adapters
//!
//! Fixed-credential implementation of `AccessGate`.
//! One hardcoded admin pair, compared by exact string equality.

use domains::AccessGate;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

pub const ADMIN_USERNAME: &str = "arunika";
const ADMIN_PASSWORD: &str = "ar4925";

#[derive(Debug, Default, Clone, Copy)]
pub struct FixedCredentialGate;

impl FixedCredentialGate {
    pub fn new() -> Self {
        Self
    }
}

impl AccessGate for FixedCredentialGate {
    fn authenticate(&self, username: &str, password: &SecretString) -> bool {
        let ok = username == ADMIN_USERNAME && password.expose_secret() == ADMIN_PASSWORD;
        debug!(username, ok, "credential check");
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(p: &str) -> SecretString {
        SecretString::from(p.to_string())
    }

    #[test]
    fn accepts_the_admin_pair() {
        assert!(FixedCredentialGate::new().authenticate("arunika", &secret("ar4925")));
    }

    #[test]
    fn rejects_anything_else() {
        let gate = FixedCredentialGate::new();
        assert!(!gate.authenticate("arunika", &secret("AR4925")));
        assert!(!gate.authenticate("Arunika", &secret("ar4925")));
        assert!(!gate.authenticate("arunika ", &secret("ar4925")));
        assert!(!gate.authenticate("", &secret("")));
    }
}
