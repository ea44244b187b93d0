//! Shared fixtures for the integration tests.

use auth_adapters::FixedCredentialGate;
use secrecy::SecretString;
use services::{LmsSession, StateGateway};
use storage_adapters::MemoryStore;

pub type MemorySession = LmsSession<MemoryStore, FixedCredentialGate>;

pub fn admin_password() -> SecretString {
    SecretString::from("ar4925".to_string())
}

/// A session over fresh in-memory storage, already logged in.
pub fn admin_session() -> MemorySession {
    let mut session = LmsSession::open(StateGateway::new(MemoryStore::new()), FixedCredentialGate);
    assert!(session.login("arunika", &admin_password()));
    session
}
