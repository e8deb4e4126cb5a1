//! Session store tests: login, signup, logout, restore.

use std::sync::Arc;

use crate::core::session::{CredentialRegistry, SessionStore};
use crate::storage::{MemoryStore, SESSION_KEY, StorageBackend};
use crate::utils::AppError;

fn new_store() -> (Arc<MemoryStore>, SessionStore) {
    let storage = Arc::new(MemoryStore::new());
    let session = SessionStore::new(CredentialRegistry::with_demo_account(), storage.clone());
    (storage, session)
}

#[test]
fn login_succeeds_for_known_credentials() {
    let (_, mut session) = new_store();

    let identity = session.login("demo@example.com", "password123").unwrap();

    assert_eq!(identity.id, "1");
    assert_eq!(identity.name, "Demo User");
    assert!(session.is_authenticated());
}

#[test]
fn login_matches_email_case_insensitively() {
    let (_, mut session) = new_store();

    assert!(session.login("DEMO@Example.COM", "password123").is_ok());
}

#[test]
fn login_rejects_wrong_password() {
    let (_, mut session) = new_store();

    let err = session.login("demo@example.com", "Password123").unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
    assert!(!session.is_authenticated());
}

#[test]
fn login_rejects_unknown_email() {
    let (_, mut session) = new_store();

    let err = session.login("nobody@example.com", "password123").unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}

#[test]
fn signup_then_login_succeeds() {
    let (_, mut session) = new_store();

    let created = session
        .signup("Alice", "alice@example.com", "hunter2")
        .unwrap();
    session.logout();

    let logged_in = session.login("alice@example.com", "hunter2").unwrap();
    assert_eq!(logged_in, created);
}

#[test]
fn signup_assigns_monotonic_ids() {
    let (_, mut session) = new_store();

    let alice = session.signup("Alice", "alice@example.com", "a").unwrap();
    let bob = session.signup("Bob", "bob@example.com", "b").unwrap();

    // The demo account holds id 1
    assert_eq!(alice.id, "2");
    assert_eq!(bob.id, "3");
}

#[test]
fn signup_rejects_duplicate_email_case_insensitively() {
    let (_, mut session) = new_store();

    let err = session
        .signup("Impostor", "Demo@Example.com", "whatever")
        .unwrap_err();

    assert!(matches!(err, AppError::EmailInUse));
}

#[test]
fn login_persists_a_password_free_identity() {
    let (storage, mut session) = new_store();

    session.login("demo@example.com", "password123").unwrap();

    let raw = storage.get(SESSION_KEY).expect("session entry persisted");
    assert!(raw.contains("demo@example.com"));
    assert!(!raw.contains("password123"));
    assert!(!raw.contains("password\""));
}

#[test]
fn logout_clears_session_and_storage() {
    let (storage, mut session) = new_store();
    session.login("demo@example.com", "password123").unwrap();

    session.logout();

    assert!(!session.is_authenticated());
    assert!(session.current().is_none());
    assert!(storage.get(SESSION_KEY).is_none());
}

#[test]
fn restore_picks_up_a_persisted_identity() {
    let (storage, mut session) = new_store();
    session.login("demo@example.com", "password123").unwrap();

    // A fresh store over the same storage, as after an app restart
    let mut fresh = SessionStore::new(CredentialRegistry::with_demo_account(), storage);
    let restored = fresh.restore().cloned();

    assert_eq!(restored.unwrap().email, "demo@example.com");
    assert!(fresh.is_authenticated());
}

#[test]
fn restore_is_a_noop_when_nothing_is_persisted() {
    let (_, mut session) = new_store();

    assert!(session.restore().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn restore_purges_a_corrupt_entry_without_error() {
    let (storage, mut session) = new_store();
    storage.set(SESSION_KEY, "{not valid json").unwrap();

    let restored = session.restore();

    assert!(restored.is_none());
    assert!(!session.is_authenticated());
    assert!(storage.get(SESSION_KEY).is_none());
}
