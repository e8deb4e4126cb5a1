//! Session state: login, signup, logout, restore.
//!
//! Credentials live in an in-memory registry injected at construction;
//! only the password-free [`Identity`] is persisted, under the
//! [`SESSION_KEY`] storage entry. A stored identity that no longer parses
//! is purged and treated as "signed out".

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::types::{Credential, Identity};
use crate::storage::{SESSION_KEY, StorageBackend};
use crate::utils::{AppError, AppResult};

/// In-memory credential records, one per known account.
///
/// Process-lifetime only; signup appends, nothing is ever removed.
pub struct CredentialRegistry {
    records: Vec<Credential>,
}

impl CredentialRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Creates a registry seeded with the built-in demo account.
    pub fn with_demo_account() -> Self {
        Self {
            records: vec![Credential {
                id: "1".to_string(),
                name: "Demo User".to_string(),
                email: "demo@example.com".to_string(),
                password: "password123".to_string(),
                avatar: None,
            }],
        }
    }

    fn find_by_email(&self, email: &str) -> Option<&Credential> {
        self.records
            .iter()
            .find(|c| c.email.eq_ignore_ascii_case(email))
    }

    /// Appends a new record, assigning the next id relative to registry size.
    fn insert(&mut self, name: String, email: String, password: String) -> Identity {
        let record = Credential {
            id: (self.records.len() + 1).to_string(),
            name,
            email,
            password,
            avatar: None,
        };
        let identity = record.identity();
        self.records.push(record);
        identity
    }
}

impl Default for CredentialRegistry {
    fn default() -> Self {
        Self::with_demo_account()
    }
}

/// Outcome of parsing a persisted session entry.
enum PersistedIdentity {
    Valid(Identity),
    Corrupt,
}

fn parse_persisted(raw: &str) -> PersistedIdentity {
    match serde_json::from_str::<Identity>(raw) {
        Ok(identity) => PersistedIdentity::Valid(identity),
        Err(_) => PersistedIdentity::Corrupt,
    }
}

/// Owns the current session and the login/signup/logout transitions.
pub struct SessionStore {
    registry: CredentialRegistry,
    storage: Arc<dyn StorageBackend>,
    current: Option<Identity>,
}

impl SessionStore {
    pub fn new(registry: CredentialRegistry, storage: Arc<dyn StorageBackend>) -> Self {
        Self {
            registry,
            storage,
            current: None,
        }
    }

    /// The active identity, if any.
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Restores a previously persisted session.
    ///
    /// A corrupt entry is purged and leaves the store signed out; this
    /// never fails.
    pub fn restore(&mut self) -> Option<&Identity> {
        let raw = self.storage.get(SESSION_KEY)?;
        match parse_persisted(&raw) {
            PersistedIdentity::Valid(identity) => {
                info!("Restored session for {}", identity.email);
                self.current = Some(identity);
            }
            PersistedIdentity::Corrupt => {
                warn!("Stored session entry is corrupt, discarding it");
                if let Err(e) = self.storage.remove(SESSION_KEY) {
                    warn!("Failed to purge corrupt session entry: {e}");
                }
            }
        }
        self.current.as_ref()
    }

    /// Validates credentials and opens a session.
    pub fn login(&mut self, email: &str, password: &str) -> AppResult<Identity> {
        let identity = match self.registry.find_by_email(email) {
            Some(record) if record.password == password => record.identity(),
            _ => return Err(AppError::InvalidCredentials),
        };
        self.open_session(identity)
    }

    /// Registers a new account and opens a session for it.
    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> AppResult<Identity> {
        if self.registry.find_by_email(email).is_some() {
            return Err(AppError::EmailInUse);
        }
        let identity =
            self.registry
                .insert(name.to_string(), email.to_string(), password.to_string());
        info!("Registered account {} ({})", identity.id, identity.email);
        self.open_session(identity)
    }

    /// Clears the session and its persisted entry. Always succeeds.
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            warn!("Failed to remove persisted session: {e}");
        }
        self.current = None;
        debug!("Session cleared");
    }

    fn open_session(&mut self, identity: Identity) -> AppResult<Identity> {
        let json = serde_json::to_string(&identity)
            .map_err(|e| AppError::storage(format!("Failed to serialize session: {e}")))?;
        self.storage.set(SESSION_KEY, &json)?;
        self.current = Some(identity.clone());
        debug!("Session opened for {}", identity.email);
        Ok(identity)
    }
}
