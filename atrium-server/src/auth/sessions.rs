//! Advisory session bookkeeping.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// Set of admin usernames considered "logged in".
///
/// Populated at login, cleared at logout, and advisory only: token
/// verification never consults it, so a well-signed, unexpired token
/// whose subject has logged out is still accepted by the mutation gate.
/// This mirrors the deployed behavior and must not quietly become a
/// second source of truth for token validity.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    inner: Arc<RwLock<HashSet<String>>>,
}

impl SessionTracker {
    pub fn insert(&self, username: &str) {
        self.inner.write().unwrap().insert(username.to_string());
    }

    pub fn discard(&self, username: &str) {
        self.inner.write().unwrap().remove(username);
    }

    pub fn contains(&self, username: &str) -> bool {
        self.inner.read().unwrap().contains(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_discard_lifecycle() {
        let sessions = SessionTracker::default();
        assert!(!sessions.contains("admin"));
        sessions.insert("admin");
        assert!(sessions.contains("admin"));
        sessions.discard("admin");
        assert!(!sessions.contains("admin"));
        // Discarding an absent entry is a no-op.
        sessions.discard("admin");
    }
}
