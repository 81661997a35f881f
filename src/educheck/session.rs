//! Explicit session context.
//!
//! The active user identity comes from an external identity provider; the
//! engine never authenticates, it only namespaces its storage keys on the
//! identifier it is handed. A session without a user is a guest session:
//! the engine behaves as an empty, non-persisting collection.

/// The storage namespace for one user, passed into [`crate::api::ChecklistApi`]
/// at construction. Switching users means constructing a new api instance;
/// there is no ambient "current user" state anywhere in the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<String>,
}

impl Session {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// Read-only demo mode: nothing is ever read from or written to storage.
    pub fn guest() -> Self {
        Self::default()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_guest(&self) -> bool {
        self.user_id.is_none()
    }

    /// Key under which the user's full checklist collection is stored.
    pub fn checklists_key(&self) -> Option<String> {
        self.user_id.as_ref().map(|id| format!("checklists_{}", id))
    }

    /// Key under which the user's notification settings are stored.
    pub fn notifications_key(&self) -> Option<String> {
        self.user_id
            .as_ref()
            .map(|id| format!("notifications_{}", id))
    }
}
