use crate::error::Result;
use crate::session::Session;
use crate::store::StorageBackend;
use serde::{Deserialize, Serialize};

const DEFAULT_REMINDER_SOUND: &str = "default";

/// Per-user notification preferences, stored under `notifications_<userId>`.
/// The engine only persists these; acting on them (sounds, popups, reminder
/// delivery) is the notification sink's job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    #[serde(default)]
    pub enable_notifications: bool,
    #[serde(default = "default_true")]
    pub enable_reminders: bool,
    #[serde(default = "default_true")]
    pub enable_daily_quotes: bool,
    #[serde(default = "default_reminder_sound")]
    pub reminder_sound: String,
}

fn default_true() -> bool {
    true
}

fn default_reminder_sound() -> String {
    DEFAULT_REMINDER_SOUND.to_string()
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enable_notifications: false,
            enable_reminders: true,
            enable_daily_quotes: true,
            reminder_sound: default_reminder_sound(),
        }
    }
}

impl NotificationSettings {
    /// Load the session's settings, or defaults for guests and on any
    /// read/parse failure.
    pub fn load<S: StorageBackend>(store: &S, session: &Session) -> Self {
        let Some(key) = session.notifications_key() else {
            return Self::default();
        };
        match store.get(&key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Corrupt notification settings under {}: {}", key, e);
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Failed to read notification settings under {}: {}", key, e);
                Self::default()
            }
        }
    }

    /// Persist the settings; a no-op for guest sessions.
    pub fn save<S: StorageBackend>(&self, store: &mut S, session: &Session) -> Result<()> {
        let Some(key) = session.notifications_key() else {
            return Ok(());
        };
        let raw = serde_json::to_string(self)?;
        store.set(&key, &raw)
    }
}
