//! # API Facade
//!
//! [`ChecklistApi`] is the single entry point for all engine operations and
//! the only stateful object in the crate. It owns the in-memory collection
//! for one session, dispatches to the command layer, and persists the full
//! collection through the storage backend after every mutation.
//!
//! ## What the facade does NOT do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Rendering**: it returns data structures, never markup or strings for
//!   a terminal
//! - **Authentication**: the [`Session`] it is handed is trusted as-is
//!
//! ## Generic over StorageBackend
//!
//! `ChecklistApi<S: StorageBackend>` works against any backend:
//! - Production: `ChecklistApi<FileStore>`
//! - Testing: `ChecklistApi<InMemoryStore>`
//!
//! ## Failure posture
//!
//! A persist failure is logged and swallowed: the in-memory collection
//! stays the effective source of truth until the next successful write.
//! A read failure or corrupt blob at construction degrades to an empty
//! collection. No operation here is fatal to the process.

use crate::commands::filter::ChecklistFilter;
use crate::commands::stats::Stats;
use crate::commands::{self, ChecklistPatch, CmdResult, NewChecklist};
use crate::error::Result;
use crate::model::{Checklist, Priority, Subject};
use crate::session::Session;
use crate::settings::NotificationSettings;
use crate::store::StorageBackend;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

pub struct ChecklistApi<S: StorageBackend> {
    store: S,
    session: Session,
    checklists: Vec<Checklist>,
}

impl<S: StorageBackend> ChecklistApi<S> {
    /// Load the session's collection from storage. Switching users means
    /// constructing a new instance under the new session.
    pub fn new(store: S, session: Session) -> Self {
        let checklists = load_collection(&store, &session);
        Self {
            store,
            session,
            checklists,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The full collection, most-recent-first.
    pub fn checklists(&self) -> &[Checklist] {
        &self.checklists
    }

    pub fn checklist(&self, id: Uuid) -> Option<&Checklist> {
        self.checklists.iter().find(|c| c.id == id)
    }

    pub fn create_checklist(&mut self, new: NewChecklist) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.checklists, new)?;
        self.persist();
        Ok(result)
    }

    pub fn update_checklist(&mut self, id: Uuid, patch: ChecklistPatch) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.checklists, id, patch)?;
        self.persist();
        Ok(result)
    }

    pub fn delete_checklist(&mut self, id: Uuid) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.checklists, id)?;
        self.persist();
        Ok(result)
    }

    pub fn add_task(
        &mut self,
        checklist_id: Uuid,
        text: &str,
        priority: Priority,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<CmdResult> {
        let result = commands::tasks::add(&mut self.checklists, checklist_id, text, priority, due_date)?;
        self.persist();
        Ok(result)
    }

    pub fn toggle_task(&mut self, checklist_id: Uuid, task_id: Uuid) -> Result<CmdResult> {
        let result = commands::tasks::toggle(&mut self.checklists, checklist_id, task_id)?;
        self.persist();
        Ok(result)
    }

    pub fn delete_task(&mut self, checklist_id: Uuid, task_id: Uuid) -> Result<CmdResult> {
        let result = commands::tasks::remove(&mut self.checklists, checklist_id, task_id)?;
        self.persist();
        Ok(result)
    }

    /// Non-destructive filtered view, recomputed on every call.
    pub fn filtered(&self, filter: &ChecklistFilter) -> Vec<Checklist> {
        commands::filter::run(&self.checklists, filter, Utc::now())
    }

    pub fn stats(&self) -> Stats {
        commands::stats::run(&self.checklists, Utc::now())
    }

    pub fn notification_settings(&self) -> NotificationSettings {
        NotificationSettings::load(&self.store, &self.session)
    }

    pub fn save_notification_settings(&mut self, settings: &NotificationSettings) -> Result<()> {
        settings.save(&mut self.store, &self.session)
    }

    /// Seed the two demo checklists a fresh account starts with. A no-op
    /// unless the collection is empty.
    pub fn seed_sample_data(&mut self) -> Result<CmdResult> {
        if !self.checklists.is_empty() {
            return Ok(CmdResult::default());
        }

        let mut combined = CmdResult::default();
        let samples = [
            NewChecklist::new("Math Homework - Chapter 5", Subject::Mathematics)
                .with_description("Complete exercises from algebra chapter")
                .with_priority(Priority::High)
                .with_due_date(Utc::now() + Duration::days(2))
                .with_reminder_time(1440)
                .with_task_texts([
                    "Solve equations 1-15",
                    "Review quadratic formulas",
                    "Practice word problems",
                    "Check answers",
                ]),
            NewChecklist::new("Science Project", Subject::Science)
                .with_description("Solar system model presentation")
                .with_due_date(Utc::now() + Duration::days(5))
                .with_reminder_time(2880)
                .with_task_texts([
                    "Research planet facts",
                    "Build 3D model",
                    "Prepare presentation slides",
                    "Practice speech",
                ]),
        ];
        for new in samples {
            let result = commands::create::run(&mut self.checklists, new)?;
            combined.affected.extend(result.affected);
            combined.messages.extend(result.messages);
        }
        self.persist();
        Ok(combined)
    }

    // Wholesale write of the collection, immediately after every mutation.
    // No batching: a crash can only ever lose the single latest change.
    fn persist(&mut self) {
        let Some(key) = self.session.checklists_key() else {
            return;
        };
        let raw = match serde_json::to_string(&self.checklists) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to serialize checklist collection: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(&key, &raw) {
            log::warn!(
                "Failed to persist checklists under {}; keeping in-memory state: {}",
                key,
                e
            );
        }
    }
}

fn load_collection<S: StorageBackend>(store: &S, session: &Session) -> Vec<Checklist> {
    let Some(key) = session.checklists_key() else {
        return Vec::new();
    };
    match store.get(&key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(checklists) => checklists,
            Err(e) => {
                log::warn!("Corrupt checklist collection under {}: {}", key, e);
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            log::warn!("Failed to read checklists under {}: {}", key, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EducheckError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn user_api() -> ChecklistApi<InMemoryStore> {
        ChecklistApi::new(InMemoryStore::new(), Session::for_user("u1"))
    }

    #[test]
    fn mutations_persist_across_instances() {
        let mut api = user_api();
        api.create_checklist(
            NewChecklist::new("Essay", Subject::English).with_task_texts(["Outline", "Draft"]),
        )
        .unwrap();
        let ChecklistApi { store, .. } = api;

        let reopened = ChecklistApi::new(store, Session::for_user("u1"));
        assert_eq!(reopened.checklists().len(), 1);
        assert_eq!(reopened.checklists()[0].title, "Essay");
        assert_eq!(reopened.checklists()[0].tasks.len(), 2);
    }

    #[test]
    fn collections_are_isolated_per_user() {
        let mut api = user_api();
        api.create_checklist(NewChecklist::new("Mine", Subject::Art)).unwrap();
        let ChecklistApi { store, .. } = api;

        let other = ChecklistApi::new(store, Session::for_user("u2"));
        assert!(other.checklists().is_empty());
    }

    #[test]
    fn guest_sessions_hold_state_but_never_write() {
        let mut api = ChecklistApi::new(InMemoryStore::new(), Session::guest());
        api.create_checklist(NewChecklist::new("Scratch", Subject::General)).unwrap();
        assert_eq!(api.checklists().len(), 1);

        let ChecklistApi { store, .. } = api;
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_stored_collection_degrades_to_empty() {
        let fixture = StoreFixture::new().with_raw_entry("checklists_u1", "[{broken");
        let api = ChecklistApi::new(fixture.store, Session::for_user("u1"));
        assert!(api.checklists().is_empty());
    }

    #[test]
    fn validation_failures_leave_storage_untouched() {
        let mut api = user_api();
        let err = api.create_checklist(NewChecklist::new("", Subject::General));
        assert!(matches!(err, Err(EducheckError::Validation(_))));

        let ChecklistApi { store, .. } = api;
        assert!(store.get("checklists_u1").unwrap().is_none());
    }

    #[test]
    fn toggling_twice_round_trips_through_storage() {
        let mut api = user_api();
        api.create_checklist(
            NewChecklist::new("Lab", Subject::Science).with_task_texts(["Measure"]),
        )
        .unwrap();
        let checklist_id = api.checklists()[0].id;
        let task_id = api.checklists()[0].tasks[0].id;

        api.toggle_task(checklist_id, task_id).unwrap();
        api.toggle_task(checklist_id, task_id).unwrap();

        let ChecklistApi { store, .. } = api;
        let reopened = ChecklistApi::new(store, Session::for_user("u1"));
        let task = reopened.checklists()[0].task(task_id).unwrap();
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn seeding_only_fills_an_empty_collection() {
        let mut api = user_api();
        api.seed_sample_data().unwrap();
        assert_eq!(api.checklists().len(), 2);
        assert_eq!(api.checklists()[0].title, "Science Project");

        let again = api.seed_sample_data().unwrap();
        assert!(again.affected.is_empty());
        assert_eq!(api.checklists().len(), 2);
    }

    #[test]
    fn filtered_view_does_not_mutate_the_collection() {
        let mut api = user_api();
        api.seed_sample_data().unwrap();

        let listed = api.filtered(&ChecklistFilter::default().with_search("solar"));
        assert_eq!(listed.len(), 1);
        assert_eq!(api.checklists().len(), 2);
    }

    #[test]
    fn settings_ride_the_same_backend() {
        let mut api = user_api();
        let mut settings = api.notification_settings();
        settings.enable_notifications = true;
        api.save_notification_settings(&settings).unwrap();
        assert!(api.notification_settings().enable_notifications);
    }

    // A backend whose writes always fail, for the degrade-gracefully path.
    struct ReadOnlyStore;

    impl StorageBackend for ReadOnlyStore {
        fn get(&self, _key: &str) -> crate::error::Result<Option<String>> {
            Ok(None)
        }
        fn set(&mut self, _key: &str, _value: &str) -> crate::error::Result<()> {
            Err(EducheckError::Store("quota exceeded".to_string()))
        }
        fn remove(&mut self, _key: &str) -> crate::error::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn persist_failure_keeps_in_memory_state() {
        let mut api = ChecklistApi::new(ReadOnlyStore, Session::for_user("u1"));
        let result = api.create_checklist(NewChecklist::new("Unsaved", Subject::History));
        assert!(result.is_ok());
        assert_eq!(api.checklists().len(), 1);
        assert_eq!(api.stats().total_checklists, 1);
    }
}
