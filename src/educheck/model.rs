use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        write!(f, "{}", s)
    }
}

/// The controlled category set a checklist is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Mathematics,
    Science,
    English,
    History,
    Art,
    #[serde(rename = "Physical Education")]
    PhysicalEducation,
    Music,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    General,
}

impl Subject {
    pub const ALL: [Subject; 9] = [
        Subject::Mathematics,
        Subject::Science,
        Subject::English,
        Subject::History,
        Subject::Art,
        Subject::PhysicalEducation,
        Subject::Music,
        Subject::ComputerScience,
        Subject::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Science => "Science",
            Subject::English => "English",
            Subject::History => "History",
            Subject::Art => "Art",
            Subject::PhysicalEducation => "Physical Education",
            Subject::Music => "Music",
            Subject::ComputerScience => "Computer Science",
            Subject::General => "General",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An individual completable item belonging to exactly one checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Set exactly when `completed` flips false->true, cleared on the way back.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    // Fields this version doesn't model survive read-modify-write cycles intact.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    pub fn new(text: String, priority: Priority, due_date: Option<DateTime<Utc>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
            completed_at: None,
            priority,
            due_date,
            created_at: Utc::now(),
            extra: Map::new(),
        }
    }
}

/// A named, subject-tagged group of tasks with its own due date and priority.
///
/// The JSON shape (camelCase keys) is the interchange format between the
/// engine and its consumers and must round-trip exactly, which is why both
/// `Checklist` and [`Task`] carry a flattened map of unrecognized fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub subject: Subject,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Minutes before the due date a reminder should fire. Consumed by the
    /// external reminder mechanism; opaque to the engine.
    #[serde(default)]
    pub reminder_time: Option<u32>,
    /// Reset to false whenever `due_date` or `reminder_time` changes so a
    /// moved deadline re-arms reminders.
    #[serde(default)]
    pub reminder_sent: bool,
    /// Insertion order is display order, not a priority order.
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Checklist {
    pub fn task(&self, task_id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn task_mut(&mut self, task_id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }

    /// True only for a non-empty task list where every task is complete.
    pub fn is_fully_completed(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|t| t.completed)
    }

    pub fn completed_task_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}
