use crate::commands::stats::Stats;
use crate::model::{Checklist, Priority, Subject, Task};
use chrono::{DateTime, Utc};

pub mod create;
pub mod delete;
pub mod filter;
pub mod stats;
pub mod tasks;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Notification payload emitted to whatever sink the caller wires up
/// (toast, desktop notification, log line). Purely advisory; never feeds
/// back into engine state.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub title: String,
    pub body: String,
}

impl CmdMessage {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Checklist>,
    pub listed: Vec<Checklist>,
    pub stats: Option<Stats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, checklists: Vec<Checklist>) -> Self {
        self.affected = checklists;
        self
    }

    pub fn with_listed(mut self, checklists: Vec<Checklist>) -> Self {
        self.listed = checklists;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }
}

/// Everything needed to create a checklist. Each non-empty entry in
/// `task_texts` becomes a task with default priority and no due date.
#[derive(Debug, Clone)]
pub struct NewChecklist {
    pub title: String,
    pub description: Option<String>,
    pub subject: Subject,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    pub reminder_time: Option<u32>,
    pub task_texts: Vec<String>,
}

impl NewChecklist {
    pub fn new(title: impl Into<String>, subject: Subject) -> Self {
        Self {
            title: title.into(),
            description: None,
            subject,
            priority: Priority::default(),
            due_date: None,
            reminder_time: None,
            task_texts: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_reminder_time(mut self, minutes: u32) -> Self {
        self.reminder_time = Some(minutes);
        self
    }

    pub fn with_task_texts<I, T>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.task_texts = texts.into_iter().map(Into::into).collect();
        self
    }
}

/// The exact set of optional fields a checklist update may carry.
/// Present fields win; absent fields are retained.
#[derive(Debug, Clone, Default)]
pub struct ChecklistPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Option<Subject>,
    pub priority: Option<Priority>,
    pub due_date: Option<DateTime<Utc>>,
    pub reminder_time: Option<u32>,
    pub tasks: Option<Vec<Task>>,
}
