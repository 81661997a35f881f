//! Derived status classification and due-date display formatting.
//!
//! Status is never stored. It is recomputed from `due_date` and the tasks'
//! `completed` flags at query time, with `now` passed in explicitly so every
//! function here stays pure and testable.

use crate::model::{Checklist, Task};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

const SECS_PER_DAY: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Normal,
    DueSoon,
    Overdue,
    Completed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Normal => "normal",
            Status::DueSoon => "due-soon",
            Status::Overdue => "overdue",
            Status::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

pub fn task_status(task: &Task, now: DateTime<Utc>) -> Status {
    if task.completed {
        return Status::Completed;
    }
    let Some(due) = task.due_date else {
        return Status::Normal;
    };
    if due < now {
        Status::Overdue
    } else if due <= now + Duration::hours(24) {
        Status::DueSoon
    } else {
        Status::Normal
    }
}

/// A checklist whose tasks are all complete is never reported `Overdue`,
/// even with a past due date.
pub fn checklist_status(checklist: &Checklist, now: DateTime<Utc>) -> Status {
    let Some(due) = checklist.due_date else {
        return Status::Normal;
    };
    if due < now && checklist.tasks.iter().any(|t| !t.completed) {
        return Status::Overdue;
    }
    if due <= now + Duration::hours(24) {
        return Status::DueSoon;
    }
    Status::Normal
}

/// Signed day delta from `now` to `due`, taking the ceiling of the
/// duration in days. Only goes negative once the deadline is a whole day
/// past.
fn due_day_delta(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let secs = due.signed_duration_since(now).num_seconds();
    if secs >= 0 {
        (secs + SECS_PER_DAY - 1) / SECS_PER_DAY
    } else {
        -(-secs / SECS_PER_DAY)
    }
}

pub fn format_due_date(due: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match due_day_delta(due, now) {
        d if d < 0 => "Overdue".to_string(),
        0 => "Due today".to_string(),
        1 => "Due tomorrow".to_string(),
        d if d <= 7 => format!("Due in {} days", d),
        _ => due.format("%-m/%-d/%Y").to_string(),
    }
}
