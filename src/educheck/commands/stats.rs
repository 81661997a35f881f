use crate::model::Checklist;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Dashboard aggregates over the full collection. Pure, recomputed on
/// demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_checklists: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    /// Rounded percentage; 0 when there are no tasks at all.
    pub completion_rate: u8,
    /// Incomplete tasks due strictly between now and 24 hours from now.
    pub due_soon_tasks: usize,
}

pub fn run(checklists: &[Checklist], now: DateTime<Utc>) -> Stats {
    let total_tasks: usize = checklists.iter().map(|c| c.tasks.len()).sum();
    let completed_tasks: usize = checklists.iter().map(|c| c.completed_task_count()).sum();
    let soon_cutoff = now + Duration::hours(24);

    let due_soon_tasks = checklists
        .iter()
        .flat_map(|c| c.tasks.iter())
        .filter(|t| !t.completed)
        .filter(|t| match t.due_date {
            Some(due) => due > now && due <= soon_cutoff,
            None => false,
        })
        .count();

    Stats {
        total_checklists: checklists.len(),
        total_tasks,
        completed_tasks,
        pending_tasks: total_tasks - completed_tasks,
        completion_rate: percentage(completed_tasks, total_tasks),
        due_soon_tasks,
    }
}

/// Per-checklist progress for progress bars and "N of M" labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

pub fn progress(checklist: &Checklist) -> Progress {
    let total = checklist.tasks.len();
    let completed = checklist.completed_task_count();
    Progress {
        completed,
        total,
        percent: percentage(completed, total),
    }
}

fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        0
    } else {
        (part as f64 / whole as f64 * 100.0).round() as u8
    }
}
