use crate::commands::{CmdMessage, CmdResult};
use crate::error::{EducheckError, Result};
use crate::model::{Checklist, Priority, Task};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Append a task to the named checklist's sequence.
pub fn add(
    checklists: &mut [Checklist],
    checklist_id: Uuid,
    text: &str,
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
) -> Result<CmdResult> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EducheckError::Validation(
            "Task description is required".to_string(),
        ));
    }

    let Some(checklist) = checklists.iter_mut().find(|c| c.id == checklist_id) else {
        return Ok(CmdResult::default());
    };

    checklist
        .tasks
        .push(Task::new(text.to_string(), priority, due_date));

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(
        "Task Added",
        format!("New task added to \"{}\"", checklist.title),
    ));
    Ok(result.with_affected(vec![checklist.clone()]))
}

/// Flip a task's completion flag; `completed_at` follows the flag.
pub fn toggle(
    checklists: &mut [Checklist],
    checklist_id: Uuid,
    task_id: Uuid,
) -> Result<CmdResult> {
    let Some(checklist) = checklists.iter_mut().find(|c| c.id == checklist_id) else {
        return Ok(CmdResult::default());
    };
    let Some(task) = checklist.task_mut(task_id) else {
        return Ok(CmdResult::default());
    };

    task.completed = !task.completed;
    task.completed_at = if task.completed { Some(Utc::now()) } else { None };

    let mut result = CmdResult::default();
    if task.completed {
        result.add_message(CmdMessage::success(
            "Task Completed",
            format!("\"{}\" has been marked as complete!", task.text),
        ));
    }
    Ok(result.with_affected(vec![checklist.clone()]))
}

/// Remove one task from its checklist's sequence.
pub fn remove(
    checklists: &mut [Checklist],
    checklist_id: Uuid,
    task_id: Uuid,
) -> Result<CmdResult> {
    let Some(checklist) = checklists.iter_mut().find(|c| c.id == checklist_id) else {
        return Ok(CmdResult::default());
    };
    let Some(pos) = checklist.tasks.iter().position(|t| t.id == task_id) else {
        return Ok(CmdResult::default());
    };

    checklist.tasks.remove(pos);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(
        "Task Deleted",
        format!("Task has been removed from \"{}\"", checklist.title),
    ));
    Ok(result.with_affected(vec![checklist.clone()]))
}
