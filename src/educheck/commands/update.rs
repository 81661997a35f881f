use crate::commands::{ChecklistPatch, CmdMessage, CmdResult};
use crate::error::{EducheckError, Result};
use crate::model::Checklist;
use uuid::Uuid;

/// Merge the present patch fields into the checklist with `id`, last write
/// wins per field. A stale or unknown id is a silent no-op: the UI only
/// references ids it most recently observed, so a miss is local recovery,
/// not an error.
pub fn run(checklists: &mut [Checklist], id: Uuid, patch: ChecklistPatch) -> Result<CmdResult> {
    if let Some(title) = &patch.title {
        if title.trim().is_empty() {
            return Err(EducheckError::Validation(
                "Checklist title is required".to_string(),
            ));
        }
    }

    let Some(checklist) = checklists.iter_mut().find(|c| c.id == id) else {
        return Ok(CmdResult::default());
    };

    // A changed deadline or reminder offset re-arms the reminder
    let rearm_reminder = patch.due_date.is_some() || patch.reminder_time.is_some();

    if let Some(title) = patch.title {
        checklist.title = title.trim().to_string();
    }
    if let Some(description) = patch.description {
        checklist.description = Some(description);
    }
    if let Some(subject) = patch.subject {
        checklist.subject = subject;
    }
    if let Some(priority) = patch.priority {
        checklist.priority = priority;
    }
    if let Some(due_date) = patch.due_date {
        checklist.due_date = Some(due_date);
    }
    if let Some(reminder_time) = patch.reminder_time {
        checklist.reminder_time = Some(reminder_time);
    }
    if let Some(tasks) = patch.tasks {
        checklist.tasks = tasks;
    }
    if rearm_reminder {
        checklist.reminder_sent = false;
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(
        "Checklist Updated",
        format!("\"{}\" has been updated!", checklist.title),
    ));
    Ok(result.with_affected(vec![checklist.clone()]))
}
