use crate::commands::{CmdMessage, CmdResult, NewChecklist};
use crate::error::{EducheckError, Result};
use crate::model::{Checklist, Priority, Task};
use chrono::Utc;
use serde_json::Map;
use uuid::Uuid;

pub fn run(checklists: &mut Vec<Checklist>, new: NewChecklist) -> Result<CmdResult> {
    let title = new.title.trim();
    if title.is_empty() {
        return Err(EducheckError::Validation(
            "Checklist title is required".to_string(),
        ));
    }

    let tasks: Vec<Task> = new
        .task_texts
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| Task::new(t.to_string(), Priority::default(), None))
        .collect();

    let checklist = Checklist {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: new.description,
        subject: new.subject,
        priority: new.priority,
        due_date: new.due_date,
        reminder_time: new.reminder_time,
        reminder_sent: false,
        tasks,
        created_at: Utc::now(),
        extra: Map::new(),
    };

    // Most-recent-first ordering
    checklists.insert(0, checklist.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(
        "Checklist Created",
        format!("\"{}\" has been created successfully!", checklist.title),
    ));
    Ok(result.with_affected(vec![checklist]))
}
