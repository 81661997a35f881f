use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Checklist;
use uuid::Uuid;

/// Remove the checklist and, with it, all of its tasks. One collection
/// mutation; confirmation prompts are the caller's concern.
pub fn run(checklists: &mut Vec<Checklist>, id: Uuid) -> Result<CmdResult> {
    let Some(pos) = checklists.iter().position(|c| c.id == id) else {
        return Ok(CmdResult::default());
    };

    let removed = checklists.remove(pos);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(
        "Checklist Deleted",
        format!("\"{}\" has been deleted.", removed.title),
    ));
    Ok(result.with_affected(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, NewChecklist};
    use crate::model::Subject;

    #[test]
    fn create_then_remove_restores_the_collection() {
        let mut checklists = Vec::new();
        create::run(&mut checklists, NewChecklist::new("Keep me", Subject::History)).unwrap();
        let before: Vec<Uuid> = checklists.iter().map(|c| c.id).collect();

        let created = create::run(
            &mut checklists,
            NewChecklist::new("Transient", Subject::Art).with_task_texts(["x", "y"]),
        )
        .unwrap();
        let id = created.affected[0].id;

        run(&mut checklists, id).unwrap();
        let after: Vec<Uuid> = checklists.iter().map(|c| c.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_id_is_a_silent_no_op() {
        let mut checklists = Vec::new();
        create::run(&mut checklists, NewChecklist::new("Only", Subject::Music)).unwrap();

        let result = run(&mut checklists, Uuid::new_v4()).unwrap();
        assert!(result.messages.is_empty());
        assert_eq!(checklists.len(), 1);
    }

    #[test]
    fn reports_an_info_message_with_the_title() {
        let mut checklists = Vec::new();
        let created =
            create::run(&mut checklists, NewChecklist::new("Doomed", Subject::English)).unwrap();

        let result = run(&mut checklists, created.affected[0].id).unwrap();
        assert_eq!(result.messages[0].title, "Checklist Deleted");
        assert!(result.messages[0].body.contains("Doomed"));
    }
}
