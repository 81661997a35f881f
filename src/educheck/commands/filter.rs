use crate::model::{Checklist, Priority, Subject};
use crate::status::{checklist_status, Status};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Non-empty task sequence, every task complete.
    Completed,
    /// At least one incomplete task.
    Incomplete,
    Overdue,
    DueSoon,
}

/// A stateless filter chain. All fields optional, implicitly ANDed.
#[derive(Debug, Clone, Default)]
pub struct ChecklistFilter {
    /// Case-insensitive substring match against title, description, or any
    /// task's text.
    pub search: Option<String>,
    pub subject: Option<Subject>,
    pub priority: Option<Priority>,
    pub status: Option<StatusFilter>,
}

impl ChecklistFilter {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }
}

/// Non-destructive: recomputed on every call, preserving the collection's
/// most-recent-first order. No secondary sort is applied.
pub fn run(checklists: &[Checklist], filter: &ChecklistFilter, now: DateTime<Utc>) -> Vec<Checklist> {
    checklists
        .iter()
        .filter(|c| matches(c, filter, now))
        .cloned()
        .collect()
}

fn matches(checklist: &Checklist, filter: &ChecklistFilter, now: DateTime<Utc>) -> bool {
    if let Some(term) = &filter.search {
        let term = term.to_lowercase();
        if !term.is_empty() && !matches_search(checklist, &term) {
            return false;
        }
    }

    if let Some(subject) = filter.subject {
        if checklist.subject != subject {
            return false;
        }
    }

    if let Some(priority) = filter.priority {
        if checklist.priority != priority {
            return false;
        }
    }

    match filter.status {
        None => true,
        Some(StatusFilter::Completed) => checklist.is_fully_completed(),
        Some(StatusFilter::Incomplete) => checklist.tasks.iter().any(|t| !t.completed),
        Some(StatusFilter::Overdue) => checklist_status(checklist, now) == Status::Overdue,
        Some(StatusFilter::DueSoon) => checklist_status(checklist, now) == Status::DueSoon,
    }
}

fn matches_search(checklist: &Checklist, term_lower: &str) -> bool {
    if checklist.title.to_lowercase().contains(term_lower) {
        return true;
    }
    if let Some(description) = &checklist.description {
        if description.to_lowercase().contains(term_lower) {
            return true;
        }
    }
    checklist
        .tasks
        .iter()
        .any(|t| t.text.to_lowercase().contains(term_lower))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, tasks, NewChecklist};
    use chrono::Duration;

    fn sample_collection() -> Vec<Checklist> {
        let mut checklists = Vec::new();
        create::run(
            &mut checklists,
            NewChecklist::new("Math Homework", Subject::Mathematics)
                .with_priority(Priority::High)
                .with_due_date(Utc::now() + Duration::days(2))
                .with_task_texts(["Solve equations", "Check answers"]),
        )
        .unwrap();
        create::run(
            &mut checklists,
            NewChecklist::new("Science Project", Subject::Science)
                .with_description("Solar system model presentation")
                .with_due_date(Utc::now() + Duration::days(5))
                .with_task_texts(["Research planet facts", "Build 3D model"]),
        )
        .unwrap();
        checklists
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let checklists = sample_collection();
        let listed = run(&checklists, &ChecklistFilter::default(), Utc::now());
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "Science Project");
        assert_eq!(listed[1].title, "Math Homework");
    }

    #[test]
    fn search_matches_description_not_just_title() {
        let checklists = sample_collection();
        let filter = ChecklistFilter::default().with_search("solar");
        let listed = run(&checklists, &filter, Utc::now());
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Science Project");
    }

    #[test]
    fn search_matches_task_text() {
        let checklists = sample_collection();
        let filter = ChecklistFilter::default().with_search("EQUATIONS");
        let listed = run(&checklists, &filter, Utc::now());
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Math Homework");
    }

    #[test]
    fn subject_and_priority_are_exact_matches() {
        let checklists = sample_collection();

        let by_subject = ChecklistFilter::default().with_subject(Subject::Science);
        assert_eq!(run(&checklists, &by_subject, Utc::now()).len(), 1);

        let by_priority = ChecklistFilter::default().with_priority(Priority::High);
        let listed = run(&checklists, &by_priority, Utc::now());
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Math Homework");
    }

    #[test]
    fn conditions_are_anded() {
        let checklists = sample_collection();
        let filter = ChecklistFilter::default()
            .with_search("model")
            .with_subject(Subject::Mathematics);
        assert!(run(&checklists, &filter, Utc::now()).is_empty());
    }

    #[test]
    fn completed_requires_non_empty_and_all_complete() {
        let mut checklists = sample_collection();
        create::run(
            &mut checklists,
            NewChecklist::new("No tasks yet", Subject::General),
        )
        .unwrap();

        let filter = ChecklistFilter::default().with_status(StatusFilter::Completed);
        assert!(run(&checklists, &filter, Utc::now()).is_empty());

        // Complete both math tasks
        let math_id = checklists.iter().find(|c| c.title == "Math Homework").unwrap().id;
        let task_ids: Vec<_> = checklists
            .iter()
            .find(|c| c.id == math_id)
            .unwrap()
            .tasks
            .iter()
            .map(|t| t.id)
            .collect();
        for task_id in task_ids {
            tasks::toggle(&mut checklists, math_id, task_id).unwrap();
        }

        let listed = run(&checklists, &filter, Utc::now());
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Math Homework");
    }

    #[test]
    fn overdue_never_includes_fully_completed_checklists() {
        let mut checklists = sample_collection();
        let math_id = checklists.iter().find(|c| c.title == "Math Homework").unwrap().id;

        // Push the due date into the past and complete every task
        let math = checklists.iter_mut().find(|c| c.id == math_id).unwrap();
        math.due_date = Some(Utc::now() - Duration::days(2));
        let task_ids: Vec<_> = math.tasks.iter().map(|t| t.id).collect();
        for task_id in task_ids {
            tasks::toggle(&mut checklists, math_id, task_id).unwrap();
        }

        let filter = ChecklistFilter::default().with_status(StatusFilter::Overdue);
        assert!(run(&checklists, &filter, Utc::now()).is_empty());

        // Flip one back and it becomes overdue
        let task_id = checklists
            .iter()
            .find(|c| c.id == math_id)
            .unwrap()
            .tasks[0]
            .id;
        tasks::toggle(&mut checklists, math_id, task_id).unwrap();
        assert_eq!(run(&checklists, &filter, Utc::now()).len(), 1);
    }

    #[test]
    fn due_soon_delegates_to_status_derivation() {
        let mut checklists = sample_collection();
        let math = checklists.iter_mut().find(|c| c.title == "Math Homework").unwrap();
        math.due_date = Some(Utc::now() + Duration::hours(10));

        let filter = ChecklistFilter::default().with_status(StatusFilter::DueSoon);
        let listed = run(&checklists, &filter, Utc::now());
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Math Homework");
    }

    #[test]
    fn incomplete_requires_at_least_one_open_task() {
        let checklists = sample_collection();
        let filter = ChecklistFilter::default().with_status(StatusFilter::Incomplete);
        assert_eq!(run(&checklists, &filter, Utc::now()).len(), 2);
    }
}
