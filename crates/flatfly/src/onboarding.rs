//! Relocation onboarding checklist.
//!
//! Tracks the documents and errands a newcomer works through before and
//! after the move. Seeded with the standard relocation set; status
//! changes flow through [`Checklist::set_status`].

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Completed, Self::InProgress, Self::NotStarted]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub title: &'static str,
    /// 1 (low) to 5 (high); drives ordering hints in the host UI.
    pub priority: u8,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistProgress {
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub percent_complete: u8,
}

#[derive(Debug)]
pub enum OnboardingError {
    TaskNotFound(String),
}

impl fmt::Display for OnboardingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnboardingError::TaskNotFound(id) => write!(f, "task with id {} not found", id),
        }
    }
}

impl std::error::Error for OnboardingError {}

#[derive(Debug, Clone)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
}

impl Checklist {
    /// The standard relocation checklist: paperwork already settled,
    /// the housing trail in flight, local admin still untouched.
    pub fn relocation_default() -> Self {
        Self {
            items: seeded_items(),
        }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn with_status(&self, status: TaskStatus) -> Vec<&ChecklistItem> {
        self.items
            .iter()
            .filter(|item| item.status == status)
            .collect()
    }

    pub fn set_status(&mut self, id: &str, status: TaskStatus) -> Result<(), OnboardingError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| OnboardingError::TaskNotFound(id.to_string()))?;
        item.status = status;
        Ok(())
    }

    pub fn progress(&self) -> ChecklistProgress {
        let completed = self.with_status(TaskStatus::Completed).len();
        let in_progress = self.with_status(TaskStatus::InProgress).len();
        let not_started = self.with_status(TaskStatus::NotStarted).len();
        let total = self.items.len();
        let percent_complete = if total == 0 {
            0
        } else {
            (completed * 100 / total) as u8
        };

        ChecklistProgress {
            completed,
            in_progress,
            not_started,
            percent_complete,
        }
    }
}

fn seeded_items() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem {
            id: "H1-2",
            title: "LOA University",
            priority: 5,
            status: TaskStatus::Completed,
        },
        ChecklistItem {
            id: "H1-3",
            title: "Block Account",
            priority: 1,
            status: TaskStatus::Completed,
        },
        ChecklistItem {
            id: "H1-4",
            title: "TK Insurance",
            priority: 1,
            status: TaskStatus::Completed,
        },
        ChecklistItem {
            id: "H1-5",
            title: "CV Personal and Career",
            priority: 3,
            status: TaskStatus::Completed,
        },
        ChecklistItem {
            id: "H1-6",
            title: "Passport",
            priority: 2,
            status: TaskStatus::Completed,
        },
        ChecklistItem {
            id: "HT-1",
            title: "Housing Insurance",
            priority: 5,
            status: TaskStatus::InProgress,
        },
        ChecklistItem {
            id: "HT-2",
            title: "Schufa Certificate",
            priority: 1,
            status: TaskStatus::InProgress,
        },
        ChecklistItem {
            id: "HT-3",
            title: "Visa Early",
            priority: 1,
            status: TaskStatus::InProgress,
        },
        ChecklistItem {
            id: "HT-4",
            title: "Housing Contract",
            priority: 5,
            status: TaskStatus::NotStarted,
        },
        ChecklistItem {
            id: "HT-5",
            title: "Pet Passport",
            priority: 1,
            status: TaskStatus::NotStarted,
        },
        ChecklistItem {
            id: "HT-6",
            title: "Local Bank Account",
            priority: 1,
            status: TaskStatus::NotStarted,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_checklist_splits_five_three_three() {
        let checklist = Checklist::relocation_default();
        let progress = checklist.progress();
        assert_eq!(progress.completed, 5);
        assert_eq!(progress.in_progress, 3);
        assert_eq!(progress.not_started, 3);
        assert_eq!(progress.percent_complete, 45);
    }

    #[test]
    fn status_filter_returns_matching_items_only() {
        let checklist = Checklist::relocation_default();
        let in_progress = checklist.with_status(TaskStatus::InProgress);
        let titles: Vec<&str> = in_progress.iter().map(|item| item.title).collect();
        assert_eq!(
            titles,
            ["Housing Insurance", "Schufa Certificate", "Visa Early"]
        );
    }

    #[test]
    fn completing_a_task_moves_the_progress_needle() {
        let mut checklist = Checklist::relocation_default();
        checklist
            .set_status("HT-4", TaskStatus::Completed)
            .expect("seeded task exists");
        let progress = checklist.progress();
        assert_eq!(progress.completed, 6);
        assert_eq!(progress.not_started, 2);
        assert_eq!(progress.percent_complete, 54);
    }

    #[test]
    fn unknown_task_id_is_an_error() {
        let mut checklist = Checklist::relocation_default();
        let result = checklist.set_status("ZZ-9", TaskStatus::Completed);
        match result {
            Err(OnboardingError::TaskNotFound(id)) => assert_eq!(id, "ZZ-9"),
            other => panic!("expected task not found error, got {other:?}"),
        }
    }

    #[test]
    fn status_labels_match_display_contract() {
        assert_eq!(TaskStatus::NotStarted.label(), "Not Started");
        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
        assert_eq!(TaskStatus::Completed.label(), "Completed");
    }
}
