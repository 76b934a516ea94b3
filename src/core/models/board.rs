use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::project::{Priority, Project};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    New,
    Progress,
    Feedback,
    Completed,
    Archived,
}

impl ColumnId {
    /// Left-to-right board order, also the persisted key order.
    pub const ALL: [ColumnId; 5] = [
        ColumnId::New,
        ColumnId::Progress,
        ColumnId::Feedback,
        ColumnId::Completed,
        ColumnId::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::New => "new",
            ColumnId::Progress => "progress",
            ColumnId::Feedback => "feedback",
            ColumnId::Completed => "completed",
            ColumnId::Archived => "archived",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ColumnId::New => "New Work",
            ColumnId::Progress => "In Progress",
            ColumnId::Feedback => "Awaiting Feedback",
            ColumnId::Completed => "Completed",
            ColumnId::Archived => "Archived",
        }
    }

    pub fn accent_class(&self) -> &'static str {
        match self {
            ColumnId::New => "column-new",
            ColumnId::Progress => "column-progress",
            ColumnId::Feedback => "column-feedback",
            ColumnId::Completed => "column-completed",
            ColumnId::Archived => "column-archived",
        }
    }
}

/// Column-keyed collection of projects. A project id lives in exactly one
/// column at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Board {
    #[serde(default)]
    pub new: Vec<Project>,
    #[serde(default)]
    pub progress: Vec<Project>,
    #[serde(default)]
    pub feedback: Vec<Project>,
    #[serde(default)]
    pub completed: Vec<Project>,
    #[serde(default)]
    pub archived: Vec<Project>,
}

impl Board {
    pub fn column(&self, id: ColumnId) -> &Vec<Project> {
        match id {
            ColumnId::New => &self.new,
            ColumnId::Progress => &self.progress,
            ColumnId::Feedback => &self.feedback,
            ColumnId::Completed => &self.completed,
            ColumnId::Archived => &self.archived,
        }
    }

    pub fn column_mut(&mut self, id: ColumnId) -> &mut Vec<Project> {
        match id {
            ColumnId::New => &mut self.new,
            ColumnId::Progress => &mut self.progress,
            ColumnId::Feedback => &mut self.feedback,
            ColumnId::Completed => &mut self.completed,
            ColumnId::Archived => &mut self.archived,
        }
    }

    pub fn len(&self) -> usize {
        ColumnId::ALL.iter().map(|c| self.column(*c).len()).sum()
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        ColumnId::ALL.into_iter().flat_map(move |c| self.column(c).iter())
    }

    pub fn locate(&self, project_id: &str) -> Option<(ColumnId, usize)> {
        ColumnId::ALL.into_iter().find_map(|column| {
            self.column(column)
                .iter()
                .position(|p| p.id == project_id)
                .map(|index| (column, index))
        })
    }

    pub fn contains_duplicate_ids(&self) -> bool {
        let mut seen = HashSet::new();
        self.projects().any(|p| !seen.insert(p.id.as_str()))
    }

    /// Move the project at `from_index` of `from` to `to_index` of `to`.
    ///
    /// Reordering inside one column leaves `updated_at` alone; crossing
    /// columns stamps it with `now`. A destination index past the end
    /// appends. Returns false when the source index does not exist.
    pub fn move_project(
        &mut self,
        from: ColumnId,
        from_index: usize,
        to: ColumnId,
        to_index: usize,
        now: DateTime<Utc>,
    ) -> bool {
        if from_index >= self.column(from).len() {
            return false;
        }

        let mut project = self.column_mut(from).remove(from_index);
        if from != to {
            project.touch(now);
        }

        let destination = self.column_mut(to);
        let index = to_index.min(destination.len());
        destination.insert(index, project);
        true
    }

    /// Append a freshly created project to the end of "new".
    pub fn insert_new(&mut self, project: Project) {
        self.new.push(project);
    }

    /// Replace a project in place, keeping its column and position.
    pub fn replace(&mut self, project: Project) -> bool {
        match self.locate(&project.id) {
            Some((column, index)) => {
                self.column_mut(column)[index] = project;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, project_id: &str) -> Option<Project> {
        let (column, index) = self.locate(project_id)?;
        Some(self.column_mut(column).remove(index))
    }

    /// First-run board with one demo project in "new" and one in "progress".
    pub fn seed(now: DateTime<Utc>) -> Self {
        let demo = |id: &str, title: &str, company: &str, description: &str, priority, due: (i32, u32, u32), client: &str, mobile: &str| Project {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            description: description.to_string(),
            priority,
            due_date: NaiveDate::from_ymd_opt(due.0, due.1, due.2),
            client_name: client.to_string(),
            client_mobile: mobile.to_string(),
            created_at: now,
            updated_at: now,
            files: Vec::new(),
            line_items: Vec::new(),
        };

        Self {
            new: vec![demo(
                "1",
                "Website Redesign",
                "Tech Startup Inc.",
                "Complete website overhaul with modern design and improved UX",
                Priority::High,
                (2024, 1, 15),
                "John Smith",
                "+1 (555) 123-4567",
            )],
            progress: vec![demo(
                "2",
                "Mobile App Development",
                "E-Commerce Co.",
                "React Native app for iOS and Android platforms",
                Priority::Medium,
                (2024, 2, 28),
                "Sarah Johnson",
                "+1 (555) 987-6543",
            )],
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
    }

    fn project(id: &str) -> Project {
        let mut p = Project::draft(t0());
        p.id = id.to_string();
        p.title = format!("Project {}", id);
        p
    }

    fn ids(board: &Board, column: ColumnId) -> Vec<String> {
        board.column(column).iter().map(|p| p.id.clone()).collect()
    }

    fn board_with(new: &[&str], progress: &[&str]) -> Board {
        Board {
            new: new.iter().map(|id| project(id)).collect(),
            progress: progress.iter().map(|id| project(id)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn seed_has_one_project_in_new_and_progress() {
        let board = Board::seed(t0());
        assert_eq!(board.new.len(), 1);
        assert_eq!(board.progress.len(), 1);
        assert_eq!(board.len(), 2);
        assert!(!board.contains_duplicate_ids());
    }

    #[test]
    fn reorder_within_column_keeps_updated_at() {
        let mut board = board_with(&["a", "b", "c"], &[]);
        let later = t0() + Duration::hours(1);
        assert!(board.move_project(ColumnId::New, 0, ColumnId::New, 2, later));
        assert_eq!(ids(&board, ColumnId::New), vec!["b", "c", "a"]);
        assert!(board.new.iter().all(|p| p.updated_at == t0()));
    }

    #[test]
    fn move_across_columns_stamps_updated_at() {
        let mut board = board_with(&["a", "b"], &["x"]);
        let later = t0() + Duration::minutes(5);
        assert!(board.move_project(ColumnId::New, 0, ColumnId::Progress, 0, later));
        assert_eq!(ids(&board, ColumnId::New), vec!["b"]);
        assert_eq!(ids(&board, ColumnId::Progress), vec!["a", "x"]);
        assert_eq!(board.progress[0].updated_at, later);
        assert!(board.progress[0].updated_at >= t0());
    }

    #[test]
    fn move_with_bad_source_index_is_noop() {
        let mut board = board_with(&["a"], &[]);
        let before = board.clone();
        assert!(!board.move_project(ColumnId::New, 3, ColumnId::Progress, 0, t0()));
        assert_eq!(board, before);
    }

    #[test]
    fn move_past_end_appends() {
        let mut board = board_with(&["a"], &["x", "y"]);
        assert!(board.move_project(ColumnId::New, 0, ColumnId::Progress, 99, t0()));
        assert_eq!(ids(&board, ColumnId::Progress), vec!["x", "y", "a"]);
    }

    #[test]
    fn insert_new_appends_to_new_column_only() {
        let mut board = board_with(&["a"], &["x"]);
        board.insert_new(project("fresh"));
        assert_eq!(ids(&board, ColumnId::New), vec!["a", "fresh"]);
        assert_eq!(ids(&board, ColumnId::Progress), vec!["x"]);
    }

    #[test]
    fn replace_keeps_column_and_position() {
        let mut board = board_with(&["a"], &["x", "y", "z"]);
        let mut edited = board.progress[1].clone();
        edited.title = "Renamed".to_string();
        assert!(board.replace(edited));
        assert_eq!(board.locate("y"), Some((ColumnId::Progress, 1)));
        assert_eq!(board.progress[1].title, "Renamed");
        assert!(!board.replace(project("ghost")));
        assert_eq!(board.len(), 4);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut board = board_with(&["a"], &["x"]);
        assert!(board.remove("x").is_some());
        assert!(board.remove("x").is_none());
        assert!(board.remove("never").is_none());
        assert_eq!(ids(&board, ColumnId::New), vec!["a"]);
        assert!(board.progress.is_empty());
    }

    #[test]
    fn ids_stay_unique_across_operation_sequences() {
        let mut board = board_with(&["a", "b", "c"], &["d"]);
        let now = t0();
        board.move_project(ColumnId::New, 1, ColumnId::Feedback, 0, now);
        board.move_project(ColumnId::Progress, 0, ColumnId::Archived, 5, now);
        board.move_project(ColumnId::New, 0, ColumnId::New, 1, now);
        board.insert_new(project("e"));
        let mut edited = board.column(ColumnId::Feedback)[0].clone();
        edited.company = "Acme".to_string();
        board.replace(edited);
        board.remove("c");
        board.move_project(ColumnId::Feedback, 0, ColumnId::Completed, 0, now);

        assert!(!board.contains_duplicate_ids());
        let mut all: Vec<_> = board.projects().map(|p| p.id.clone()).collect();
        all.sort();
        assert_eq!(all, vec!["a", "b", "d", "e"]);
    }

    #[test]
    fn scenario_new_to_progress_front() {
        let mut board = Board::seed(t0());
        let moved_id = board.new[0].id.clone();
        let later = t0() + Duration::seconds(30);
        board.move_project(ColumnId::New, 0, ColumnId::Progress, 0, later);
        assert!(board.new.is_empty());
        assert_eq!(board.progress[0].id, moved_id);
        assert_ne!(board.progress[0].updated_at, t0());
    }

    #[test]
    fn detects_duplicate_ids() {
        let board = board_with(&["a"], &["a"]);
        assert!(board.contains_duplicate_ids());
    }

    #[test]
    fn serialized_keys_follow_column_order() {
        let json = serde_json::to_string(&Board::default()).unwrap();
        assert_eq!(json, r#"{"new":[],"progress":[],"feedback":[],"completed":[],"archived":[]}"#);
    }
}
