pub mod board;
pub mod project;

pub use board::{Board, ColumnId};
pub use project::{parse_cost, parse_due_date, LineItem, Priority, Project, ProjectFile};
