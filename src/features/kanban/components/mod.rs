pub mod board;
pub mod column;
pub mod header;
pub mod project_card;

pub use board::KanbanBoard;
pub use column::KanbanColumn;
pub use header::BoardHeader;
pub use project_card::ProjectCard;
