pub mod project_modal;

pub use project_modal::ProjectModal;
