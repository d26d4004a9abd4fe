pub mod entities;
pub mod value_objects;

pub use entities::{BoardView, Task, TaskDraft, TaskPage};
pub use value_objects::{PageRequest, TaskId, TaskStatus};
