pub mod http;
pub mod tags;
pub mod tasks;

pub use http::{ApiError, HttpClient};
pub use tags::TagService;
pub use tasks::{NewTask, TaskPatch, TaskService};
