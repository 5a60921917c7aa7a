pub mod cache;
pub mod tags;
pub mod tasks;

pub use cache::CachedQuery;
pub use tags::TagStore;
pub use tasks::TaskStore;
