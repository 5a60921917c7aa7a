pub mod tag;
pub mod task;

pub use tag::Tag;
pub use task::{EnergyLevel, Status, Task};
