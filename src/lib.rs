//! kazi — a kanban task board client for a REST task store.
//!
//! The library is split into the remote data layer (`api`), the cached
//! query/mutation layer (`store`), pure board derivation (`ops`), and the
//! two user surfaces: a ratatui TUI (`tui`) and a clap CLI (`cli`).

pub mod api;
pub mod cli;
pub mod config;
pub mod model;
pub mod ops;
pub mod store;
pub mod tui;
