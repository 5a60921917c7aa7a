use clap::{Args, Parser, Subcommand};

use crate::model::{EnergyLevel, Status};

#[derive(Parser)]
#[command(name = "kz", about = concat!("[kz] kazi v", env!("CARGO_PKG_VERSION"), " - a kanban board for your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Task store base URL (overrides KAZI_API_URL and kazi.toml)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks, grouped into board columns
    List(ListArgs),
    /// Show one task
    Show(ShowArgs),
    /// Create a task
    Add(AddArgs),
    /// Move a task to another column
    Status(StatusArgs),
    /// Change a task's energy level
    Energy(EnergyArgs),
    /// Delete a task
    Rm(RmArgs),
    /// List tags, or create one
    Tags(TagsArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Only this column (backlog, today, in-progress, review, done)
    #[arg(short, long)]
    pub status: Option<Status>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,

    /// Description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Starting column
    #[arg(short, long, default_value = "backlog")]
    pub status: Status,

    /// Energy level (low, medium, high)
    #[arg(short, long, default_value = "medium")]
    pub energy: EnergyLevel,

    /// Tag to attach (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Args)]
pub struct StatusArgs {
    /// Task ID
    pub id: String,
    /// New status
    pub status: Status,
}

#[derive(Args)]
pub struct EnergyArgs {
    /// Task ID
    pub id: String,
    /// New energy level
    pub energy: EnergyLevel,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct TagsArgs {
    /// Create a tag instead of listing
    #[arg(long, value_name = "NAME")]
    pub add: Option<String>,
}
