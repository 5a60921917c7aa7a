use tokio::runtime::Runtime;

use crate::api::http::HttpClient;
use crate::api::tags::TagService;
use crate::api::tasks::{NewTask, TaskPatch, TaskService};
use crate::cli::commands::*;
use crate::config;
use crate::model::Task;
use crate::ops::board::partition;
use crate::store::{TagStore, TaskStore};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    init_tracing();

    let config = config::load(cli.api_url.as_deref())?;
    let runtime = Runtime::new()?;
    let http = HttpClient::new(config.api.base_url);
    let service = TaskService::new(http.clone());
    let mut tasks = TaskStore::new(service.clone());
    let mut tags = TagStore::new(TagService::new(http));
    let json = cli.json;

    let Some(command) = cli.command else {
        return Ok(());
    };

    match command {
        Commands::List(args) => cmd_list(&runtime, &mut tasks, args, json),
        Commands::Show(args) => cmd_show(&runtime, &service, args, json),
        Commands::Add(args) => cmd_add(&runtime, &mut tasks, args, json),
        Commands::Status(args) => cmd_status(&runtime, &mut tasks, args, json),
        Commands::Energy(args) => cmd_energy(&runtime, &mut tasks, args, json),
        Commands::Rm(args) => cmd_rm(&runtime, &mut tasks, args),
        Commands::Tags(args) => cmd_tags(&runtime, &mut tags, args, json),
    }
}

/// Install a stderr subscriber when KAZI_LOG is set (e.g. KAZI_LOG=debug)
fn init_tracing() {
    if std::env::var("KAZI_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_env("KAZI_LOG"))
            .with_writer(std::io::stderr)
            .try_init();
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(rt: &Runtime, store: &mut TaskStore, args: ListArgs, json: bool) -> CmdResult {
    let tasks = rt.block_on(store.tasks())?;
    let columns = partition(tasks);
    let selected: Vec<_> = columns
        .iter()
        .filter(|c| args.status.is_none_or(|s| s == c.status))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    for column in selected {
        println!("{} ({})", column.title, column.tasks.len());
        for task in &column.tasks {
            println!("  {}", task_line(task));
        }
    }
    Ok(())
}

fn cmd_show(rt: &Runtime, service: &TaskService, args: ShowArgs, json: bool) -> CmdResult {
    let task = rt.block_on(service.get(&args.id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task)?);
        return Ok(());
    }

    println!("{}  [{}]", task.title, task.status.label());
    if let Some(description) = &task.description {
        println!("  {}", description);
    }
    println!("  energy:  {}", task.energy_level.as_str());
    println!("  created: {}", task.created_at.format("%Y-%m-%d %H:%M"));
    println!("  updated: {}", task.updated_at.format("%Y-%m-%d %H:%M"));
    if !task.tags.is_empty() {
        let tags: Vec<String> = task.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("  tags:    {}", tags.join(" "));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(rt: &Runtime, store: &mut TaskStore, args: AddArgs, json: bool) -> CmdResult {
    let title = args.title.trim();
    if title.is_empty() {
        return Err("title must not be empty".into());
    }

    let data = NewTask {
        title: title.to_string(),
        description: args
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
        status: args.status,
        energy_level: args.energy,
        tags: args.tags,
    };
    let task = rt.block_on(store.create(&data))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        println!("created {}: {}", task.id, task.title);
    }
    Ok(())
}

fn cmd_status(rt: &Runtime, store: &mut TaskStore, args: StatusArgs, json: bool) -> CmdResult {
    let task = rt.block_on(store.update(&args.id, &TaskPatch::status(args.status)))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        println!("{} \u{2192} {}", task.id, task.status.as_str());
    }
    Ok(())
}

fn cmd_energy(rt: &Runtime, store: &mut TaskStore, args: EnergyArgs, json: bool) -> CmdResult {
    let task = rt.block_on(store.update(&args.id, &TaskPatch::energy(args.energy)))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        println!("{} energy \u{2192} {}", task.id, task.energy_level.as_str());
    }
    Ok(())
}

fn cmd_rm(rt: &Runtime, store: &mut TaskStore, args: RmArgs) -> CmdResult {
    rt.block_on(store.remove(&args.id))?;
    println!("deleted {}", args.id);
    Ok(())
}

fn cmd_tags(rt: &Runtime, store: &mut TagStore, args: TagsArgs, json: bool) -> CmdResult {
    if let Some(name) = args.add {
        let name = name.trim();
        if name.is_empty() {
            return Err("tag name must not be empty".into());
        }
        let tag = rt.block_on(store.create(name))?;
        if json {
            println!("{}", serde_json::to_string_pretty(&tag)?);
        } else {
            println!("created tag {}: {}", tag.id, tag.name);
        }
        return Ok(());
    }

    let tags = rt.block_on(store.tags())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }
    for tag in tags {
        println!("  {:>4}  {}", tag.id, tag.name);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

fn task_line(task: &Task) -> String {
    let mut line = format!("{:>4}  {} {}", task.id, task.energy_level.symbol(), task.title);
    for tag in &task.tags {
        line.push_str(&format!(" #{}", tag));
    }
    line
}
