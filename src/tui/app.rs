use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::runtime::Runtime;

use crate::api::http::{ApiError, HttpClient};
use crate::api::tasks::{NewTask, TaskPatch, TaskService};
use crate::config;
use crate::model::{EnergyLevel, Status, Task};
use crate::ops::board::partition;
use crate::store::TaskStore;

use super::input;
use super::render;
use super::theme::Theme;

/// Which dialog is open on top of the board, if any
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Add(AddDialog),
    Detail(DetailView),
}

/// Focusable fields of the add dialog, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Title,
    Description,
    Status,
    Energy,
}

impl AddField {
    pub fn next(self) -> AddField {
        match self {
            AddField::Title => AddField::Description,
            AddField::Description => AddField::Status,
            AddField::Status => AddField::Energy,
            AddField::Energy => AddField::Title,
        }
    }

    pub fn prev(self) -> AddField {
        match self {
            AddField::Title => AddField::Energy,
            AddField::Description => AddField::Title,
            AddField::Status => AddField::Description,
            AddField::Energy => AddField::Status,
        }
    }
}

/// Draft state for the create dialog, independent of the task cache
#[derive(Debug, Clone, PartialEq)]
pub struct AddDialog {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub energy: EnergyLevel,
    pub field: AddField,
}

impl Default for AddDialog {
    fn default() -> Self {
        AddDialog {
            title: String::new(),
            description: String::new(),
            status: Status::Backlog,
            energy: EnergyLevel::Medium,
            field: AddField::Title,
        }
    }
}

impl AddDialog {
    /// Draft → create payload. Refuses when the trimmed title is empty.
    pub fn submit(&self) -> Option<NewTask> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        let description = self.description.trim();
        Some(NewTask {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            status: self.status,
            energy_level: self.energy,
            tags: Vec::new(),
        })
    }

    /// The text buffer under focus, if the focused field is editable text
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            AddField::Title => Some(&mut self.title),
            AddField::Description => Some(&mut self.description),
            AddField::Status | AddField::Energy => None,
        }
    }
}

/// Selectable rows of the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailRegion {
    Status,
    Energy,
    Delete,
}

impl DetailRegion {
    pub fn next(self) -> DetailRegion {
        match self {
            DetailRegion::Status => DetailRegion::Energy,
            DetailRegion::Energy => DetailRegion::Delete,
            DetailRegion::Delete => DetailRegion::Status,
        }
    }

    pub fn prev(self) -> DetailRegion {
        match self {
            DetailRegion::Status => DetailRegion::Delete,
            DetailRegion::Energy => DetailRegion::Status,
            DetailRegion::Delete => DetailRegion::Energy,
        }
    }
}

/// An open task dialog over a detached copy of the task.
///
/// The copy is patched locally after each confirmed mutation so the
/// dialog reflects the edit before the refetch lands; the next
/// authoritative read supersedes it.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub task: Task,
    pub region: DetailRegion,
}

impl DetailView {
    pub fn new(task: Task) -> Self {
        DetailView {
            task,
            region: DetailRegion::Status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// A transient status-row notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub deadline: Instant,
}

/// Board cursor: column index and row within that column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub column: usize,
    pub row: usize,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    /// Snapshot of the last successful fetch; None before the first one
    pub tasks: Option<Vec<Task>>,
    pub load_error: Option<String>,
    pub theme: Theme,
    pub should_quit: bool,
    pub cursor: Cursor,
    pub overlay: Option<Overlay>,
    pub toast: Option<Toast>,
}

const TOAST_TTL: Duration = Duration::from_secs(3);

impl App {
    pub fn new(store: TaskStore, theme: Theme) -> Self {
        App {
            store,
            tasks: None,
            load_error: None,
            theme,
            should_quit: false,
            cursor: Cursor::default(),
            overlay: None,
            toast: None,
        }
    }

    /// Refetch the collection when the cache is stale. A failure keeps
    /// the previous snapshot; convergence happens on the next success.
    pub fn refresh(&mut self, rt: &Runtime) {
        if !self.store.is_stale() {
            return;
        }
        match rt.block_on(self.store.tasks()) {
            Ok(tasks) => {
                self.tasks = Some(tasks.to_vec());
                self.load_error = None;
                self.clamp_cursor();
            }
            Err(e) => {
                let message = error_message(&e);
                self.load_error = Some(message.clone());
                self.toast_error(message);
            }
        }
    }

    /// Task under the board cursor
    pub fn selected_task(&self) -> Option<&Task> {
        let tasks = self.tasks.as_ref()?;
        let columns = partition(tasks);
        columns
            .get(self.cursor.column)?
            .tasks
            .get(self.cursor.row)
            .copied()
    }

    pub fn clamp_cursor(&mut self) {
        let Some(tasks) = self.tasks.as_ref() else {
            self.cursor = Cursor::default();
            return;
        };
        let columns = partition(tasks);
        self.cursor.column = self.cursor.column.min(columns.len() - 1);
        let len = columns[self.cursor.column].tasks.len();
        self.cursor.row = self.cursor.row.min(len.saturating_sub(1));
    }

    /// Open the detail dialog on a detached copy of the selected task
    pub fn open_detail(&mut self) {
        if let Some(task) = self.selected_task().cloned() {
            self.overlay = Some(Overlay::Detail(DetailView::new(task)));
        }
    }

    /// Submit the add dialog. An empty post-trim title refuses without
    /// touching the network; success drops the draft and closes.
    pub fn submit_add(&mut self, rt: &Runtime) {
        let Some(Overlay::Add(dialog)) = &self.overlay else {
            return;
        };
        let Some(data) = dialog.submit() else {
            return;
        };
        match rt.block_on(self.store.create(&data)) {
            Ok(_) => {
                self.overlay = None;
                self.toast_info("Task created");
            }
            Err(e) => {
                let message = error_message(&e);
                self.toast_error(message);
            }
        }
    }

    /// Submit a partial update for the open detail view's task and, on
    /// success, apply the same patch to the held copy immediately.
    pub fn update_detail(&mut self, rt: &Runtime, patch: TaskPatch) {
        let Some(Overlay::Detail(view)) = &mut self.overlay else {
            return;
        };
        let id = view.task.id.clone();
        match rt.block_on(self.store.update(&id, &patch)) {
            Ok(_) => {
                patch.apply_to(&mut view.task);
                self.toast_info("Task updated");
            }
            Err(e) => {
                let message = error_message(&e);
                self.toast_error(message);
            }
        }
    }

    /// Delete the open detail view's task and close the view on success
    pub fn delete_detail(&mut self, rt: &Runtime) {
        let Some(Overlay::Detail(view)) = &self.overlay else {
            return;
        };
        let id = view.task.id.clone();
        match rt.block_on(self.store.remove(&id)) {
            Ok(()) => {
                self.overlay = None;
                self.toast_info("Task deleted");
            }
            Err(e) => {
                let message = error_message(&e);
                self.toast_error(message);
            }
        }
    }

    pub fn toast_info(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            kind: ToastKind::Info,
            deadline: Instant::now() + TOAST_TTL,
        });
    }

    pub fn toast_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            kind: ToastKind::Error,
            deadline: Instant::now() + TOAST_TTL,
        });
    }

    /// Drop the toast once its deadline passes
    pub fn tick_toast(&mut self) {
        if let Some(toast) = &self.toast
            && Instant::now() >= toast.deadline
        {
            self.toast = None;
        }
    }
}

/// Human-readable message for a failed operation
pub fn error_message(err: &ApiError) -> String {
    let message = err.to_string();
    if message.is_empty() {
        "Unknown error".to_string()
    } else {
        message
    }
}

/// Run the TUI application
pub fn run(api_url: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load(api_url)?;
    let runtime = Runtime::new()?;
    let http = HttpClient::new(config.api.base_url);
    let store = TaskStore::new(TaskService::new(http));
    let theme = Theme::from_config(&config.ui);
    let mut app = App::new(store, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, &runtime);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rt: &Runtime,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // invalidate-then-refetch: any mutation left the cache stale
        app.refresh(rt);
        app.tick_toast();

        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, rt, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
