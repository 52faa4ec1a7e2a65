use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::config_io;
use crate::io::state::ListUiState;
use crate::io::store::{self, Store};
use crate::model::{Config, TaskList};
use crate::ops::{filter, timer};

use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The file picker over the tasks folder
    Lists,
    /// One open checklist
    List,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
    Edit,
    Move,
    Confirm,
}

/// What the edit buffer commits to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// Append a new task to the open checklist
    NewTask,
    /// Rewrite an existing record's text
    ExistingTask(usize),
    /// Create a new checklist file
    NewList,
}

/// What a pending delete confirmation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    /// A record in the open checklist, by id
    Task(usize),
    /// A checklist file, by picker index
    List(usize),
}

/// Main application state
pub struct App {
    pub store: Store,
    pub config: Config,
    pub theme: Theme,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,

    /// Checklist files in the tasks folder (display order)
    pub files: Vec<PathBuf>,
    /// Cursor for the file picker
    pub files_cursor: usize,

    /// The open checklist, if any
    pub list: Option<TaskList>,
    /// Cursor row into the visible (possibly filtered) records
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Per-list cursor memory, restored when a list is reopened
    pub list_states: HashMap<String, ListUiState>,

    /// Search mode: query being typed
    pub search_input: String,
    /// Committed filter pattern
    pub last_search: Option<String>,

    /// Edit mode: line buffer and byte-offset cursor
    pub edit_buffer: String,
    pub edit_cursor: usize,
    pub edit_target: Option<EditTarget>,

    /// Move mode: id of the record being carried
    pub moving: Option<usize>,

    /// Confirm mode: target awaiting delete confirmation
    pub pending_delete: Option<DeleteTarget>,

    /// Transient status-row message
    pub status: Option<String>,
    /// Help overlay visible
    pub show_help: bool,
}

impl App {
    pub fn new(store: Store, config: Config) -> Self {
        let theme = Theme::from_config(&config.ui);
        let files = store.list_files();

        App {
            store,
            config,
            theme,
            view: View::Lists,
            mode: Mode::Navigate,
            should_quit: false,
            files,
            files_cursor: 0,
            list: None,
            cursor: 0,
            scroll_offset: 0,
            list_states: HashMap::new(),
            search_input: String::new(),
            last_search: None,
            edit_buffer: String::new(),
            edit_cursor: 0,
            edit_target: None,
            moving: None,
            pending_delete: None,
            status: None,
            show_help: false,
        }
    }

    /// Re-read the tasks folder, clamping the picker cursor.
    pub fn refresh_files(&mut self) {
        self.files = self.store.list_files();
        if self.files_cursor >= self.files.len() {
            self.files_cursor = self.files.len().saturating_sub(1);
        }
    }

    /// Open the checklist at `files[idx]`, restoring its remembered cursor.
    pub fn open_list(&mut self, idx: usize) {
        let Some(path) = self.files.get(idx).cloned() else {
            return;
        };
        let list = self.store.load_list(&path);
        let remembered = self.list_states.get(&list.name()).cloned().unwrap_or_default();
        self.cursor = remembered.cursor;
        self.scroll_offset = remembered.scroll_offset;
        self.list = Some(list);
        self.view = View::List;
        self.clamp_cursor();
    }

    /// Leave the open checklist, remembering its cursor. The in-memory task
    /// sequence (including timer state) is discarded.
    pub fn close_list(&mut self) {
        if let Some(list) = &self.list {
            self.list_states.insert(
                list.name(),
                ListUiState {
                    cursor: self.cursor,
                    scroll_offset: self.scroll_offset,
                },
            );
        }
        self.list = None;
        self.view = View::Lists;
        self.search_input.clear();
        self.last_search = None;
        self.moving = None;
        self.refresh_files();
    }

    /// Get the active filter regex.
    /// In Search mode: compiles from current input. In Navigate: from last_search.
    pub fn filter_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Search if !self.search_input.is_empty() => &self.search_input,
            _ => self.last_search.as_deref()?,
        };
        filter::compile(pattern)
    }

    /// True when a committed or in-progress search narrows the view.
    pub fn filter_active(&self) -> bool {
        self.last_search.is_some() || (self.mode == Mode::Search && !self.search_input.is_empty())
    }

    /// Ids of the records currently visible, in display order.
    pub fn visible_ids(&self) -> Vec<usize> {
        let Some(list) = &self.list else {
            return Vec::new();
        };
        match self.filter_re() {
            Some(re) => filter::matching_ids(list, &re),
            None => list.tasks.iter().map(|t| t.id).collect(),
        }
    }

    /// Id of the record under the cursor.
    pub fn selected_id(&self) -> Option<usize> {
        self.visible_ids().get(self.cursor).copied()
    }

    pub fn clamp_cursor(&mut self) {
        let len = match self.view {
            View::Lists => self.files.len(),
            View::List => self.visible_ids().len(),
        };
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Persist the open checklist. Failures are journaled by the store and
    /// otherwise swallowed; the session keeps running on the in-memory copy.
    pub fn save(&mut self) {
        if let Some(list) = &self.list {
            let _ = self.store.save_list(list);
        }
    }

    /// Enter move mode for the selected record. Refused while a search
    /// filter narrows the view: filtered positions are not file positions.
    pub fn enter_move_mode(&mut self) -> bool {
        if self.filter_active() {
            self.status = Some("clear search before reordering".to_string());
            return false;
        }
        let Some(id) = self.selected_id() else {
            return false;
        };
        self.moving = Some(id);
        self.mode = Mode::Move;
        true
    }

    /// 1 Hz timer tick: auto-stop any running countdown that hit its
    /// duration. Runs against the open list only; timers die with the view.
    pub fn tick_timers(&mut self) {
        let now = Local::now();
        if let Some(list) = &mut self.list {
            for task in &mut list.tasks {
                timer::tick(task, now);
            }
        }
    }
}

/// Restore UI state from .state.json
pub fn restore_ui_state(app: &mut App) {
    use crate::io::state::read_ui_state;

    let Some(ui_state) = read_ui_state(&app.store.dir) else {
        return;
    };

    app.list_states = ui_state.lists;
    app.last_search = ui_state.last_search;

    if ui_state.view == "list"
        && let Some(idx) = app
            .files
            .iter()
            .position(|p| p.file_stem().and_then(|s| s.to_str()) == Some(ui_state.open_list.as_str()))
    {
        app.files_cursor = idx;
        app.open_list(idx);
    }
}

/// Save UI state to .state.json
pub fn save_ui_state(app: &App) {
    use crate::io::state::{UiState, write_ui_state};

    let mut lists = app.list_states.clone();
    let open_list = match &app.list {
        Some(list) => {
            lists.insert(
                list.name(),
                ListUiState {
                    cursor: app.cursor,
                    scroll_offset: app.scroll_offset,
                },
            );
            list.name()
        }
        None => String::new(),
    };

    let ui_state = UiState {
        view: match app.view {
            View::Lists => "lists".to_string(),
            View::List => "list".to_string(),
        },
        open_list,
        lists,
        last_search: app.last_search.clone(),
    };

    let _ = write_ui_state(&app.store.dir, &ui_state);
}

/// Run the TUI application
pub fn run(tasks_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config();
    let dir = store::resolve_dir(tasks_dir, &config);
    let store = Store::open(dir)?;

    let mut app = App::new(store, config);
    restore_ui_state(&mut app);

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

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Save UI state before exit
    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        // Countdown bookkeeping at ~1 Hz, between input polls
        if last_tick.elapsed() >= Duration::from_secs(1) {
            app.tick_timers();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_app(contents: &str) -> (TempDir, App) {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("today.md"), contents).unwrap();
        let store = Store::open(tmp.path().to_path_buf()).unwrap();
        let mut app = App::new(store, Config::default());
        app.open_list(0);
        (tmp, app)
    }

    #[test]
    fn test_visible_ids_follow_filter() {
        let (_tmp, mut app) = test_app("[ ] buy milk\n[ ] walk dog\n[x] buy stamps");
        assert_eq!(app.visible_ids(), vec![0, 1, 2]);

        app.last_search = Some("buy".to_string());
        assert_eq!(app.visible_ids(), vec![0, 2]);
    }

    #[test]
    fn test_move_mode_rejected_while_filtered() {
        let (_tmp, mut app) = test_app("[ ] buy milk\n[ ] walk dog");
        app.last_search = Some("milk".to_string());
        assert!(!app.enter_move_mode());
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_move_mode_allowed_unfiltered() {
        let (_tmp, mut app) = test_app("[ ] buy milk\n[ ] walk dog");
        assert!(app.enter_move_mode());
        assert_eq!(app.mode, Mode::Move);
        assert_eq!(app.moving, Some(0));
    }

    #[test]
    fn test_close_list_discards_timer_state() {
        let (_tmp, mut app) = test_app("[ ] sprint {45m}");
        {
            let list = app.list.as_mut().unwrap();
            crate::ops::timer::start(&mut list.tasks[0], Local::now());
        }
        app.close_list();
        assert!(app.list.is_none());
        app.open_list(0);
        assert!(!app.list.as_ref().unwrap().tasks[0].timer_running());
    }
}
