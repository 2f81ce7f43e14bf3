mod app;
mod domain;
mod input;
mod logging;
mod persistence;
mod report;
mod store;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
        KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::SortOrder;
use persistence::{
    ensure_dir, get_data_dir, init_local_dir, load_settings_or_default, settings_file,
    JsonFileRepository, TaskRepository,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use store::TaskStore;
use ticker::SessionTimer;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "A small terminal todo list with progress stats and a session timer", long_about = None)]
struct Cli {
    /// Storage directory. Defaults to the nearest .todo directory, then ~/.todo
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .todo directory in the current directory
    Init,
    /// Print the task list
    List {
        /// Display order. Defaults to the order last chosen in the UI.
        #[arg(short, long, value_enum)]
        sort: Option<SortOrder>,
    },
    /// Add a task without opening the UI
    Add {
        /// Task text
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print completion statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let current_dir =
                std::env::current_dir().context("Could not determine current directory")?;
            let dir = init_local_dir(&current_dir)?;
            println!("Initialized todo directory: {}", dir.display());
            println!();
            println!("Todo will now store tasks here when run from this directory or below.");
            Ok(())
        }
        Some(Commands::List { sort }) => {
            let data_dir = prepare_data_dir(cli.dir)?;
            let store = open_store(&data_dir);
            let order = sort.unwrap_or_else(|| {
                load_settings_or_default(settings_file(&data_dir)).sort_order
            });
            print!("{}", report::format_task_list(store.tasks(), order));
            Ok(())
        }
        Some(Commands::Add { text }) => {
            let data_dir = prepare_data_dir(cli.dir)?;
            let mut store = open_store(&data_dir);
            let id = store
                .add(&text.join(" "))
                .context("Task text is empty after trimming")?;
            if store.last_save_failed() {
                anyhow::bail!("Task was not saved, see the log in {}", data_dir.display());
            }
            println!("Added {}", id.short());
            Ok(())
        }
        Some(Commands::Stats) => {
            let data_dir = prepare_data_dir(cli.dir)?;
            let store = open_store(&data_dir);
            print!("{}", report::format_stats(&store.stats()));
            Ok(())
        }
        None => {
            let data_dir = prepare_data_dir(cli.dir)?;
            run_tui(&data_dir)
        }
    }
}

/// Resolve and create the storage directory, then start file logging there
fn prepare_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    let data_dir = match override_dir {
        Some(dir) => dir,
        None => get_data_dir()?,
    };
    ensure_dir(&data_dir)?;

    if let Err(e) = logging::init(&data_dir) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    Ok(data_dir)
}

fn open_store(data_dir: &Path) -> TaskStore<Box<dyn TaskRepository>> {
    let repo = JsonFileRepository::new(data_dir);
    tracing::debug!("Task file: {}", repo.path().display());
    TaskStore::open(Box::new(repo) as Box<dyn TaskRepository>)
}

fn run_tui(data_dir: &Path) -> Result<()> {
    let settings_path = settings_file(data_dir);
    let settings = load_settings_or_default(&settings_path);
    tracing::info!("Using todo directory: {}", data_dir.display());

    let mut app = AppState::new(
        open_store(data_dir),
        SessionTimer::start(),
        settings,
        Some(settings_path),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    // Commit any open edit and stop the session timer
    app.shutdown();
    println!("{}", report::format_session_summary(&app.stats(), app.elapsed()));

    if let Err(err) = result {
        tracing::error!("UI loop failed: {:#}", err);
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration(&app.settings);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Wake up at least every tick so the session timer redraws
        if event::poll(tick_rate)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::handle_key(app, key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::FocusLost => app.handle_focus_lost(),
                _ => {}
            }
        }
    }
}
