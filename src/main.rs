//! folio - Terminal Portfolio
//!
//! A TUI for browsing a personal portfolio.
//!
//! Features:
//! - Home, About, Experience, Skills, Projects and Connect views
//! - Light/dark theme, remembered between runs
//! - Navigation menu overlay
//! - Skill badges with a single fallback
//! - Copy guard notice
//!
//! Usage: folio [--content FILE] [--theme light|dark]

mod app;
mod appearance;
mod config;
mod content;
mod controller;
mod icons;
mod opener;
mod types;
mod ui;

use anyhow::{bail, Context, Result};
use app::App;
use config::{ConfigStore, MemoryStore, PreferenceStore};
use content::ContentStore;
use controller::ViewController;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use opener::SystemOpener;
use ratatui::prelude::*;
use std::fs::{self, OpenOptions};
use std::io::{stdout, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use types::ThemeMode;

/// Parsed command line
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    help: bool,
    version: bool,
    dump_content: bool,
    content: Option<PathBuf>,
    theme: Option<ThemeMode>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("Try 'folio --help' for more information.");
            std::process::exit(2);
        }
    };

    if options.help {
        print_help();
        return Ok(());
    }

    if options.version {
        println!("folio {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if options.dump_content {
        println!("{}", ContentStore::builtin().to_json()?);
        return Ok(());
    }

    if let Err(e) = run_app(options) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-v" | "--version" => options.version = true,
            "--dump-content" => options.dump_content = true,
            "--content" => {
                let path = iter.next().context("--content needs a file path")?;
                options.content = Some(PathBuf::from(path));
            }
            "--theme" => {
                let value = iter.next().context("--theme needs 'light' or 'dark'")?;
                let theme = ThemeMode::parse(value)
                    .with_context(|| format!("Unknown theme '{}', expected 'light' or 'dark'", value))?;
                options.theme = Some(theme);
            }
            other => bail!("Unknown argument '{}'", other),
        }
    }

    Ok(options)
}

fn print_help() {
    println!(
        r#"folio - Terminal Portfolio

USAGE:
    folio [OPTIONS]

OPTIONS:
    --content <FILE>       Load portfolio content from a JSON file
    --dump-content         Print the built-in content as JSON and exit
    --theme <light|dark>   Start with this theme (not saved)
    -h, --help             Print help information
    -v, --version          Print version information

KEYBINDINGS:
    1-6              Switch tabs
    h/l, ←/→         Previous/next tab
    j/k              Scroll, or move selection (Skills, Connect)
    Enter            Open selected link or badge
    n                Next credential (About)
    m                Toggle menu (tabs and social links)
    t                Toggle light/dark theme
    c                Open CV
    ?                Help
    q                Quit

CONFIG:
    ~/.config/folio/config.toml

LOGGING:
    FOLIO_LOG=debug writes to the folio.log file in the user cache directory
"#
    );
}

/// Send tracing output to a log file; the terminal belongs to the UI
fn init_logging() -> Option<PathBuf> {
    let dir = dirs::cache_dir()?.join("folio");
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join("folio.log");
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(path)
}

/// Open the theme store, falling back to memory when there is nowhere to write
fn open_preference_store() -> Box<dyn PreferenceStore> {
    match ConfigStore::open_default() {
        Ok(store) => {
            tracing::debug!(path = %store.path().display(), "using config store");
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!("no config location, theme will not persist: {:#}", e);
            Box::new(MemoryStore::default())
        }
    }
}

fn run_app(options: Options) -> Result<()> {
    let log_path = init_logging();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), log = ?log_path, "starting folio");

    let content = match &options.content {
        Some(path) => ContentStore::load(path)?,
        None => ContentStore::builtin(),
    };

    let store = open_preference_store();
    let stored = store.load_theme().unwrap_or_else(|e| {
        tracing::warn!("ignoring unreadable theme preference: {:#}", e);
        None
    });
    let theme = options
        .theme
        .unwrap_or_else(|| appearance::resolve_initial_theme(stored, appearance::prefers_dark));
    tracing::info!(theme = theme.as_str(), stored = ?stored, "initial theme");

    let controller = ViewController::new(theme, store);
    let mut app = App::new(content, controller, Box::new(SystemOpener));

    let mut session = TerminalSession::start()?;
    let result = main_loop(&mut session.terminal, &mut app);
    drop(session);

    tracing::info!("exiting");
    result
}

/// Raw mode, alternate screen and mouse capture for the lifetime of the value.
///
/// Mouse capture is what lets right clicks reach the copy guard; dropping the
/// session releases all of it, including on error paths.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn start() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to setup terminal");
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|frame| {
            app.set_viewport(frame.area());
            ui::render(frame, app);
        })?;

        // Poll for events with timeout (for timer updates)
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, Instant::now());
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                _ => {}
            }
        }

        app.tick(Instant::now());

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
