// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod app;
mod data;
mod error;
mod events;
mod settings;
mod source;
mod ui;

use app::App;
use data::{Figure, Variant};
use settings::{Settings, ThemeChoice};
use source::LineSource;
use ui::Theme;

#[derive(Parser, Debug)]
#[command(name = "packet-doctor")]
#[command(about = "Chart LoRa packet encryption timing and delivery failures read from stdin")]
struct Args {
    /// Panel layout: three-panel omits empty failure lists,
    /// two-panel draws an empty list as all successes
    #[arg(short, long, value_enum)]
    variant: Option<Variant>,

    /// Color theme
    #[arg(short, long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Settings file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "packet_doctor=debug")
    #[arg(long)]
    log_level: Option<String>,

    /// Print the laid-out figure as JSON and exit without opening the viewer
    #[arg(short, long)]
    dump: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings =
        Settings::load(args.config.as_deref()).context("failed to load settings")?;
    settings.apply_overrides(args.variant, args.theme, args.log_level);

    init_logging(&settings.log_level);
    debug!(?settings, "settings resolved");

    let mut source = LineSource::stdin();
    let input = source
        .read()
        .with_context(|| format!("failed to read trace from {}", source.description()))?;
    let figure = Figure::build(&input, settings.variant)?;
    info!(
        variant = settings.variant.label(),
        packages = input.elapsed.len(),
        panels = figure.panels.len(),
        "figure ready"
    );

    // Handle dump mode (non-interactive)
    if args.dump {
        println!("{}", figure.to_pretty_json()?);
        return Ok(());
    }

    let app = App::new(figure, source.description(), Theme::from_choice(settings.theme));
    run_tui(app)
}

/// Install the stderr log subscriber.
fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Run the viewer until it is dismissed
fn run_tui(mut app: App) -> Result<()> {
    // Setup panic hook to restore terminal, before the terminal changes mode
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        restore_terminal();
        original_hook(panic);
    }));

    // Setup terminal
    let mut terminal = setup_or_restore(setup_terminal, restore_terminal)
        .context("failed to set up the terminal")?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("viewer closed");
    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Run `setup`, calling `restore` if it fails partway through.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|_| restore())
}

/// Best-effort return to cooked mode on the main screen.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        terminal.draw(|frame| {
            let area = frame.area();

            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                ui::common::render_too_small(frame, area, MIN_WIDTH, MIN_HEIGHT);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(8),    // Panels
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::chart::render(frame, app, chunks[1]);
            ui::common::render_status_bar(frame, app, chunks[2]);

            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Block here until a key arrives; resizes just trigger a redraw
        if let Some(Event::Key(key)) = events::poll_event(Duration::from_millis(250))? {
            events::handle_key_event(app, key);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: io::Result<()> = setup_or_restore(
            || Err(io::Error::other("no tty")),
            || restored.set(true),
        );
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let restored = Cell::new(false);
        let result = setup_or_restore(|| Ok(42), || restored.set(true));
        assert_eq!(result.unwrap(), 42);
        assert!(!restored.get());
    }

    #[test]
    fn test_args_override_settings() {
        let args = Args::parse_from(["packet-doctor", "--variant", "two-panel", "--dump"]);
        assert!(args.dump);

        let mut settings = Settings::default();
        settings.apply_overrides(args.variant, args.theme, args.log_level);
        assert_eq!(settings.variant, Variant::TwoPanel);
        assert_eq!(settings.theme, ThemeChoice::Auto);
        assert_eq!(settings.log_level, "warn");
    }
}
