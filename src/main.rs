use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use nudge::app::{
    App, handle_key, handle_mouse_down, handle_mouse_drag, handle_mouse_move, handle_mouse_up,
    render,
};
use nudge::config::load_config;

/// Terminal notepad with ambient AI writing suggestions
#[derive(Parser, Debug)]
#[command(name = "nudge", version, about)]
struct Cli {
    /// File whose contents seed the document (read-only; nothing is
    /// written back)
    file: Option<PathBuf>,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// How long the event loop waits before running a timer tick
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Logging is only wired up in debug builds
    #[cfg(debug_assertions)]
    env_logger::init();

    color_eyre::install()?;

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let (initial_text, title) = match &cli.file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
            let title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Untitled".to_string());
            (Some(text), title)
        }
        None => (None, "Untitled".to_string()),
    };

    let app = App::new(&config, initial_text, title);

    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, app);

    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| render(&mut app, frame))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only process key press events (avoid duplicates)
                    if key.kind == KeyEventKind::Press {
                        handle_key(&mut app, key);
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => handle_mouse_down(&mut app, mouse),
                    MouseEventKind::Up(MouseButton::Left) => handle_mouse_up(&mut app, mouse),
                    MouseEventKind::Drag(MouseButton::Left) => handle_mouse_drag(&mut app, mouse),
                    MouseEventKind::Moved => handle_mouse_move(&mut app, mouse),
                    _ => {}
                },
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
