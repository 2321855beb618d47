mod api;
mod app;
mod config;
mod events;
mod logging;
mod models;
mod progress;
mod reading;
mod runner;
mod slug;
mod storage;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use api::{BlogClient, BlogGenerator};
use app::{App, Focus};
use events::AppEvent;
use storage::Downloads;

#[tokio::main]
async fn main() -> Result<()> {
    let config_dir = config::get_config_dir()?;
    logging::initialize(&config_dir);

    let config = config::load_config()?;
    let client = BlogClient::from_config(&config)?;
    let downloads = config
        .download_dir
        .as_ref()
        .map_or_else(Downloads::new, Downloads::with_dir);
    log::info!(
        "Using blog service at {}, saving downloads to {}",
        client.base_url(),
        downloads.dir().display()
    );
    let generator: Arc<dyn BlogGenerator> = Arc::new(client);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let res = run_app(&mut terminal, &mut app, &generator, &downloads, &tx, &mut rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("Terminal loop failed: {err:?}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Keys that work regardless of focus. Returns `true` when consumed.
fn handle_global_keys(app: &mut App, key: KeyCode, modifiers: KeyModifiers) -> bool {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    match key {
        KeyCode::Char('c') if ctrl => {
            if app.exit_pending {
                app.quit();
            } else {
                app.exit_pending = true;
            }
            return true;
        }
        KeyCode::Char('q') if ctrl => {
            app.quit();
            return true;
        }
        KeyCode::Esc => {
            if app.show_help {
                app.show_help = false;
            } else if app.exit_pending {
                app.exit_pending = false;
            } else {
                app.toast = None;
            }
            return true;
        }
        _ if app.exit_pending => {
            // Any other key cancels pending exit
            app.exit_pending = false;
        }
        _ => {}
    }

    if app.show_help {
        if (key == KeyCode::Char('h') && ctrl) || key == KeyCode::F(1) {
            app.toggle_help();
        }
        return true;
    }

    false
}

fn handle_keyboard_input(
    app: &mut App,
    key: KeyCode,
    modifiers: KeyModifiers,
    generator: &Arc<dyn BlogGenerator>,
    downloads: &Downloads,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
) {
    if handle_global_keys(app, key, modifiers) {
        return;
    }

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    match key {
        KeyCode::Char('h') if ctrl => app.toggle_help(),
        KeyCode::F(1) => app.toggle_help(),
        KeyCode::Char('t') if ctrl => app.toggle_tab(),
        KeyCode::Char('d') if ctrl => app.download_markdown(downloads),
        KeyCode::Char('e') if ctrl => app.download_metadata(downloads),

        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Left if app.focus == Focus::Tone && !app.is_loading => app.prev_tone(),
        KeyCode::Right if app.focus == Focus::Tone && !app.is_loading => app.next_tone(),

        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::PageDown => app.scroll_down(10),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),

        KeyCode::Enter if !app.is_loading => {
            // The task runs detached; its result arrives through the channel
            let _ = runner::spawn_generation(app, generator, event_tx);
        }

        // The form is locked while a blog is being generated
        KeyCode::Backspace if app.focus == Focus::Topic && !app.is_loading => {
            app.topic_input.pop();
        }
        KeyCode::Char(c) if !ctrl && app.focus == Focus::Topic && !app.is_loading => {
            app.topic_input.push(c);
        }

        _ => {}
    }
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    generator: &Arc<dyn BlogGenerator>,
    downloads: &Downloads,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        app.expire_toast(Instant::now());
        terminal.draw(|f| ui::render(f, app))?;

        while let Ok(app_event) = event_rx.try_recv() {
            runner::handle_app_event(app, app_event);
        }

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_keyboard_input(
                        app,
                        key.code,
                        key.modifiers,
                        generator,
                        downloads,
                        event_tx,
                    );
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
