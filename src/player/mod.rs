//! Demo host: a simulated video player wired to the quiz core.
//!
//! The clock task feeds position notifications over a channel; the main
//! loop selects over those, keyboard input, and the pending
//! feedback-dismissal timer, then redraws.

mod app;
mod audio;
mod screen;
mod sim;
mod ui;

pub use app::{EditorField, EditorForm, Mode, PlayerApp, QuizDraft};
pub use audio::TerminalBell;
pub use screen::{OverlayModel, SharedOverlay};
pub use sim::{SimVideo, VideoNotification};

use std::io::{self, Stdout};
use std::panic;
use std::path::PathBuf;

use crossterm::ExecutableCommand;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::presenter::QuizPresenter;
use crate::store::{FileStore, QuizStore};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run the demo player until the user quits.
pub async fn run(
    storage_path: PathBuf,
    duration_secs: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let storage = FileStore::open(storage_path);
    let store = QuizStore::restore(Box::new(storage));
    log::info!("restored {} quizzes", store.len());

    let (video, mut notifications) = SimVideo::new(duration_secs as f64);
    let overlay = SharedOverlay::default();
    let presenter = QuizPresenter::new(
        Box::new(video.clone()),
        Box::new(TerminalBell),
        Box::new(overlay.clone()),
    );

    let mut app = PlayerApp::new(store, presenter, video.clone(), overlay);
    video.spawn_clock();

    let mut terminal = init_terminal()?;
    let mut input = EventStream::new();

    loop {
        if app.should_quit {
            break;
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        let deadline = app.dismiss_at;
        let dismissal = async move {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            notification = notifications.recv() => {
                let Some(notification) = notification else { break };
                app.handle_notification(notification);
            }
            _ = dismissal => {
                app.handle_dismiss_due();
            }
            event = input.next() => {
                match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            break;
                        }
                        app.handle_key(key.code);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(_)) | None => break,
                }
            }
        }
    }

    restore_terminal()?;
    Ok(())
}

fn init_terminal() -> io::Result<AppTerminal> {
    setup_panic_hook();
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

// Restore the terminal before the default hook prints, or the message is
// lost to the alternate screen.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
