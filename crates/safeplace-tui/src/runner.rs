//! Event loop runner: owns the terminal, drains the message channel,
//! applies updates, and executes the actions the reducer requests.

use std::process::{Command, Stdio};

use tokio::sync::mpsc;
use tracing::warn;

use safeplace_app::handler::{update, UpdateAction};
use safeplace_app::message::Message;
use safeplace_app::state::AppState;
use safeplace_app::Engine;
use safeplace_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// Takes over the terminal, spawns the blocking input poller and the icon
/// probe, then drives the draw/update loop from the message channel.
pub async fn run(mut engine: Engine) -> Result<()> {
    let mut term = terminal::init()?;

    engine.spawn_icon_probe();

    // Blocking crossterm poll loop on its own thread; messages flow into the
    // unified channel. The thread exits when the receiver is dropped.
    let input_tx = engine.msg_tx.clone();
    tokio::task::spawn_blocking(move || input_loop(input_tx));

    let result = event_loop(&mut term, &mut engine).await;
    if let Err(e) = terminal::restore() {
        warn!(error = %e, "terminal restore failed");
    }
    result
}

fn input_loop(tx: mpsc::Sender<Message>) {
    loop {
        match event::poll() {
            Ok(Some(message)) => {
                if tx.blocking_send(message).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "terminal event polling failed");
                break;
            }
        }
    }
}

async fn event_loop(term: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    loop {
        term.draw(|frame| render::view(frame, &mut engine.state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        let Some(message) = engine.msg_rx.recv().await else {
            return Err(Error::ChannelClosed);
        };
        process_message(&mut engine.state, message);

        // Drain whatever queued up before paying for another draw
        while let Ok(message) = engine.msg_rx.try_recv() {
            process_message(&mut engine.state, message);
        }

        if engine.state.is_quitting() {
            return Ok(());
        }
    }
}

/// Apply one message plus any follow-ups it produces.
fn process_message(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = update(state, message);
        if let Some(action) = result.action {
            handle_action(state, action);
        }
        next = result.message;
    }
}

fn handle_action(state: &mut AppState, action: UpdateAction) {
    match action {
        UpdateAction::OpenUrl { url } => {
            if let Err(e) = open_in_browser(&url) {
                warn!(error = %e, url = %url, "failed to open browser");
                state.status_notice = Some("Could not open browser".to_string());
            }
        }
    }
}

/// Open a URL with the platform opener, fire-and-forget.
fn open_in_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(url);
        c
    };

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    };

    #[cfg(all(unix, not(target_os = "macos")))]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };

    command
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::browser(e.to_string()))?;
    Ok(())
}
