use std::io;
use std::sync::mpsc;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::client::{GenerateClient, HttpGenerateClient};
use crate::clipboard::ClipboardHandler;
use crate::protocol::GenerateRequest;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the terminal form against `endpoint` until the user quits.
pub fn run(endpoint: String) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    let client = HttpGenerateClient::new(endpoint);
    tracing::info!(endpoint = client.endpoint(), "compose started");

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new();
    let mut clipboard = ClipboardHandler::new();
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => match handle_key(&mut app, key) {
                InputAction::None => {}
                InputAction::Generate => {
                    // Controls are disabled while a request is in flight
                    if !app.controller().is_loading() {
                        if let Some(request) = app.controller_mut().begin_generate() {
                            spawn_generate(&runtime, &client, request, events.sender());
                        }
                    }
                }
                InputAction::Regenerate => {
                    if !app.controller().is_loading() {
                        if let Some(request) = app.controller_mut().begin_regenerate() {
                            spawn_generate(&runtime, &client, request, events.sender());
                        }
                    }
                }
                InputAction::Copy => app.controller_mut().copy_answer(&mut clipboard),
                InputAction::Send => app.controller_mut().simulate_send(),
            },
            Ok(AppEvent::Paste(text)) => app.on_paste(text),
            Ok(AppEvent::GenerateSettled(outcome)) => app.controller_mut().settle(outcome),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("compose finished");
    Ok(())
}

fn spawn_generate(
    runtime: &Runtime,
    client: &HttpGenerateClient,
    request: GenerateRequest,
    tx: mpsc::Sender<AppEvent>,
) {
    let client = client.clone();
    runtime.spawn(async move {
        let outcome = client.generate(&request).await;
        // The receiver is gone only when the form already closed
        let _ = tx.send(AppEvent::GenerateSettled(outcome));
    });
}
