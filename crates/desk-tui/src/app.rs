//! Main application loop for the TUI.
//!
//! One loop owns the state. Keyboard input becomes actions, actions become
//! effects, effects become spawned requests, and completed requests come
//! back as messages over the channel. Each fetch carries the generation it
//! was spawned under, so a completion for a view the user already left is
//! dropped by the state, not rendered.

use crate::input::map_key;
use crate::state::{AppState, AuthKind, Effect, Fetch, Msg};
use crate::widgets;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use desk_api::{DeskApi, refresh_session};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Duration, interval};
use tracing::debug;

/// Main TUI application.
pub struct App {
    api: Arc<DeskApi>,
}

impl App {
    pub fn new(api: DeskApi) -> Self {
        Self { api: Arc::new(api) }
    }

    /// Runs the TUI event loop until quit or Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let api = self.api;

        // Establish the session once at start; the guard decides whether
        // the first view is the ticket list or the login form.
        let session = refresh_session(&api).await;
        let (mut state, initial_fetch) = AppState::new(session);

        let (tx, mut rx) = mpsc::unbounded_channel::<Msg>();
        if let Some(fetch) = initial_fetch {
            spawn_fetch(&api, &tx, state.generation, fetch);
        }

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let mut tick = interval(Duration::from_millis(100));

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    terminal.draw(|f| widgets::render(f, &state))?;

                    // Drain pending keyboard events.
                    while event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key) = event::read()?
                            && key.kind == KeyEventKind::Press
                        {
                            let action = map_key(&state, key);
                            for effect in state.apply_action(action) {
                                run_effect(&api, &tx, &mut state, effect);
                            }
                        }
                    }

                    if state.should_quit {
                        break;
                    }
                }
                Some(msg) = rx.recv() => {
                    if let Some(fetch) = state.apply_msg(msg) {
                        spawn_fetch(&api, &tx, state.generation, fetch);
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    break;
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

        Ok(())
    }
}

/// Performs one effect: logout synchronously, everything else as a
/// spawned request reporting back over the channel.
fn run_effect(
    api: &Arc<DeskApi>,
    tx: &mpsc::UnboundedSender<Msg>,
    state: &mut AppState,
    effect: Effect,
) {
    match effect {
        Effect::Fetch(fetch) => spawn_fetch(api, tx, state.generation, fetch),

        Effect::Logout => {
            let session = desk_api::logout(api);
            if let Some(fetch) = state.set_session(session) {
                spawn_fetch(api, tx, state.generation, fetch);
            }
        }

        Effect::Login { username, password } => {
            let api = Arc::clone(api);
            let tx = tx.clone();
            tokio::spawn(async move {
                // Login stores tokens; the session is rebuilt from the
                // identity endpoint as a separate step.
                let result = match api.login(&username, &password).await {
                    Ok(()) => Ok(refresh_session(&api).await),
                    Err(err) => Err(err),
                };
                let _ = tx.send(Msg::AuthDone {
                    kind: AuthKind::Login,
                    result,
                });
            });
        }

        Effect::Register { username, password } => {
            let api = Arc::clone(api);
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = async {
                    api.register(&username, &password).await?;
                    api.login(&username, &password).await?;
                    Ok(refresh_session(&api).await)
                }
                .await;
                let _ = tx.send(Msg::AuthDone {
                    kind: AuthKind::Register,
                    result,
                });
            });
        }

        Effect::CreateTicket { title, description } => {
            let api = Arc::clone(api);
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.create_ticket(&title, &description).await;
                let _ = tx.send(Msg::TicketCreated(result));
            });
        }

        Effect::AddComment { ticket, message } => {
            let api = Arc::clone(api);
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.create_comment(ticket, &message).await;
                let _ = tx.send(Msg::CommentAdded(result));
            });
        }

        Effect::UpdateStatus { ticket, status } => {
            let api = Arc::clone(api);
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.update_status(ticket, status).await;
                let _ = tx.send(Msg::StatusUpdated(result));
            });
        }
    }
}

/// Spawns a read for the current view, tagged with the generation so a
/// late completion after navigation is ignored.
fn spawn_fetch(
    api: &Arc<DeskApi>,
    tx: &mpsc::UnboundedSender<Msg>,
    generation: u64,
    fetch: Fetch,
) {
    debug!("Spawning fetch {:?} (generation {})", fetch, generation);
    let api = Arc::clone(api);
    let tx = tx.clone();

    match fetch {
        Fetch::Tickets => {
            tokio::spawn(async move {
                let result = api.list_tickets().await;
                let _ = tx.send(Msg::TicketsLoaded { generation, result });
            });
        }
        Fetch::Detail(id) => {
            tokio::spawn(async move {
                let result = async {
                    let ticket = api.get_ticket(id).await?;
                    let comments = api.list_comments(id).await?;
                    Ok((ticket, comments))
                }
                .await;
                let _ = tx.send(Msg::DetailLoaded { generation, result });
            });
        }
        Fetch::Dashboard => {
            tokio::spawn(async move {
                let result = api.analytics_summary().await;
                let _ = tx.send(Msg::SummaryLoaded { generation, result });
            });
        }
    }
}
