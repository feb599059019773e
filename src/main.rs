mod app;
mod cli;
mod dispatch;
mod events;
mod logging;
mod models;
mod panel;
mod service;
mod terminal;
mod theme;
mod toast;
mod ui;
mod utils;
mod watcher;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

use app::App;
use cli::CliConfig;
use dispatch::{Outcome, Request};
use events::KeyAction;
use service::{JsonProjectStore, ProjectService};
use terminal::TerminalGuard;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const MSG_OPEN_ERROR: &str = "Failed to open attachment";

/// Handles shared by everything that issues requests
struct Runner {
    service: Arc<dyn ProjectService>,
    upload_delay: Duration,
    outcomes: UnboundedSender<Outcome>,
}

impl Runner {
    fn spawn(&self, request: Request) {
        dispatch::spawn(
            Arc::clone(&self.service),
            request,
            self.upload_delay,
            self.outcomes.clone(),
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Project selection happens on plain stdin, before the alternate screen
    let config = cli::parse_args().context("startup")?;
    let _log_guard = logging::init_tracing(config.log_dir.as_deref())?;
    info!(
        store = %config.store_path.display(),
        project = %config.project_id,
        read_only = !config.can_edit,
        "starting dashboard"
    );

    let result = run(&config);
    match &result {
        Ok(()) => info!("dashboard closed"),
        Err(err) => warn!(error = %err, "dashboard exited with error"),
    }
    result
}

fn run(config: &CliConfig) -> Result<()> {
    let store = JsonProjectStore::new(config.store_path.clone());
    info!(path = %store.path().display(), "using project store");
    let service: Arc<dyn ProjectService> = Arc::new(store);
    let mut app = App::new(config);

    // Keep the watcher alive for the whole session
    let _watcher = watcher::setup_store_watcher(
        config.store_path.clone(),
        Arc::clone(&app.store_needs_reload),
    );

    let (tx, rx) = mpsc::unbounded_channel();
    let runner = Runner {
        service,
        upload_delay: config.upload_delay,
        outcomes: tx,
    };
    runner.spawn(app.refresh_request());

    let mut terminal = TerminalGuard::new()?;
    event_loop(&mut terminal, &mut app, &runner, rx)
}

fn event_loop(
    terminal: &mut TerminalGuard,
    app: &mut App,
    runner: &Runner,
    mut outcomes: UnboundedReceiver<Outcome>,
) -> Result<()> {
    loop {
        app.panel.toasts.prune(Instant::now());
        terminal.draw(|frame| ui::render_dashboard(app, frame))?;

        while let Ok(outcome) = outcomes.try_recv() {
            if let Some(follow_up) = app.apply_outcome(outcome) {
                runner.spawn(follow_up);
            }
        }

        if let Some(request) = app.reload_if_needed() {
            runner.spawn(request);
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match events::handle_key_event(app, key) {
            KeyAction::None => {}
            KeyAction::Quit => break,
            KeyAction::Dispatch(request) => runner.spawn(request),
            KeyAction::OpenUrl(url) => {
                if let Err(err) = utils::open_external(&url) {
                    warn!(url = %url, error = %err, "failed to open attachment");
                    app.panel.notify(MSG_OPEN_ERROR);
                }
            }
        }
    }
    Ok(())
}
