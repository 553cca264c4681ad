mod action;
mod app;
mod catalog;
mod client;
mod config;
mod error;
mod event;
mod format;
mod pager;
mod paging;
mod transport;
mod tui;
mod types;
mod ui;

use std::panic;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::action::{Action, Effect};
use crate::app::App;
use crate::client::ChessClient;
use crate::config::Config;
use crate::error::Result;
use crate::event::Event;
use crate::transport::HttpTransport;
use crate::tui::{EventHandler, Tui};

/// Browse Chess.com players, games, clubs, tournaments and leaderboards.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {}

const RENDER_RATE: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let config = Config::load();
    let client = connect(&config)?;

    let result = run(client, config).await;

    tui::restore()?;

    result.map_err(Into::into)
}

fn connect(config: &Config) -> Result<ChessClient> {
    let transport = HttpTransport::new(&config.api.user_agent)?;
    Ok(ChessClient::new(
        Arc::new(transport),
        config.api.base_url.clone(),
    ))
}

async fn run(client: ChessClient, config: Config) -> Result<()> {
    let mut terminal = tui::init()?;
    let mut app = App::new(config.paging);
    let mut events = EventHandler::new(RENDER_RATE);

    debug!(base_url = %config.api.base_url, "started");

    while let Some(event) = events.next().await {
        if event.is_quit() {
            break;
        }

        match event {
            Event::Render => {
                terminal.draw(|frame| ui::render(frame, &app))?;
            }
            Event::Key(_) => {
                let action = app.handle_event(event);
                let mut effect = app.update(action);
                while let Some(next) = effect.take() {
                    effect = perform(next, &mut app, &client, &config, &mut terminal, &mut events)
                        .await?;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Carry out one side effect. A fetch feeds its outcome back into the app,
/// which may ask for another effect.
async fn perform(
    effect: Effect,
    app: &mut App,
    client: &ChessClient,
    config: &Config,
    terminal: &mut Tui,
    events: &mut EventHandler,
) -> Result<Option<Effect>> {
    match effect {
        Effect::Fetch(load) => {
            terminal.draw(|frame| ui::render(frame, app))?;
            let outcome = load.run(client).await;
            Ok(app.update(Action::Loaded(outcome)))
        }
        Effect::Pager(pgn) => {
            let pager_cmd = pager::detect_pager(config.general.pager.as_deref());

            // The pager owns the terminal until it exits.
            events.stop();
            tui::restore()?;

            if let Err(e) = pager::open_pager(&pgn, &pager_cmd) {
                debug!(pager = %pager_cmd, "pager failed: {}", e);
                app.error = Some(format!("Pager failed: {}", e));
            }

            *terminal = tui::init()?;
            terminal.clear()?;
            tui::drain_events();
            *events = EventHandler::new(RENDER_RATE);
            Ok(None)
        }
        Effect::OpenInBrowser(url) => {
            if let Err(e) = open::that(&url) {
                debug!(url = %url, "could not open browser: {}", e);
                app.error = Some(format!("Could not open browser: {}", e));
            }
            Ok(None)
        }
        Effect::YankUrl(url) => {
            match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url)) {
                Ok(()) => app.notice = Some("Copied URL to clipboard".to_string()),
                Err(e) => app.error = Some(format!("Clipboard unavailable: {}", e)),
            }
            Ok(None)
        }
    }
}
