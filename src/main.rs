mod api;
mod app;
mod batches;
mod cli;
mod event;
mod keys;
mod logging;
mod pagination;
mod settings;
mod theme;
mod time;
mod tui;
mod views;

#[cfg(test)]
mod test_utils;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::Frame;
use tracing::{info, warn};

use api::HnClient;
use app::App;
use cli::{Cli, Commands, RenderArgs};
use event::Event;
use settings::{Config, Settings};
use theme::default_for_variant;
use tui::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = settings::config_dir(cli.config_dir.as_ref());
    let mut log_candidates: Vec<_> = config_dir
        .as_deref()
        .map(settings::log_path)
        .into_iter()
        .collect();
    log_candidates.push(logging::fallback_log_path());
    let _log_guard = match logging::init(&log_candidates, cli.verbose) {
        Some((guard, path)) => {
            if cli.verbose {
                eprintln!("Logging to {}", path.display());
            }
            Some(guard)
        }
        None => {
            eprintln!("Warning: no usable log file, continuing without logs");
            None
        }
    };

    let settings = config_dir
        .as_ref()
        .map(|dir| {
            let path = settings::settings_path(dir);
            Settings::load(&path).unwrap_or_else(|e| {
                eprintln!("Warning: {}", e);
                warn!(error = %e, "ignoring settings file");
                Settings::default()
            })
        })
        .unwrap_or_default();
    let config = Config::resolve(&cli, &settings)?;
    info!(?config, "starting");

    let client =
        HnClient::new(config.api_base.as_str()).context("Failed to create HTTP client")?;
    let theme = default_for_variant(config.variant);
    info!(theme = %theme.name, variant = ?theme.variant, "theme selected");
    let mut app = App::new(client, config.max_stories, theme);

    match &cli.command {
        Some(Commands::Render(args)) => run_render(&mut app, args).await,
        None => run_tui(app).await,
    }
}

async fn run_render(app: &mut App, args: &RenderArgs) -> Result<()> {
    app.run_headless(args.batches).await;

    let state = &app.state;
    info!(
        stories = state.stories().len(),
        batches = state.completed_batches(),
        "rendering page"
    );
    let page = views::html::render_page(
        state.stories(),
        state.load_more_busy(),
        app.clock.now(),
    );

    match &args.output {
        Some(path) => write_page(path, &page),
        None => {
            print!("{page}");
            Ok(())
        }
    }
}

fn write_page(path: &Path, page: &str) -> Result<()> {
    std::fs::write(path, page)
        .with_context(|| format!("Failed to write page to {}", path.display()))
}

async fn run_tui(mut app: App) -> Result<()> {
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new(250);

    app.start();

    let result = async {
        loop {
            terminal.draw(|frame| render(&app, frame))?;

            // Poll async results (non-blocking)
            while let Ok(result) = app.result_rx.try_recv() {
                app.handle_async_result(result);
            }

            if app.should_quit {
                break;
            }

            match events.next().await? {
                Event::Key(key) => {
                    if let Some(msg) = keys::handle_key(key) {
                        app.update(msg);
                    }
                }
                Event::Tick | Event::Resize => {}
            }
        }
        Ok::<(), anyhow::Error>(())
    }
    .await;

    tui::restore()?;
    info!("exiting");
    result
}

fn render(app: &App, frame: &mut Frame) {
    use ratatui::layout::{Constraint, Layout};

    let area = frame.area();

    let (main_area, debug_area) = if app.debug.visible {
        let chunks = Layout::vertical([
            Constraint::Min(0),     // Main content
            Constraint::Length(10), // Debug pane
        ])
        .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    views::stories::render(frame, app, main_area);

    if let Some(debug_area) = debug_area {
        views::debug::render(frame, app, debug_area);
    }
}
