use clap::Parser;
use macroquad::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use forager::config::{self, Settings};
use forager::reporting;
use forager::stats::FitnessHistory;
use forager::ui::{self, UiActions, UiState};
use forager::{renderer, save_load, Session};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "forager")]
#[command(about = "Neural-network animals evolving to find food")]
struct Args {
    /// JSON file overriding the default slider values
    #[arg(long, default_value = config::DEFAULT_SETTINGS_PATH)]
    config: PathBuf,

    /// Run this many generations without a window, then exit
    #[arg(long)]
    headless: Option<usize>,

    /// Where the headless report is written (stdout when omitted)
    #[arg(long)]
    report: Option<PathBuf>,

    /// Random seed, overrides the one in the settings file
    #[arg(long)]
    seed: Option<u64>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Forager".to_string(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    let mut settings = match Settings::load_or_default(&args.config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("failed to load settings from {}: {e}", args.config.display());
            std::process::exit(1);
        }
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    if let Some(generations) = args.headless {
        let result = reporting::run_headless(&settings, generations)
            .and_then(|report| report.write(args.report.as_deref()));
        if let Err(e) = result {
            tracing::error!("headless run failed: {e}");
            std::process::exit(1);
        }
        return;
    }

    macroquad::Window::from_config(window_conf(), run(settings));
}

async fn run(settings: Settings) {
    let mut ui_state = UiState::from_settings(&settings);
    let mut session = match Session::from_params(ui_state.spawn, settings.seed) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("failed to start simulation: {e}");
            return;
        }
    };
    let mut history = FitnessHistory::new(config::FITNESS_HISTORY);
    let mut pending = UiActions::default();

    loop {
        if !ui::wants_keyboard() {
            if is_key_pressed(KeyCode::Space) {
                ui_state.paused = !ui_state.paused;
            }
            if is_key_pressed(KeyCode::Enter) {
                pending.restart = true;
            }
            if is_key_pressed(KeyCode::G) {
                ui_state.show_graph = !ui_state.show_graph;
            }

            // Save/Load (Ctrl+S / Ctrl+L)
            if is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl) {
                if is_key_pressed(KeyCode::S) {
                    match save_load::save_to_file(&session, config::DEFAULT_SAVE_PATH) {
                        Ok(()) => tracing::info!("saved to {}", config::DEFAULT_SAVE_PATH),
                        Err(e) => tracing::error!("save failed: {e}"),
                    }
                }
                if is_key_pressed(KeyCode::L) {
                    match save_load::load_from_file(config::DEFAULT_SAVE_PATH) {
                        Ok(loaded) => {
                            session = loaded;
                            ui_state.spawn = *session.spawn_params();
                            history.reset();
                            tracing::info!(
                                "loaded {} (generation {})",
                                config::DEFAULT_SAVE_PATH,
                                session.generation()
                            );
                        }
                        Err(e) => tracing::error!("load failed: {e}"),
                    }
                }
            } else if is_key_pressed(KeyCode::T) {
                pending.train = true;
            }
        }

        if pending.restart {
            match session.restart(ui_state.spawn) {
                Ok(()) => history.reset(),
                Err(e) => tracing::error!("restart failed: {e}"),
            }
        }

        let params = ui_state.read_step_params();

        if pending.train {
            match session.train(&params) {
                Ok(stats) => history.record(&stats),
                Err(e) => tracing::error!("training failed: {e}"),
            }
        }

        if !ui_state.paused {
            match session.step(&params) {
                Ok(Some(stats)) => history.record(&stats),
                Ok(None) => {}
                Err(e) => tracing::error!("step failed: {e}"),
            }
        }

        renderer::draw(&session.world(), session.generation(), ui_state.paused);
        pending = ui::draw_ui(&mut ui_state, &history, session.generation());

        next_frame().await;
    }
}
