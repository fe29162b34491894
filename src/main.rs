use std::path::{Path, PathBuf};

use clap::Parser;
use macroquad::prelude::{Conf, get_frame_time, next_frame};
use tracing::{debug, error, info, warn};

use snake_levels::config::DEFAULT_CONFIG_PATH;
use snake_levels::input::InputTranslator;
use snake_levels::render::Renderer;
use snake_levels::{
    Difficulty, FrameTimer, GameConfig, GameMode, GameStateMachine, GridGeometry, logging,
    tick_period,
};

#[derive(Parser)]
#[command(name = "snake_levels")]
#[command(about = "Snake with three difficulty levels")]
struct Args {
    /// JSON file with window and board settings
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn load_config(path: &Path) -> (GameConfig, GridGeometry) {
    let loaded = GameConfig::load(path)
        .and_then(|config| config.geometry().map(|geometry| (config, geometry)));
    match loaded {
        Ok(pair) => pair,
        Err(err) => {
            error!(%err, "falling back to default config");
            let config = GameConfig::default();
            match config.geometry() {
                Ok(geometry) => (config, geometry),
                Err(err) => {
                    error!(%err, "default config is unusable");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: config.window_title.clone(),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(geometry: GridGeometry) {
    let timer = FrameTimer::new(tick_period(Difficulty::Worm.tick_rate()));
    let mut game = GameStateMachine::new(geometry.board(), timer);
    let mut input = InputTranslator::new();
    let renderer = Renderer::new(geometry);

    loop {
        let before = game.mode();
        for command in input.poll(before, renderer.buttons()) {
            game.handle_command(command);
        }
        if input.quit_requested() {
            info!("quit requested");
            break;
        }

        if game.mode() == GameMode::Playing {
            if before != GameMode::Playing {
                game.scheduler_mut().reset();
            }
            let due = game.scheduler_mut().advance(get_frame_time());
            for _ in 0..due {
                game.tick();
            }
        }

        let snapshot = game.snapshot();
        if before == GameMode::Playing && snapshot.mode == GameMode::GameOver {
            match serde_json::to_string(&snapshot) {
                Ok(json) => debug!(%json, "final state"),
                Err(err) => warn!(%err, "could not serialize final state"),
            }
        }
        renderer.draw(&snapshot, input.hovered());

        next_frame().await;
    }
}

fn main() {
    let args = Args::parse();
    logging::init();

    let (config, geometry) = load_config(&args.config);
    info!(
        cols = geometry.board().cols,
        rows = geometry.board().rows,
        "starting snake"
    );
    macroquad::Window::from_config(window_conf(&config), run(geometry));
}
