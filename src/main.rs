//! Brick Breaker entry point
//!
//! Native headless run: an autopilot plays one session through the frame
//! loop and the final frame is printed as text.
//!
//! Usage: `brick-breaker [config.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use brick_breaker::consts::DEFAULT_SEED;
    use brick_breaker::frame::{Autopilot, FrameLoop};
    use brick_breaker::input::InputAdapter;
    use brick_breaker::render::TextRenderer;
    use brick_breaker::{Engine, GameConfig};
    use clap::Parser;

    /// About half an hour of play at 60 frames per second
    const MAX_FRAMES: u64 = 60 * 60 * 30;

    /// Headless brick breaker session played by the autopilot
    #[derive(Debug, Parser)]
    #[command(name = "brick-breaker")]
    #[command(about = "Play one brick breaker session headless", long_about = None)]
    pub struct Args {
        /// JSON config file (camelCase keys, missing keys use defaults)
        pub config: Option<PathBuf>,

        /// RNG seed for the session
        #[arg(default_value_t = DEFAULT_SEED)]
        pub seed: u64,
    }

    pub fn run(args: Args) {
        let config = match &args.config {
            Some(path) => GameConfig::load(path).unwrap_or_else(|e| {
                log::warn!("{e}; using default config");
                GameConfig::default()
            }),
            None => GameConfig::default(),
        };

        let mut engine = Engine::new(config, args.seed);
        let field = engine.config();
        let mut renderer = TextRenderer::new(field.field_width, field.field_height, 80, 30);
        let mut input = InputAdapter::new();
        let mut autopilot = Autopilot::new(4.0);
        let mut frame_loop = FrameLoop::new(Some(MAX_FRAMES));
        frame_loop.stop_when_finished = true;

        let frames = frame_loop.run(&mut engine, &mut input, &mut autopilot, &mut renderer);

        let state = engine.state();
        log::info!(
            "Ran {frames} frames: {} with score {} and {} lives, {} bricks left",
            state.phase.as_str(),
            state.score,
            state.lives,
            state.active_bricks()
        );
        println!("{}", renderer.frame());
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brick Breaker (native) starting...");

    native::run(native::Args::parse());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless session on wasm; the host drives `Engine` directly
}
