mod config;
mod script;
mod sinks;

use std::time::{Duration, Instant};

use clap::Parser;
use snake_duel_common::{
    BotController, FrameSink, GameLoop, InputEvent, SessionRng, SimulationState, log, logger,
};

use config::{default_config_path, get_config_manager};
use script::InputScript;
use sinks::{AsciiSink, SummarySink};

#[derive(Parser)]
#[command(name = "snake_duel_headless", about = "Runs the snake duel simulation without a window")]
struct Args {
    /// YAML settings file; defaults are used when it does not exist.
    #[arg(long)]
    config: Option<String>,

    /// Write the effective settings to the config path and exit.
    #[arg(long)]
    write_default_config: bool,

    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Simulated time between frames.
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f64,

    #[arg(long)]
    seed: Option<u64>,

    /// Sleep between frames and feed measured wall-clock deltas.
    #[arg(long)]
    realtime: bool,

    /// Steer the player with the greedy food-seeking procedure.
    #[arg(long)]
    autopilot: bool,

    /// Scripted turns, e.g. `12:up,40:left`.
    #[arg(long)]
    turns: Option<String>,

    /// Frames before which a reset is requested, e.g. `100,250`.
    #[arg(long)]
    reset_at: Option<String>,

    /// Print the board for every presented frame.
    #[arg(long)]
    ascii: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn autopilot_event(state: &SimulationState) -> InputEvent {
    let direction = BotController::choose_direction(
        &state.player,
        state.bot.as_ref(),
        &state.food,
        state.player.direction,
        state.grid(),
    );
    InputEvent::RequestDirection(direction)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Headless".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if !args.frame_ms.is_finite() || args.frame_ms < 0.0 {
        return Err(format!("--frame-ms must be a non-negative number, got {}", args.frame_ms).into());
    }

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config_manager = get_config_manager(&config_path);
    let settings = config_manager.get_config()?;

    if args.write_default_config {
        config_manager.set_config(&settings)?;
        log!("Settings written to {}", config_path);
        return Ok(());
    }

    let script = InputScript::parse(args.turns.as_deref(), args.reset_at.as_deref())?;
    let rng = args.seed.map_or_else(SessionRng::from_random, SessionRng::new);
    let mut game = GameLoop::new(&settings, rng)?;

    let mut summary_sink = SummarySink::default();
    let mut ascii_sink = AsciiSink::default();
    let sink: &mut dyn FrameSink = if args.ascii {
        &mut ascii_sink
    } else {
        &mut summary_sink
    };

    let frame_duration = Duration::from_secs_f64(args.frame_ms / 1000.0);
    let mut last_frame = Instant::now();
    let mut total_ticks: u64 = 0;

    for frame in 0..args.frames {
        for event in script.events_at(frame) {
            game.handle_input(*event);
        }
        if args.autopilot {
            let event = autopilot_event(game.state());
            game.handle_input(event);
        }

        let delta_seconds = if args.realtime {
            std::thread::sleep(frame_duration);
            let now = Instant::now();
            let delta = now.duration_since(last_frame).as_secs_f64();
            last_frame = now;
            delta
        } else {
            frame_duration.as_secs_f64()
        };

        total_ticks += game.frame(delta_seconds, sink).ticks as u64;
    }

    let state = game.state();
    log!(
        "Ran {} frames, {} ticks, {} episodes; last reset: {:?}; current episode at tick {}",
        args.frames,
        total_ticks,
        state.episode(),
        state.last_reset_reason(),
        state.episode_ticks()
    );
    log!(
        "Presented {} snapshots",
        summary_sink.presented + ascii_sink.presented
    );

    Ok(())
}
