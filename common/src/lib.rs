pub mod config;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::snake::{
    BotController, Direction, FrameReport, FrameSink, GameLoop, GridSize, InputEvent, Point,
    RenderSnapshot, ResetReason, SimulationSettings, SimulationState, Snake,
};
