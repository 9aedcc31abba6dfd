mod bot_controller;
mod clock;
mod food_spawner;
mod game_loop;
mod game_state;
mod movement;
mod settings;
mod snake;
mod snapshot;
mod types;

pub mod grid;

pub use bot_controller::BotController;
pub use clock::SimulationClock;
pub use food_spawner::{FoodFill, fill_food};
pub use game_loop::{FrameReport, FrameSink, GameLoop};
pub use game_state::{BOT_START_DIRECTION, PLAYER_START_DIRECTION, SimulationState};
pub use movement::{Advance, advance, settle_tail};
pub use settings::SimulationSettings;
pub use snake::{START_LENGTH, Snake};
pub use snapshot::RenderSnapshot;
pub use types::{Direction, GridSize, InputEvent, Point, ResetReason};
