use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::snake::START_LENGTH;
use super::types::GridSize;

/// Vertical gap between the two start rows.
pub const BOT_START_ROW_OFFSET: i32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    pub grid_width: u32,
    pub grid_height: u32,
    pub move_interval_secs: f64,
    pub target_food_count: u32,
    pub bot_enabled: bool,
    #[serde(default)]
    pub max_ticks_per_frame: Option<u32>,
}

impl SimulationSettings {
    pub fn grid_size(&self) -> GridSize {
        GridSize::new(self.grid_width as i32, self.grid_height as i32)
    }

    fn snake_count(&self) -> usize {
        if self.bot_enabled { 2 } else { 1 }
    }
}

impl Validate for SimulationSettings {
    fn validate(&self) -> Result<(), String> {
        let min_height = if self.bot_enabled {
            BOT_START_ROW_OFFSET as u32 + 1
        } else {
            1
        };
        if self.grid_width < START_LENGTH as u32 {
            return Err(format!("grid_width must be at least {}", START_LENGTH));
        }
        if self.grid_height < min_height {
            return Err(format!("grid_height must be at least {}", min_height));
        }
        if self.grid_width > i32::MAX as u32 / 2 || self.grid_height > i32::MAX as u32 / 2 {
            return Err("grid dimensions are too large".to_string());
        }
        let cells = self.grid_width as u64 * self.grid_height as u64;
        if cells <= (START_LENGTH * self.snake_count()) as u64 {
            return Err("grid must have free cells left after placing the snakes".to_string());
        }
        if !self.move_interval_secs.is_finite() || self.move_interval_secs <= 0.0 {
            return Err("move_interval_secs must be a positive number".to_string());
        }
        if self.target_food_count < 1 {
            return Err("target_food_count must be at least 1".to_string());
        }
        if self.max_ticks_per_frame == Some(0) {
            return Err("max_ticks_per_frame must be at least 1 when set".to_string());
        }
        Ok(())
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            grid_width: 100,
            grid_height: 100,
            move_interval_secs: 0.2,
            target_food_count: 3,
            bot_enabled: true,
            max_ticks_per_frame: None,
        }
    }
}
