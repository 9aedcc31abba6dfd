use std::collections::HashSet;

use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use super::bot_controller::BotController;
use super::clock::SimulationClock;
use super::food_spawner::{FoodFill, fill_food};
use super::movement::{advance, settle_tail};
use super::settings::{BOT_START_ROW_OFFSET, SimulationSettings};
use super::snake::Snake;
use super::snapshot::RenderSnapshot;
use super::types::{Direction, GridSize, InputEvent, Point, ResetReason};

pub const PLAYER_START_DIRECTION: Direction = Direction::Right;
pub const BOT_START_DIRECTION: Direction = Direction::Left;

/// Everything one running game owns. Mutated only through `tick`, the input
/// methods and `reset_game`; a tick either completes or is replaced by a reset.
#[derive(Clone, Debug)]
pub struct SimulationState {
    pub player: Snake,
    pub bot: Option<Snake>,
    pub food: HashSet<Point>,
    grid: GridSize,
    target_food_count: usize,
    clock: SimulationClock,
    rng: SessionRng,
    needs_rebuild: bool,
    reset_requested: bool,
    episode: u64,
    episode_ticks: u64,
    last_reset_reason: ResetReason,
}

impl SimulationState {
    /// Fails on settings the tick loop cannot run with.
    pub fn new(settings: &SimulationSettings, rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;

        let grid = settings.grid_size();
        let player = Self::player_start(grid);
        let bot = settings.bot_enabled.then(|| Self::bot_start(grid));

        let mut state = Self {
            player,
            bot,
            food: HashSet::new(),
            grid,
            target_food_count: settings.target_food_count as usize,
            clock: SimulationClock::new(settings.move_interval_secs, settings.max_ticks_per_frame),
            rng,
            needs_rebuild: true,
            reset_requested: false,
            episode: 0,
            episode_ticks: 0,
            last_reset_reason: ResetReason::Startup,
        };
        log!(
            "Simulation created: {}x{} grid, {}s per tick, {} food, bot {}, seed {}",
            grid.width,
            grid.height,
            settings.move_interval_secs,
            settings.target_food_count,
            if settings.bot_enabled { "on" } else { "off" },
            state.rng.seed()
        );
        state.reset_game(ResetReason::Startup);
        Ok(state)
    }

    fn player_start(grid: GridSize) -> Snake {
        let head = Point::new(grid.width / 2, grid.height / 2);
        Snake::new(head, Direction::Left, PLAYER_START_DIRECTION, grid)
    }

    fn bot_start(grid: GridSize) -> Snake {
        let head = Point::new(grid.width / 2, grid.height / 2 + BOT_START_ROW_OFFSET);
        Snake::new(head, Direction::Right, BOT_START_DIRECTION, grid)
    }

    /// Starts a fresh episode: both snakes back at their start cells, food
    /// respawned, accumulator zeroed.
    pub fn reset_game(&mut self, reason: ResetReason) {
        if reason != ResetReason::Startup {
            log!(
                "Episode {} ended after {} ticks: {:?}",
                self.episode,
                self.episode_ticks,
                reason
            );
        }

        self.player = Self::player_start(self.grid);
        if self.bot.is_some() {
            self.bot = Some(Self::bot_start(self.grid));
        }
        self.food.clear();
        if self.fill_food() == FoodFill::Saturated {
            log!("No free cell for food right after reset");
        }

        self.clock.reset();
        self.needs_rebuild = true;
        self.episode += 1;
        self.episode_ticks = 0;
        self.last_reset_reason = reason;
    }

    fn fill_food(&mut self) -> FoodFill {
        let mut snakes = vec![&self.player];
        snakes.extend(self.bot.as_ref());
        fill_food(
            self.grid,
            &snakes,
            &mut self.food,
            self.target_food_count,
            &mut self.rng,
        )
    }

    /// Tops food up to the target. A board with no free cell left ends the
    /// episode instead.
    pub fn spawn_food(&mut self) -> Option<ResetReason> {
        match self.fill_food() {
            FoodFill::Full => None,
            FoodFill::Spawned(count) => {
                if count > 0 {
                    self.needs_rebuild = true;
                }
                None
            }
            FoodFill::Saturated => {
                log!("Board saturated, no cell left for food");
                self.reset_game(ResetReason::BoardSaturated);
                Some(ResetReason::BoardSaturated)
            }
        }
    }

    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        self.player.queue_direction(direction)
    }

    /// Takes effect at the start of the next `update`.
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::RequestDirection(direction) => {
                self.queue_direction(direction);
            }
            InputEvent::RequestReset => self.request_reset(),
        }
    }

    /// Runs every tick that the elapsed time pays for and returns how many ran.
    /// A reset inside a tick zeroes the accumulator, ending this frame's ticks.
    pub fn update(&mut self, delta_seconds: f64) -> u32 {
        if self.reset_requested {
            self.reset_requested = false;
            self.reset_game(ResetReason::Requested);
        }

        self.clock.begin_frame(delta_seconds);
        let mut ticks = 0;
        while self.clock.try_consume_tick() {
            self.tick();
            ticks += 1;
        }
        ticks
    }

    /// One simulation step: bot decision, bot move, player move, food.
    /// Returns the reason if the step ended the episode.
    pub fn tick(&mut self) -> Option<ResetReason> {
        self.player.commit_queued_direction();

        let bot_collision = match self.bot.as_mut() {
            Some(bot) => {
                let desired = BotController::choose_direction(
                    bot,
                    Some(&self.player),
                    &self.food,
                    bot.direction,
                    self.grid,
                );
                if bot.accepts_turn(desired) {
                    bot.direction = desired;
                }

                let step = advance(bot, bot.direction, Some(&self.player), self.grid);
                if step.collision.is_none() {
                    bot.push_head(step.new_head);
                }
                step.collision
            }
            None => None,
        };
        if let Some(reason) = bot_collision {
            self.reset_game(reason);
            return Some(reason);
        }

        // The bot's new head is in place and its tail not yet dropped.
        let step = advance(&self.player, self.player.direction, self.bot.as_ref(), self.grid);
        if let Some(reason) = step.collision {
            let reason = match &self.bot {
                Some(bot) if bot.head() == step.new_head => ResetReason::HeadToHead,
                _ => reason,
            };
            self.reset_game(reason);
            return Some(reason);
        }
        self.player.push_head(step.new_head);

        let player_ate = settle_tail(&mut self.player, &mut self.food);
        let bot_ate = match self.bot.as_mut() {
            Some(bot) => settle_tail(bot, &mut self.food),
            None => false,
        };

        // Backstop; the player's opponent check above already catches this.
        if self
            .bot
            .as_ref()
            .is_some_and(|bot| bot.head() == self.player.head())
        {
            self.reset_game(ResetReason::HeadToHead);
            return Some(ResetReason::HeadToHead);
        }

        self.needs_rebuild = true;
        self.episode_ticks += 1;

        if player_ate || bot_ate {
            return self.spawn_food();
        }
        None
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let mut food: Vec<Point> = self.food.iter().copied().collect();
        food.sort();
        RenderSnapshot {
            grid: self.grid,
            player: self.player.cells().copied().collect(),
            bot: self.bot.as_ref().map(|bot| bot.cells().copied().collect()),
            food,
            dirty: self.needs_rebuild,
        }
    }

    pub fn needs_rebuild(&self) -> bool {
        self.needs_rebuild
    }

    pub fn mark_rebuilt(&mut self) {
        self.needs_rebuild = false;
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn target_food_count(&self) -> usize {
        self.target_food_count
    }

    pub fn accumulator(&self) -> f64 {
        self.clock.accumulator()
    }

    pub fn episode(&self) -> u64 {
        self.episode
    }

    pub fn episode_ticks(&self) -> u64 {
        self.episode_ticks
    }

    pub fn last_reset_reason(&self) -> ResetReason {
        self.last_reset_reason
    }
}
