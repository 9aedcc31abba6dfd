use crate::games::SessionRng;
use super::game_state::SimulationState;
use super::settings::SimulationSettings;
use super::snapshot::RenderSnapshot;
use super::types::InputEvent;

/// The renderer side of a frame. Returns whether the snapshot was rebuilt;
/// `false` keeps the dirty flag so the next frame offers it again.
pub trait FrameSink {
    fn present(&mut self, snapshot: &RenderSnapshot) -> bool;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub ticks: u32,
    pub presented: bool,
}

/// Drives one simulation from a render loop: input goes in between frames,
/// each frame runs the due ticks and then hands over a snapshot if it changed.
pub struct GameLoop {
    state: SimulationState,
}

impl GameLoop {
    pub fn new(settings: &SimulationSettings, rng: SessionRng) -> Result<Self, String> {
        Ok(Self {
            state: SimulationState::new(settings, rng)?,
        })
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        self.state.handle_input(event);
    }

    pub fn frame(&mut self, delta_seconds: f64, sink: &mut dyn FrameSink) -> FrameReport {
        let ticks = self.state.update(delta_seconds);

        let mut presented = false;
        if self.state.needs_rebuild() && sink.present(&self.state.snapshot()) {
            self.state.mark_rebuilt();
            presented = true;
        }

        FrameReport { ticks, presented }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }
}
