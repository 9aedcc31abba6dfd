use crate::log;

/// Fixed-timestep accumulator. Wall-clock time goes in, whole ticks come out,
/// so simulation speed does not depend on the frame rate.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    move_interval: f64,
    accumulator: f64,
    max_ticks_per_frame: Option<u32>,
    ticks_this_frame: u32,
}

impl SimulationClock {
    pub fn new(move_interval: f64, max_ticks_per_frame: Option<u32>) -> Self {
        Self {
            move_interval,
            accumulator: 0.0,
            max_ticks_per_frame,
            ticks_this_frame: 0,
        }
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Adds one frame's elapsed time. Negative or non-finite deltas count as zero.
    pub fn begin_frame(&mut self, delta_seconds: f64) {
        self.ticks_this_frame = 0;
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.accumulator += delta_seconds;
        }
    }

    /// Drains one interval if a whole tick is due. Once the per-frame cap is
    /// hit the remaining backlog is discarded, keeping only the sub-tick phase.
    pub fn try_consume_tick(&mut self) -> bool {
        if self.accumulator < self.move_interval {
            return false;
        }

        if let Some(cap) = self.max_ticks_per_frame
            && self.ticks_this_frame >= cap
        {
            let dropped = (self.accumulator / self.move_interval).floor();
            self.accumulator -= dropped * self.move_interval;
            log!("Tick cap {} reached, dropped {} overdue ticks", cap, dropped);
            return false;
        }

        self.accumulator -= self.move_interval;
        self.ticks_this_frame += 1;
        true
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(clock: &mut SimulationClock) -> u32 {
        let mut ticks = 0;
        while clock.try_consume_tick() {
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_short_frames_accumulate_into_one_tick() {
        let mut clock = SimulationClock::new(0.25, None);
        clock.begin_frame(0.125);
        assert_eq!(drain(&mut clock), 0);
        clock.begin_frame(0.125);
        assert_eq!(drain(&mut clock), 1);
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn test_stall_catches_up_all_ticks() {
        let mut clock = SimulationClock::new(0.25, None);
        clock.begin_frame(2.625);
        assert_eq!(drain(&mut clock), 10);
        assert_eq!(clock.accumulator(), 0.125);
    }

    #[test]
    fn test_cap_drops_backlog_but_keeps_phase() {
        let mut clock = SimulationClock::new(0.25, Some(3));
        clock.begin_frame(2.625);
        assert_eq!(drain(&mut clock), 3);
        assert_eq!(clock.accumulator(), 0.125);
        clock.begin_frame(0.125);
        assert_eq!(drain(&mut clock), 1);
    }

    #[test]
    fn test_negative_and_nan_deltas_are_ignored() {
        let mut clock = SimulationClock::new(0.25, None);
        clock.begin_frame(-1.0);
        clock.begin_frame(f64::NAN);
        assert_eq!(clock.accumulator(), 0.0);
        assert_eq!(drain(&mut clock), 0);
    }

    #[test]
    fn test_reset_stops_draining() {
        let mut clock = SimulationClock::new(0.25, None);
        clock.begin_frame(1.0);
        assert!(clock.try_consume_tick());
        clock.reset();
        assert!(!clock.try_consume_tick());
    }
}
