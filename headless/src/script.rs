use std::collections::HashMap;

use snake_duel_common::{Direction, InputEvent};

/// Input events keyed by the frame they are delivered before.
#[derive(Debug, Default)]
pub struct InputScript {
    events: HashMap<u64, Vec<InputEvent>>,
}

impl InputScript {
    /// `turns` looks like `12:up,30:left`; `resets` like `100,250`.
    pub fn parse(turns: Option<&str>, resets: Option<&str>) -> Result<Self, String> {
        let mut script = Self::default();

        for entry in split_entries(turns) {
            let (frame, direction) = entry
                .split_once(':')
                .ok_or_else(|| format!("Turn entry must be frame:direction, got {}", entry))?;
            let direction: Direction = direction.parse()?;
            script.push(parse_frame(frame)?, InputEvent::RequestDirection(direction));
        }

        for entry in split_entries(resets) {
            script.push(parse_frame(entry)?, InputEvent::RequestReset);
        }

        Ok(script)
    }

    fn push(&mut self, frame: u64, event: InputEvent) {
        self.events.entry(frame).or_default().push(event);
    }

    pub fn events_at(&self, frame: u64) -> &[InputEvent] {
        self.events.get(&frame).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn split_entries(list: Option<&str>) -> impl Iterator<Item = &str> {
    list.unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

fn parse_frame(frame: &str) -> Result<u64, String> {
    frame
        .trim()
        .parse()
        .map_err(|e| format!("Invalid frame number {}: {}", frame, e))
}
