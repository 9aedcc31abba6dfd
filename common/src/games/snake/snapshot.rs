use super::types::{GridSize, Point};

/// What the renderer gets once per frame, after all ticks of that frame ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub grid: GridSize,
    /// Head first.
    pub player: Vec<Point>,
    /// Head first; `None` in single-snake mode.
    pub bot: Option<Vec<Point>>,
    /// Sorted, so equal states give equal snapshots.
    pub food: Vec<Point>,
    pub dirty: bool,
}
