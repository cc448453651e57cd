use std::fmt;
use rand::Rng;
use crate::config::AnimationConfig;

/// Render identity of a bubble, unique within one mounted field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BubbleId(u64);

impl BubbleId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for BubbleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bubble-{}", self.0)
    }
}

/// One decorative bubble. Its attributes are rolled once and never change.
#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub id: BubbleId,
    /// Diameter in px.
    pub size: f64,
    /// Seconds per upward cycle.
    pub duration: f64,
    /// Left offset in percent of the container width.
    pub x_position: f64,
}

impl Bubble {
    pub fn random<R: Rng>(id: BubbleId, config: &AnimationConfig, rng: &mut R) -> Self {
        Self {
            id,
            size: rng.gen_range(config.size_range.clone()),
            duration: rng.gen_range(config.duration_range.clone()),
            x_position: rng.gen_range(config.x_position_range.clone()),
        }
    }

    /// Cycle length in whole milliseconds, as the timers want it.
    pub fn duration_ms(&self) -> u32 {
        (self.duration * 1000.0).round() as u32
    }

    /// Inline style parking the bubble just below the container.
    pub fn base_style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {x}%; bottom: -{size}px;",
            size = self.size,
            x = self.x_position,
        )
    }
}
