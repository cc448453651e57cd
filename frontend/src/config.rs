use std::ops::Range;
use log::Level;

/// Scroll distance in px after which the header switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tunables for the hero bubble animation.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    /// Bubbles created synchronously on mount.
    pub initial_bubbles: usize,
    /// Milliseconds between two spawned bubbles.
    pub spawn_interval_ms: u32,
    /// Diameter in px.
    pub size_range: Range<f64>,
    /// Seconds per upward cycle.
    pub duration_range: Range<f64>,
    /// Percent of the container width.
    pub x_position_range: Range<f64>,
    /// Share of a cycle spent fading in and out, split evenly.
    pub fade_fraction: f64,
    /// Used when the browser can't tell us how tall the viewport is.
    pub fallback_viewport_height: f64,
    /// Oldest bubbles get evicted past this many. `None` keeps every bubble
    /// until the page unmounts.
    pub max_bubbles: Option<usize>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            initial_bubbles: 10,
            spawn_interval_ms: 2_000,
            size_range: 20.0..60.0,
            duration_range: 10.0..25.0,
            x_position_range: 0.0..100.0,
            fade_fraction: 0.2,
            fallback_viewport_height: 800.0,
            max_bubbles: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_hero_animation() {
        let config = AnimationConfig::default();
        assert_eq!(config.initial_bubbles, 10);
        assert_eq!(config.spawn_interval_ms, 2_000);
        assert_eq!(config.size_range, 20.0..60.0);
        assert_eq!(config.duration_range, 10.0..25.0);
        assert_eq!(config.x_position_range, 0.0..100.0);
        assert_eq!(config.max_bubbles, None);
    }
}
