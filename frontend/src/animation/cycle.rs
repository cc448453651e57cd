use std::fmt::Write;
use super::bubble::Bubble;

/// One upward pass of a bubble. The travel distance is frozen when the plan
/// is made, so a resize mid-flight only affects the next cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct CyclePlan {
    duration: f64,
    size: f64,
    viewport_height: f64,
    fade_edge: f64,
}

impl CyclePlan {
    pub fn new(bubble: &Bubble, viewport_height: f64, fade_fraction: f64) -> Self {
        Self {
            duration: bubble.duration,
            size: bubble.size,
            viewport_height,
            fade_edge: (fade_fraction / 2.0).clamp(0.0, 0.5),
        }
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Final vertical offset in px. Negative is up.
    pub fn travel(&self) -> f64 {
        -(self.viewport_height + self.size)
    }

    fn progress(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Opacity `elapsed` seconds into the cycle: 0 -> 1 -> 1 -> 0 with the
    /// ramps taking `fade_edge` of the cycle each.
    pub fn opacity_at(&self, elapsed: f64) -> f64 {
        self.opacity_at_progress(self.progress(elapsed))
    }

    /// Vertical offset in px `elapsed` seconds into the cycle.
    pub fn offset_at(&self, elapsed: f64) -> f64 {
        let t = self.progress(elapsed);
        if t == 0.0 {
            return 0.0;  // not -0.0, which would leak into the CSS
        }
        self.travel() * t
    }

    fn opacity_at_progress(&self, t: f64) -> f64 {
        let edge = self.fade_edge;
        if edge <= 0.0 {
            return 1.0;
        }
        if t < edge {
            t / edge
        } else if t <= 1.0 - edge {
            1.0
        } else {
            ((1.0 - t) / edge).max(0.0)
        }
    }

    /// Stops of the opacity envelope as fractions of the cycle.
    pub fn stops(&self) -> [f64; 4] {
        [0.0, self.fade_edge, 1.0 - self.fade_edge, 1.0]
    }

    /// The whole cycle as a CSS `@keyframes` rule. Offsets are linear in
    /// time, so sampling them at the envelope stops and letting the browser
    /// interpolate linearly reproduces both curves exactly.
    pub fn keyframes_css(&self, name: &str) -> String {
        let mut css = format!("@keyframes {} {{", name);
        for stop in self.stops() {
            let elapsed = stop * self.duration;
            let _ = write!(
                css,
                " {:.3}% {{ transform: translateY({:.2}px); opacity: {:.3}; }}",
                stop * 100.0,
                self.offset_at(elapsed),
                self.opacity_at(elapsed),
            );
        }
        css.push_str(" }");
        css
    }

    /// Inline `animation` declaration that plays `name` once over the cycle.
    pub fn animation_style(&self, name: &str) -> String {
        format!("animation: {} {:.3}s linear forwards;", name, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::bubble::BubbleId;

    fn bubble(size: f64, duration: f64) -> Bubble {
        Bubble { id: BubbleId::new(1), size, duration, x_position: 50.0 }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn opacity_hits_every_keyframe() {
        let d = 20.0;
        let plan = CyclePlan::new(&bubble(30.0, d), 900.0, 0.2);
        assert!(close(plan.opacity_at(0.0), 0.0));
        assert!(close(plan.opacity_at(0.1 * d), 1.0));
        assert!(close(plan.opacity_at(0.5 * d), 1.0));
        assert!(close(plan.opacity_at(0.9 * d), 1.0));
        assert!(close(plan.opacity_at(d), 0.0));
    }

    #[test]
    fn opacity_is_linear_between_keyframes() {
        let d = 10.0;
        let plan = CyclePlan::new(&bubble(30.0, d), 900.0, 0.2);
        assert!(close(plan.opacity_at(0.05 * d), 0.5));
        assert!(close(plan.opacity_at(0.025 * d), 0.25));
        assert!(close(plan.opacity_at(0.95 * d), 0.5));
        assert!(close(plan.opacity_at(0.975 * d), 0.25));
    }

    #[test]
    fn offset_travels_past_the_top() {
        let plan = CyclePlan::new(&bubble(40.0, 12.0), 760.0, 0.2);
        assert!(close(plan.travel(), -800.0));
        assert!(close(plan.offset_at(0.0), 0.0));
        assert!(close(plan.offset_at(3.0), -200.0));
        assert!(close(plan.offset_at(6.0), -400.0));
        assert!(close(plan.offset_at(12.0), -800.0));
    }

    #[test]
    fn elapsed_is_clamped_to_the_cycle() {
        let plan = CyclePlan::new(&bubble(40.0, 12.0), 760.0, 0.2);
        assert!(close(plan.offset_at(-5.0), 0.0));
        assert!(close(plan.offset_at(50.0), -800.0));
        assert!(close(plan.opacity_at(50.0), 0.0));
    }

    #[test]
    fn viewport_height_is_frozen_per_plan() {
        let b = bubble(20.0, 15.0);
        let first = CyclePlan::new(&b, 600.0, 0.2);
        let second = CyclePlan::new(&b, 1000.0, 0.2);
        assert!(close(first.travel(), -620.0));
        assert!(close(second.travel(), -1020.0));
        assert_eq!(first.viewport_height(), 600.0);
    }

    #[test]
    fn no_fade_means_fully_visible() {
        let plan = CyclePlan::new(&bubble(20.0, 15.0), 600.0, 0.0);
        assert!(close(plan.opacity_at(0.0), 1.0));
        assert!(close(plan.opacity_at(15.0), 1.0));
    }

    #[test]
    fn oversized_fade_meets_in_the_middle() {
        let plan = CyclePlan::new(&bubble(20.0, 10.0), 600.0, 3.0);
        assert_eq!(plan.stops(), [0.0, 0.5, 0.5, 1.0]);
        assert!(close(plan.opacity_at(5.0), 1.0));
        assert!(close(plan.opacity_at(2.5), 0.5));
    }

    #[test]
    fn keyframes_follow_the_envelope() {
        let plan = CyclePlan::new(&bubble(50.0, 10.0), 950.0, 0.2);
        let css = plan.keyframes_css("rise-7");
        assert!(css.starts_with("@keyframes rise-7 {"));
        assert!(css.contains("0.000% { transform: translateY(0.00px); opacity: 0.000; }"));
        assert!(css.contains("10.000% { transform: translateY(-100.00px); opacity: 1.000; }"));
        assert!(css.contains("90.000% { transform: translateY(-900.00px); opacity: 1.000; }"));
        assert!(css.contains("100.000% { transform: translateY(-1000.00px); opacity: 0.000; }"));
        assert_eq!(plan.animation_style("rise-7"), "animation: rise-7 10.000s linear forwards;");
    }
}
