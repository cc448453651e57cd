use std::collections::VecDeque;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use log::{debug, info};
use crate::config::AnimationConfig;
use super::bubble::{Bubble, BubbleId};

/// The live bubbles of one mounted hero, in spawn order.
///
/// `spawn` is what the interval timer calls. `advance` replays elapsed time
/// in one go, so the cadence can be driven without a browser clock.
#[derive(Clone, Debug)]
pub struct BubbleField<R = StdRng> {
    config: AnimationConfig,
    rng: R,
    bubbles: VecDeque<Bubble>,
    next_id: u64,
    pending_ms: u64,
    mounted: bool,
}

impl BubbleField<StdRng> {
    pub fn mount_with_entropy(config: AnimationConfig) -> Self {
        Self::mount(config, StdRng::from_entropy())
    }
}

impl<R: Rng> BubbleField<R> {
    /// Creates the initial batch right away.
    pub fn mount(config: AnimationConfig, rng: R) -> Self {
        let mut field = Self {
            bubbles: VecDeque::with_capacity(config.initial_bubbles),
            config,
            rng,
            next_id: 0,
            pending_ms: 0,
            mounted: true,
        };
        for _ in 0..field.config.initial_bubbles {
            field.push_new();
        }
        info!("Bubble field mounted with {} bubbles", field.bubbles.len());
        field
    }

    fn push_new(&mut self) {
        let id = BubbleId::new(self.next_id);
        self.next_id += 1;
        let bubble = Bubble::random(id, &self.config, &mut self.rng);
        self.bubbles.push_back(bubble);
        if let Some(max) = self.config.max_bubbles {
            while self.bubbles.len() > max {
                if let Some(evicted) = self.bubbles.pop_front() {
                    debug!("Evicting {}", evicted.id);
                }
            }
        }
    }

    /// One interval tick. Does nothing once unmounted.
    pub fn spawn(&mut self) {
        if !self.mounted {
            return;
        }
        self.push_new();
        debug!("Spawned bubble, {} live", self.bubbles.len());
    }

    /// Feeds `elapsed_ms` of wall-clock time and spawns once for every whole
    /// interval crossed since mount.
    pub fn advance(&mut self, elapsed_ms: u64) {
        if !self.mounted {
            return;
        }
        let interval = u64::from(self.config.spawn_interval_ms.max(1));
        self.pending_ms += elapsed_ms;
        while self.pending_ms >= interval {
            self.pending_ms -= interval;
            self.spawn();
        }
    }

    pub fn unmount(&mut self) {
        if self.mounted {
            info!("Bubble field unmounted with {} bubbles", self.bubbles.len());
        }
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn bubbles(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.iter()
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn field() -> BubbleField<StdRng> {
        BubbleField::mount(AnimationConfig::default(), StdRng::seed_from_u64(1))
    }

    #[test]
    fn mount_creates_initial_batch() {
        let field = field();
        assert_eq!(field.len(), 10);
        assert!(field.is_mounted());
    }

    #[test]
    fn grows_by_one_every_interval() {
        let mut field = field();
        field.advance(1_999);
        assert_eq!(field.len(), 10);
        field.advance(1);
        assert_eq!(field.len(), 11);
        for expected in 12..40 {
            field.advance(2_000);
            assert_eq!(field.len(), expected);
        }
    }

    #[test]
    fn six_seconds_after_mount_there_are_thirteen() {
        let mut field = field();
        field.advance(6_000);
        assert_eq!(field.len(), 13);
    }

    #[test]
    fn partial_intervals_accumulate() {
        let mut field = field();
        for _ in 0..6 {
            field.advance(1_000);
        }
        assert_eq!(field.len(), 13);
    }

    #[test]
    fn unmount_stops_growth() {
        let mut field = field();
        field.unmount();
        field.advance(60_000);
        field.spawn();
        assert_eq!(field.len(), 10);
        assert!(!field.is_mounted());
    }

    #[test]
    fn unmount_mid_run_freezes_count() {
        let mut field = field();
        field.advance(4_000);
        field.unmount();
        field.advance(10_000);
        assert_eq!(field.len(), 12);
    }

    #[test]
    fn ids_are_unique_and_in_spawn_order() {
        let mut field = field();
        field.advance(20_000);
        let ids: Vec<BubbleId> = field.bubbles().map(|b| b.id).collect();
        let unique: HashSet<BubbleId> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn spawned_bubbles_stay_in_range() {
        let mut field = field();
        field.advance(200_000);
        for bubble in field.bubbles() {
            assert!((20.0..60.0).contains(&bubble.size));
            assert!((10.0..25.0).contains(&bubble.duration));
            assert!((0.0..100.0).contains(&bubble.x_position));
        }
    }

    #[test]
    fn existing_bubbles_never_change() {
        let mut field = field();
        let before: Vec<Bubble> = field.bubbles().cloned().collect();
        field.advance(10_000);
        let after: Vec<Bubble> = field.bubbles().take(before.len()).cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn cap_evicts_oldest_first() {
        let config = AnimationConfig { max_bubbles: Some(12), ..AnimationConfig::default() };
        let mut field = BubbleField::mount(config, StdRng::seed_from_u64(9));
        field.advance(10_000);
        assert_eq!(field.len(), 12);
        let first = field.bubbles().next().map(|b| b.id);
        assert_eq!(first, Some(BubbleId::new(3)));
    }

    #[test]
    fn cap_below_initial_batch_trims_on_mount() {
        let config = AnimationConfig { max_bubbles: Some(4), ..AnimationConfig::default() };
        let field = BubbleField::mount(config, StdRng::seed_from_u64(9));
        assert_eq!(field.len(), 4);
    }
}
