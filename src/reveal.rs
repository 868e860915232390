//! Cosmetic reveal animation.
//!
//! The animator is started with an item the pick engine has already
//! committed. Frames flash random candidates with a swap probability that
//! ramps up, holds, then decays; at the deadline the committed item is shown.
//! Nothing in here can change which item was picked.

use std::time::Duration;

use crate::pick::Entropy;

/// Length of the accelerating phase.
pub const ACCELERATION: Duration = Duration::from_millis(500);
/// Length of the steady phase.
pub const STEADY: Duration = Duration::from_millis(800);
/// Length of the decelerating phase.
pub const DECELERATION: Duration = Duration::from_millis(1200);
/// Total animation length.
pub const TOTAL: Duration = Duration::from_millis(2500);

const START_PROBABILITY: f64 = 0.50;
const PEAK_PROBABILITY: f64 = 0.80;
const DECAY: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Accelerating,
    Steady,
    Decelerating,
}

impl RevealPhase {
    /// Phase at `elapsed`, or `None` once the animation is over.
    pub fn at(elapsed: Duration) -> Option<Self> {
        if elapsed < ACCELERATION {
            Some(RevealPhase::Accelerating)
        } else if elapsed < ACCELERATION + STEADY {
            Some(RevealPhase::Steady)
        } else if elapsed < TOTAL {
            Some(RevealPhase::Decelerating)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RevealPhase::Accelerating => "accelerating",
            RevealPhase::Steady => "steady",
            RevealPhase::Decelerating => "decelerating",
        }
    }
}

/// Per-frame probability of swapping the displayed item at `elapsed`.
///
/// Returns `0.0` after the animation has ended.
pub fn swap_probability(elapsed: Duration) -> f64 {
    let ms = elapsed.as_secs_f64() * 1000.0;
    match RevealPhase::at(elapsed) {
        Some(RevealPhase::Accelerating) => {
            let progress = ms / ACCELERATION.as_millis() as f64;
            START_PROBABILITY + progress * (PEAK_PROBABILITY - START_PROBABILITY)
        }
        Some(RevealPhase::Steady) => PEAK_PROBABILITY,
        Some(RevealPhase::Decelerating) => {
            let start = (ACCELERATION + STEADY).as_millis() as f64;
            let progress = (ms - start) / DECELERATION.as_millis() as f64;
            PEAK_PROBABILITY * (1.0 - progress * DECAY)
        }
        None => 0.0,
    }
}

/// Outcome of one animation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealFrame {
    /// Still animating; `swapped` is true when the displayed item changed.
    Running { phase: RevealPhase, swapped: bool },
    /// Deadline reached; the committed item is now displayed.
    Finished,
}

/// Decelerating item shuffle ending on a pre-decided item.
#[derive(Debug, Clone)]
pub struct RevealAnimator {
    final_item: String,
    candidates: Vec<String>,
    displayed: Option<String>,
    last_index: Option<usize>,
    finished: bool,
}

impl RevealAnimator {
    /// Start revealing `final_item`, flashing entries of `candidates`.
    ///
    /// `candidates` is the full list at the time of the pick, including
    /// items already picked earlier.
    pub fn new(final_item: String, candidates: Vec<String>) -> Self {
        Self {
            final_item,
            candidates,
            displayed: None,
            last_index: None,
            finished: false,
        }
    }

    /// The item that will be shown when the animation ends.
    pub fn final_item(&self) -> &str {
        &self.final_item
    }

    /// Item currently on screen, if any frame has swapped yet.
    pub fn displayed(&self) -> Option<&str> {
        self.displayed.as_deref()
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance to `elapsed` since the animation started.
    pub fn tick<E: Entropy + ?Sized>(&mut self, elapsed: Duration, rng: &mut E) -> RevealFrame {
        if self.finished {
            return RevealFrame::Finished;
        }

        let Some(phase) = RevealPhase::at(elapsed) else {
            self.displayed = Some(self.final_item.clone());
            self.finished = true;
            return RevealFrame::Finished;
        };

        let swapped = !self.candidates.is_empty() && rng.chance(swap_probability(elapsed));
        if swapped {
            let index = self.next_index(rng);
            self.last_index = Some(index);
            self.displayed = Some(self.candidates[index].clone());
        }

        RevealFrame::Running { phase, swapped }
    }

    /// Random candidate index, distinct from the previous one when possible.
    fn next_index<E: Entropy + ?Sized>(&self, rng: &mut E) -> usize {
        let len = self.candidates.len();
        loop {
            let index = rng.index(len);
            if len <= 1 || Some(index) != self.last_index {
                return index;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pick::Scripted;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(RevealPhase::at(ms(0)), Some(RevealPhase::Accelerating));
        assert_eq!(RevealPhase::at(ms(499)), Some(RevealPhase::Accelerating));
        assert_eq!(RevealPhase::at(ms(500)), Some(RevealPhase::Steady));
        assert_eq!(RevealPhase::at(ms(1299)), Some(RevealPhase::Steady));
        assert_eq!(RevealPhase::at(ms(1300)), Some(RevealPhase::Decelerating));
        assert_eq!(RevealPhase::at(ms(2499)), Some(RevealPhase::Decelerating));
        assert_eq!(RevealPhase::at(ms(2500)), None);
    }

    #[test]
    fn test_swap_probability_curve() {
        assert!(close(swap_probability(ms(0)), 0.50));
        assert!(close(swap_probability(ms(250)), 0.65));
        assert!(close(swap_probability(ms(500)), 0.80));
        assert!(close(swap_probability(ms(1000)), 0.80));
        assert!(close(swap_probability(ms(1300)), 0.80));
        // Halfway through deceleration: 0.8 * (1 - 0.5 * 0.95)
        assert!(close(swap_probability(ms(1900)), 0.42));
        assert!(swap_probability(ms(2499)) > 0.04);
        assert!(close(swap_probability(ms(2500)), 0.0));
    }

    #[test]
    fn test_finishes_on_committed_item() {
        let mut animator = RevealAnimator::new("C".to_string(), list(&["A", "B", "C"]));
        let mut rng = StdRng::seed_from_u64(11);

        let mut t = 0;
        while t < 2500 {
            assert!(matches!(animator.tick(ms(t), &mut rng), RevealFrame::Running { .. }));
            t += 16;
        }

        assert_eq!(animator.tick(ms(2500), &mut rng), RevealFrame::Finished);
        assert!(animator.is_finished());
        assert_eq!(animator.displayed(), Some("C"));
    }

    #[test]
    fn test_outcome_independent_of_frame_timing() {
        let candidates = list(&["red", "green", "blue", "yellow"]);
        for (seed, step) in [(1u64, 1u64), (2, 16), (3, 33), (4, 700), (5, 5000)] {
            let mut animator = RevealAnimator::new("green".to_string(), candidates.clone());
            let mut rng = StdRng::seed_from_u64(seed);
            let mut t = 0;
            loop {
                if animator.tick(ms(t), &mut rng) == RevealFrame::Finished {
                    break;
                }
                t += step;
            }
            assert_eq!(animator.displayed(), Some("green"));
        }
    }

    #[test]
    fn test_swap_uses_bernoulli_draw() {
        let mut animator = RevealAnimator::new("A".to_string(), list(&["A", "B"]));

        // 0.9 >= 0.5 at t=0: no swap, only one draw consumed
        let mut rng = Scripted::new(&[0.9]);
        assert_eq!(
            animator.tick(ms(0), &mut rng),
            RevealFrame::Running { phase: RevealPhase::Accelerating, swapped: false }
        );
        assert_eq!(rng.draws(), 1);
        assert_eq!(animator.displayed(), None);

        // 0.1 < 0.8: swap, then index draw 0.7 -> "B"
        let mut rng = Scripted::new(&[0.1, 0.7]);
        assert_eq!(
            animator.tick(ms(800), &mut rng),
            RevealFrame::Running { phase: RevealPhase::Steady, swapped: true }
        );
        assert_eq!(animator.displayed(), Some("B"));
    }

    #[test]
    fn test_consecutive_swaps_differ() {
        let mut animator = RevealAnimator::new("A".to_string(), list(&["A", "B", "C"]));

        // First swap lands on index 1
        let mut rng = Scripted::new(&[0.0, 0.5]);
        animator.tick(ms(600), &mut rng);
        assert_eq!(animator.displayed(), Some("B"));

        // Next swap draws index 1 again, rejected, then index 2
        let mut rng = Scripted::new(&[0.0, 0.5, 0.9]);
        animator.tick(ms(700), &mut rng);
        assert_eq!(animator.displayed(), Some("C"));
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_single_candidate_may_repeat() {
        let mut animator = RevealAnimator::new("solo".to_string(), list(&["solo"]));
        let mut rng = Scripted::new(&[0.0]);

        animator.tick(ms(100), &mut rng);
        animator.tick(ms(200), &mut rng);
        assert_eq!(animator.displayed(), Some("solo"));
    }

    #[test]
    fn test_flashes_already_picked_items() {
        // Only "B" is still available, but the whole list flashes
        let mut animator = RevealAnimator::new("B".to_string(), list(&["A", "B"]));
        let mut rng = Scripted::new(&[0.0, 0.0]);
        animator.tick(ms(600), &mut rng);
        assert_eq!(animator.displayed(), Some("A"));
    }

    #[test]
    fn test_no_entropy_after_finish() {
        let mut animator = RevealAnimator::new("A".to_string(), list(&["A", "B"]));
        let mut rng = Scripted::new(&[0.0]);

        assert_eq!(animator.tick(ms(3000), &mut rng), RevealFrame::Finished);
        assert_eq!(animator.tick(ms(10), &mut rng), RevealFrame::Finished);
        assert_eq!(rng.draws(), 0);
    }
}
