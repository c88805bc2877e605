// Session state shared between the scheduler and the algorithms

use super::speed::Speed;
use crate::bars::constants::{BAR_COUNT, MAX_BAR_HEIGHT};
use crate::bars::BarArray;
use crate::sorting::{Algorithm, SortStepper};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::time::Duration;

/// Identifies one animation session. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub(crate) u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything a run needs besides the algorithm cursor: the bars being
/// sorted, the current pacing and the random source for fresh arrays.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub(crate) bars: BarArray,
    pub(crate) speed: Speed,
    rng: StdRng,
}

impl SessionContext {
    pub fn new(bars: BarArray, speed: Speed, rng: StdRng) -> Self {
        SessionContext { bars, speed, rng }
    }

    /// A context holding a freshly randomized array
    pub fn seeded(seed: u64, speed: Speed) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bars = BarArray::randomize(BAR_COUNT, MAX_BAR_HEIGHT, &mut rng);
        SessionContext { bars, speed, rng }
    }

    /// Like [`SessionContext::seeded`] but seeded from OS entropy
    pub fn from_entropy(speed: Speed) -> Self {
        let mut rng = StdRng::from_entropy();
        let bars = BarArray::randomize(BAR_COUNT, MAX_BAR_HEIGHT, &mut rng);
        SessionContext { bars, speed, rng }
    }

    pub fn bars(&self) -> &BarArray {
        &self.bars
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub(crate) fn reroll(&mut self) {
        let count = if self.bars.is_empty() {
            BAR_COUNT
        } else {
            self.bars.len()
        };
        self.bars = BarArray::randomize(count, MAX_BAR_HEIGHT, &mut self.rng);
    }
}

/// The single timer owned by a session. The interval is fixed when the timer
/// is armed, so a speed change never moves a wait that is already running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Timer {
    /// When the session started, resumed or last ticked
    pub(crate) anchor: Duration,
    pub(crate) interval: Duration,
}

impl Timer {
    pub(crate) fn arm(now: Duration, speed: Speed) -> Self {
        Timer {
            anchor: now,
            interval: speed.interval(),
        }
    }

    pub(crate) fn due(&self) -> Duration {
        self.anchor + self.interval
    }
}

/// One in-progress run of an algorithm
pub(crate) struct Session {
    pub(crate) id: SessionId,
    pub(crate) algorithm: Algorithm,
    pub(crate) stepper: Box<dyn SortStepper>,
    /// `None` while suspended
    pub(crate) timer: Option<Timer>,
    pub(crate) steps: usize,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("algorithm", &self.algorithm)
            .field("timer", &self.timer)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}
