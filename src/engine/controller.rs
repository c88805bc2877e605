//! Animation loop controller
//!
//! [`AnimationLoop`] is a two-state machine (`Paused` / `Running`) wrapped
//! around the [`Scheduler`]. While running it keeps a demonstration going:
//! when a sort completes, a new cycle starts one scheduler interval later on a
//! freshly randomized array, using whatever algorithm and speed are selected at
//! that moment.

use super::scheduler::{Completion, Scheduler, TickOutcome};
use super::session::SessionId;
use super::speed::Speed;
use crate::bars::BarArray;
use crate::render::{Highlight, Surface};
use crate::sorting::Algorithm;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Paused,
    Running,
}

/// What a call to [`AnimationLoop::poll`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopEvent {
    Idle,
    Stepped(Highlight),
    /// A cycle finished; the next one is pending
    CycleCompleted(Completion),
    /// A new cycle started after a completed one
    CycleStarted { session: SessionId, algorithm: Algorithm },
}

#[derive(Debug)]
pub struct AnimationLoop {
    scheduler: Scheduler,
    state: LoopState,
    selected: Algorithm,
    /// Completion time of the last cycle while a restart is pending
    restart_anchor: Option<Duration>,
    cycles_completed: usize,
}

impl AnimationLoop {
    /// A paused loop with `algorithm` selected
    pub fn new(scheduler: Scheduler, algorithm: Algorithm) -> Self {
        AnimationLoop {
            scheduler,
            state: LoopState::Paused,
            selected: algorithm,
            restart_anchor: None,
            cycles_completed: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn selected(&self) -> Algorithm {
        self.selected
    }

    pub fn speed(&self) -> Speed {
        self.scheduler.speed()
    }

    pub fn bars(&self) -> &BarArray {
        self.scheduler.bars()
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn cycles_completed(&self) -> usize {
        self.cycles_completed
    }

    /// Flip between `Paused` and `Running`.
    ///
    /// Entering `Running` resumes a suspended run of the selected algorithm,
    /// or starts a new cycle on the current array. Entering `Paused` disarms
    /// the pending tick and drops any pending restart.
    pub fn toggle(&mut self, now: Duration) -> LoopState {
        match self.state {
            LoopState::Paused => {
                self.state = LoopState::Running;
                let resumable = self.scheduler.is_suspended()
                    && self.scheduler.active_algorithm() == Some(self.selected);
                if !(resumable && self.scheduler.resume(now)) {
                    self.scheduler.start(self.selected, now);
                }
            }
            LoopState::Running => {
                self.state = LoopState::Paused;
                self.scheduler.suspend();
                self.restart_anchor = None;
            }
        }
        info!(state = ?self.state, algorithm = %self.selected, "animation toggled");
        self.state
    }

    /// Choose the algorithm for the next cycle. A run in progress is left alone.
    pub fn select(&mut self, algorithm: Algorithm) {
        self.selected = algorithm;
    }

    pub fn change_speed(&mut self, speed: Speed) {
        self.scheduler.change_speed(speed);
    }

    /// Randomize the bars and immediately start sorting them with `algorithm`
    pub fn apply<S: Surface + ?Sized>(
        &mut self,
        algorithm: Algorithm,
        now: Duration,
        surface: &mut S,
    ) -> SessionId {
        self.selected = algorithm;
        self.restart_anchor = None;
        self.scheduler.randomize(surface);
        self.state = LoopState::Running;
        self.scheduler.start(algorithm, now)
    }

    /// Replace the bars. A running loop starts a new cycle on them right away.
    pub fn randomize<S: Surface + ?Sized>(&mut self, now: Duration, surface: &mut S) {
        self.restart_anchor = None;
        self.scheduler.randomize(surface);
        if self.is_running() {
            self.scheduler.start(self.selected, now);
        }
    }

    /// Cancel any run, set every bar's dimensions and pause the loop
    pub fn resize<S: Surface + ?Sized>(&mut self, width: u32, height: u32, surface: &mut S) {
        self.restart_anchor = None;
        self.scheduler.resize(width, height, surface);
        self.state = LoopState::Paused;
    }

    pub fn redraw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.scheduler.redraw(surface);
    }

    /// Advance the loop to `now`
    pub fn poll<S: Surface + ?Sized>(&mut self, now: Duration, surface: &mut S) -> LoopEvent {
        if !self.is_running() {
            return LoopEvent::Idle;
        }

        if let Some(anchor) = self.restart_anchor {
            if now < anchor + self.scheduler.speed().interval() {
                return LoopEvent::Idle;
            }
            self.restart_anchor = None;
            self.scheduler.randomize(surface);
            let algorithm = self.selected;
            let session = self.scheduler.start(algorithm, now);
            return LoopEvent::CycleStarted { session, algorithm };
        }

        match self.scheduler.poll(now, surface) {
            TickOutcome::Stepped(highlight) => LoopEvent::Stepped(highlight),
            TickOutcome::Completed(completion) => {
                self.cycles_completed += 1;
                self.restart_anchor = Some(now);
                LoopEvent::CycleCompleted(completion)
            }
            TickOutcome::Idle | TickOutcome::Inert => LoopEvent::Idle,
        }
    }
}
