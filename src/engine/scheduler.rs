//! Step scheduler
//!
//! The [`Scheduler`] owns the [`SessionContext`] and at most one [`Session`].
//! It is driven from outside: the UI loop calls [`Scheduler::poll`] with the
//! time elapsed since start-up, and when the active session's timer is due the
//! scheduler runs exactly one step, renders it and re-arms the timer. When
//! the stepper reports no further work, the run completes on that same tick.
//!
//! # Single-session invariant
//!
//! [`Scheduler::start`], [`Scheduler::randomize`] and [`Scheduler::resize`] all
//! cancel the active session before anything else happens. A cancelled
//! session's id never becomes active again, so a late timer callback carrying
//! that id ([`Scheduler::fire`]) is inert.
//!
//! # Timing
//!
//! A tick is due one interval after the session started, resumed or last
//! ticked. The interval is captured when the timer is armed, so
//! [`Scheduler::change_speed`] never re-times a wait already in flight; the
//! new speed applies from the next time the timer is armed.

use super::session::{Session, SessionContext, SessionId, Timer};
use super::speed::Speed;
use crate::bars::BarArray;
use crate::render::{render, Highlight, Surface};
use crate::sorting::{Algorithm, Step};
use std::time::Duration;
use tracing::{debug, info};

/// Reported when a session runs out of work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub session: SessionId,
    pub algorithm: Algorithm,
    /// Steps taken, including the last one
    pub steps: usize,
}

/// What a call to [`Scheduler::poll`] or [`Scheduler::fire`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No session, or its tick is not due yet
    Idle,
    /// The callback belonged to a cancelled or suspended session; nothing ran
    Inert,
    /// One step ran and was rendered
    Stepped(Highlight),
    /// The algorithm finished; the session is gone
    Completed(Completion),
}

/// Drives one algorithm at a time against the shared bar array
#[derive(Debug)]
pub struct Scheduler {
    context: SessionContext,
    session: Option<Session>,
    next_id: u64,
}

impl Scheduler {
    pub fn new(context: SessionContext) -> Self {
        Scheduler {
            context,
            session: None,
            next_id: 1,
        }
    }

    pub fn bars(&self) -> &BarArray {
        self.context.bars()
    }

    pub fn speed(&self) -> Speed {
        self.context.speed()
    }

    /// Takes effect the next time the timer is armed
    pub fn change_speed(&mut self, speed: Speed) {
        if speed != self.context.speed {
            info!(from = %self.context.speed, to = %speed, "speed changed");
            self.context.speed = speed;
        }
    }

    /// Begin driving `algorithm`; the first step is due one interval after `now`
    pub fn start(&mut self, algorithm: Algorithm, now: Duration) -> SessionId {
        self.cancel();

        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.session = Some(Session {
            id,
            algorithm,
            stepper: algorithm.stepper(),
            timer: Some(Timer::arm(now, self.context.speed)),
            steps: 0,
        });
        info!(session = %id, %algorithm, speed = %self.context.speed, "session started");
        id
    }

    /// Stop the timer and discard the session
    pub fn cancel(&mut self) -> Option<SessionId> {
        let session = self.session.take()?;
        info!(session = %session.id, steps = session.steps, "session cancelled");
        Some(session.id)
    }

    /// Disarm the timer but keep the cursor so the run can be resumed
    pub fn suspend(&mut self) -> bool {
        match self.session.as_mut() {
            Some(session) if session.timer.is_some() => {
                session.timer = None;
                debug!(session = %session.id, "session suspended");
                true
            }
            _ => false,
        }
    }

    /// Re-arm a suspended session; its next step is due one interval after `now`
    pub fn resume(&mut self, now: Duration) -> bool {
        match self.session.as_mut() {
            Some(session) if session.timer.is_none() => {
                session.timer = Some(Timer::arm(now, self.context.speed));
                debug!(session = %session.id, "session resumed");
                true
            }
            _ => false,
        }
    }

    pub fn active_session(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    pub fn active_algorithm(&self) -> Option<Algorithm> {
        self.session.as_ref().map(|s| s.algorithm)
    }

    /// True when a session exists but its timer is disarmed
    pub fn is_suspended(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.timer.is_none())
    }

    /// Steps taken by the active session
    pub fn steps_taken(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.steps)
    }

    /// When the pending tick will fire, if one is armed
    pub fn next_due(&self) -> Option<Duration> {
        let timer = self.session.as_ref()?.timer?;
        Some(timer.due())
    }

    /// Run the active session's tick if it is due at `now`
    pub fn poll<S: Surface + ?Sized>(&mut self, now: Duration, surface: &mut S) -> TickOutcome {
        match (self.active_session(), self.next_due()) {
            (Some(id), Some(due)) if now >= due => self.fire(id, now, surface),
            _ => TickOutcome::Idle,
        }
    }

    /// Timer callback for session `id`. Inert unless `id` is the active,
    /// armed session.
    pub fn fire<S: Surface + ?Sized>(
        &mut self,
        id: SessionId,
        now: Duration,
        surface: &mut S,
    ) -> TickOutcome {
        let session = match self.session.as_mut() {
            Some(session) if session.id == id && session.timer.is_some() => session,
            _ => {
                debug!(session = %id, "inert timer callback");
                return TickOutcome::Inert;
            }
        };

        if let Step::Advanced(highlight) = session.stepper.step(self.context.bars.as_mut_slice()) {
            session.steps += 1;
            if session.stepper.has_more(self.context.bars.as_slice()) {
                session.timer = Some(Timer::arm(now, self.context.speed));
                surface.present(render(self.context.bars.as_slice(), &highlight));
                return TickOutcome::Stepped(highlight);
            }
        }

        let completion = Completion {
            session: session.id,
            algorithm: session.algorithm,
            steps: session.steps,
        };
        self.session = None;
        surface.present(render(self.context.bars.as_slice(), &Highlight::none()));
        info!(
            session = %completion.session,
            algorithm = %completion.algorithm,
            steps = completion.steps,
            "session completed"
        );
        TickOutcome::Completed(completion)
    }

    /// Cancel any session, then replace the array with fresh random bars
    pub fn randomize<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.cancel();
        self.context.reroll();
        debug!(bars = self.context.bars.len(), "bars randomized");
        self.redraw(surface);
    }

    /// Cancel any session, then set every bar's dimensions
    pub fn resize<S: Surface + ?Sized>(&mut self, width: u32, height: u32, surface: &mut S) {
        self.cancel();
        self.context.bars.resize(width, height);
        info!(width, height, "bars resized");
        self.redraw(surface);
    }

    /// Render the current array without highlights
    pub fn redraw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.present(render(self.context.bars.as_slice(), &Highlight::none()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn scheduler(heights: &[u32], speed: Speed) -> Scheduler {
        Scheduler::new(SessionContext::new(
            BarArray::from_heights(heights),
            speed,
            StdRng::seed_from_u64(0),
        ))
    }

    #[test]
    fn test_nothing_due_before_interval() {
        let mut scheduler = scheduler(&[3, 2, 1], Speed::Medium);
        let mut frames: Vec<DrawList> = Vec::new();
        scheduler.start(Algorithm::Bubble, ms(0));

        assert_eq!(scheduler.poll(ms(499), &mut frames), TickOutcome::Idle);
        assert!(frames.is_empty());
        assert_eq!(
            scheduler.poll(ms(500), &mut frames),
            TickOutcome::Stepped(Highlight::pair(0, 1))
        );
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_last_step_completes_the_session() {
        let mut scheduler = scheduler(&[2, 1], Speed::Fast);
        let mut frames: Vec<DrawList> = Vec::new();
        let id = scheduler.start(Algorithm::Selection, ms(0));

        assert_eq!(
            scheduler.poll(ms(250), &mut frames),
            TickOutcome::Completed(Completion {
                session: id,
                algorithm: Algorithm::Selection,
                steps: 1,
            })
        );
        assert_eq!(scheduler.bars().heights(), vec![1, 2]);
        assert_eq!(scheduler.active_session(), None);
        assert_eq!(scheduler.next_due(), None);
        // one frame for the single step, drawn without highlights
        assert_eq!(frames.len(), 1);
        assert!(frames[0].highlighted_rects().is_empty());
    }

    #[test]
    fn test_already_sorted_single_bar_completes_without_steps() {
        let mut scheduler = scheduler(&[7], Speed::Fast);
        let mut frames: Vec<DrawList> = Vec::new();
        scheduler.start(Algorithm::Quick, ms(0));

        match scheduler.poll(ms(250), &mut frames) {
            TickOutcome::Completed(completion) => assert_eq!(completion.steps, 0),
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_speed_change_keeps_pending_wait() {
        let mut scheduler = scheduler(&[4, 3, 2, 1], Speed::Slow);
        let mut frames: Vec<DrawList> = Vec::new();
        scheduler.start(Algorithm::Bubble, ms(0));

        scheduler.change_speed(Speed::Fast);
        assert_eq!(scheduler.next_due(), Some(ms(1000)));
        assert_eq!(scheduler.poll(ms(600), &mut frames), TickOutcome::Idle);
        assert!(matches!(
            scheduler.poll(ms(1000), &mut frames),
            TickOutcome::Stepped(_)
        ));
        assert_eq!(scheduler.next_due(), Some(ms(1250)));
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut scheduler = scheduler(&[3, 2, 1], Speed::Fast);
        let mut frames: Vec<DrawList> = Vec::new();
        let id = scheduler.start(Algorithm::Insertion, ms(0));

        assert!(scheduler.suspend());
        assert!(!scheduler.suspend());
        assert_eq!(scheduler.poll(ms(10_000), &mut frames), TickOutcome::Idle);
        assert_eq!(scheduler.fire(id, ms(10_000), &mut frames), TickOutcome::Inert);

        assert!(scheduler.resume(ms(10_000)));
        assert_eq!(scheduler.next_due(), Some(ms(10_250)));
        assert!(matches!(
            scheduler.poll(ms(10_250), &mut frames),
            TickOutcome::Stepped(_)
        ));
    }

    #[test]
    fn test_resize_cancels_session() {
        let mut scheduler = scheduler(&[3, 2, 1], Speed::Fast);
        let mut latest: Option<DrawList> = None;
        scheduler.start(Algorithm::Bubble, ms(0));
        scheduler.resize(10, 30, &mut latest);

        assert_eq!(scheduler.active_session(), None);
        assert_eq!(scheduler.bars().heights(), vec![30, 30, 30]);
        assert!(latest.is_some());
    }
}
