//! Step-wise animation engine
//!
//! This module turns the step producers in [`crate::sorting`] into a paced
//! animation:
//! - [`speed`]: the closed set of speed tiers
//! - [`session`]: the [`SessionContext`] (bars, speed, rng) and session ids
//! - [`scheduler`]: drives one session at a time, one step per due tick
//! - [`controller`]: the `Paused` / `Running` loop that restarts cycles
//!
//! # Execution Model
//!
//! Single-threaded and cooperative. Nothing here owns a clock or a thread;
//! callers pass the elapsed time (`Duration` since start-up) into `poll`. All
//! control commands issued between two polls take effect at the next tick
//! boundary, and no tick is ever interrupted.

pub mod controller;
pub mod scheduler;
pub mod session;
pub mod speed;

pub use controller::{AnimationLoop, LoopEvent, LoopState};
pub use scheduler::{Completion, Scheduler, TickOutcome};
pub use session::{SessionContext, SessionId};
pub use speed::Speed;
