use crate::keys::{self, Key};
use crate::sequencer;
use crate::util::{mean, spread, std_dev};
use chrono::{DateTime, Local};
use std::time::Instant;

/// A session runs until this many correct presses have been timed.
pub const ATTEMPTS_PER_SESSION: usize = 10;

/// What a call to [`Trial::submit`] did with the key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Submission {
    /// Correct key; reaction recorded, a new target is armed.
    Recorded { elapsed: f64 },
    /// Correct key and it was the final attempt; session is now idle.
    Completed { elapsed: f64 },
    /// Wrong key; nothing recorded, target unchanged.
    Mismatch,
    /// No session running; the key was dropped.
    Ignored,
}

/// One reaction-time session: ten timed key-matching trials at a fixed
/// difficulty level. Owns all mutable session state so that UI callbacks
/// only ever hand in a validated [`Key`].
#[derive(Debug)]
pub struct Trial {
    pub level: u8,
    pub running: bool,
    /// The highlighted key the user must press next. Some iff running.
    pub target: Option<Key>,
    /// Monotonic stamp taken when the current target was armed.
    pub started_at: Option<Instant>,
    /// Reaction seconds, one per correct press, in press order.
    pub times: Vec<f64>,
    pub completed_at: Option<DateTime<Local>>,
}

impl Trial {
    pub fn new(level: u8) -> Self {
        Self {
            level: keys::clamp_level(level),
            running: false,
            target: None,
            started_at: None,
            times: Vec::new(),
            completed_at: None,
        }
    }

    /// Idle -> Running. Clears any previous results and arms the first target.
    pub fn start(&mut self) {
        self.running = true;
        self.times.clear();
        self.completed_at = None;
        self.arm_next_target();
    }

    fn arm_next_target(&mut self) {
        self.target = Some(sequencer::next_key(self.level));
        self.started_at = Some(Instant::now());
    }

    /// Validates one input key against the current target.
    pub fn submit(&mut self, key: Key) -> Submission {
        if !self.running {
            return Submission::Ignored;
        }
        let (target, started_at) = match (self.target, self.started_at) {
            (Some(t), Some(s)) => (t, s),
            _ => return Submission::Ignored,
        };
        if key != target {
            return Submission::Mismatch;
        }

        let elapsed = started_at.elapsed().as_secs_f64();
        self.times.push(elapsed);

        if self.times.len() >= ATTEMPTS_PER_SESSION {
            self.running = false;
            self.target = None;
            self.started_at = None;
            self.completed_at = Some(Local::now());
            Submission::Completed { elapsed }
        } else {
            self.arm_next_target();
            Submission::Recorded { elapsed }
        }
    }

    /// Switches difficulty. Aborts any running session; partial results are
    /// discarded and never persisted.
    pub fn change_level(&mut self, level: u8) {
        self.level = keys::clamp_level(level);
        self.running = false;
        self.target = None;
        self.started_at = None;
    }

    pub fn attempts(&self) -> usize {
        self.times.len()
    }

    pub fn numpad_enabled(&self) -> bool {
        keys::numpad_enabled(self.level)
    }

    pub fn has_finished(&self) -> bool {
        !self.running && self.times.len() == ATTEMPTS_PER_SESSION
    }

    pub fn mean_time(&self) -> f64 {
        mean(&self.times).unwrap_or(0.0)
    }

    pub fn std_dev_time(&self) -> f64 {
        std_dev(&self.times).unwrap_or(0.0)
    }

    /// (best, worst) reaction seconds of the session so far.
    pub fn time_spread(&self) -> Option<(f64, f64)> {
        spread(&self.times)
    }
}
