use std::fmt::Debug;

use log::Level;
use numeth_core::Observer;

use crate::traits::HasIter;

/// Logs solver events through the [`log`] facade.
///
/// Every `every`-th event (and always the first) is logged at the configured
/// level, prefixed with a label so interleaved solves can be told apart.
/// `LogProgress` never returns an action.
///
/// No logger is installed here; pick one in the application.
#[derive(Debug, Clone)]
pub struct LogProgress {
    label: String,
    level: Level,
    every: usize,
}

impl LogProgress {
    /// Creates an observer that logs every event at [`Level::Debug`].
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            level: Level::Debug,
            every: 1,
        }
    }

    /// Sets the log level.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Logs only every `n`-th iteration. Zero is treated as one.
    #[must_use]
    pub fn every(mut self, n: usize) -> Self {
        self.every = n.max(1);
        self
    }

    /// Returns whether an event from iteration `iter` would be logged.
    #[must_use]
    pub fn logs_iter(&self, iter: usize) -> bool {
        iter % self.every == 0
    }
}

impl<E, A> Observer<E, A> for LogProgress
where
    E: HasIter + Debug,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.logs_iter(event.iter()) {
            log::log!(self.level, "{}: {event:?}", self.label);
        }
        None
    }
}
