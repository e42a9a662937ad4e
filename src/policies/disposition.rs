//! # Disposition policy: what a captured signal does to the monitor.
//!
//! [`Disposition`] decides the monitoring loop's reaction once a pending
//! signal has been observed and logged:
//!
//! - [`Disposition::Quit`] the signal is terminal: ask the event loop to quit
//!   and exit the monitoring loop.
//! - [`Disposition::Resume`] the signal is informational: clear the cell and
//!   keep polling.
//!
//! ## Default: every captured signal quits
//! [`DispositionPolicy::default`] classifies the entire monitored set
//! (SIGTERM, SIGINT, SIGABRT, SIGQUIT, SIGTSTP, SIGPIPE, SIGHUP) and any
//! unclassifiable raw value as [`Disposition::Quit`]. Signals like SIGPIPE
//! arguably deserve resume-and-continue handling; that path is implemented but
//! opt-in via [`DispositionPolicy::resume_on`], so the default shutdown
//! behavior of a daemon never changes under it silently.
//!
//! ## Example
//! ```rust
//! use sigvisor::{Disposition, DispositionPolicy, SignalKind};
//!
//! let policy = DispositionPolicy::default().resume_on([SignalKind::BrokenPipe]);
//!
//! assert_eq!(policy.classify(Some(SignalKind::BrokenPipe)), Disposition::Resume);
//! assert_eq!(policy.classify(Some(SignalKind::Terminate)), Disposition::Quit);
//! // Raw values outside the monitored set fall through to Quit.
//! assert_eq!(policy.classify(None), Disposition::Quit);
//! ```

use crate::signal::SignalKind;

/// Reaction to an observed signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Terminal: request event-loop quit, then exit the monitoring loop.
    Quit,
    /// Non-terminal: consume the cell and resume polling.
    Resume,
}

/// Maps captured signals to their [`Disposition`].
///
/// The policy is consulted once per observed signal, on the monitoring thread.
/// Signals absent from the resume set, and raw values that do not map back to
/// the monitored set at all, are terminal.
#[derive(Clone, Debug, Default)]
pub struct DispositionPolicy {
    resume: Vec<SignalKind>,
}

impl DispositionPolicy {
    /// Policy with no resume set: every captured signal is terminal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opts the given signals into resume-and-continue handling.
    ///
    /// Later calls extend the set; duplicates are harmless.
    pub fn resume_on(mut self, kinds: impl IntoIterator<Item = SignalKind>) -> Self {
        self.resume.extend(kinds);
        self
    }

    /// Classifies an observed signal.
    ///
    /// `None` stands for a raw cell value outside the monitored vocabulary;
    /// the fallback branch treats it as terminal.
    pub fn classify(&self, kind: Option<SignalKind>) -> Disposition {
        match kind {
            Some(kind) if self.resume.contains(&kind) => Disposition::Resume,
            _ => Disposition::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quits_entire_monitored_set() {
        let policy = DispositionPolicy::default();
        for kind in SignalKind::ALL {
            assert_eq!(policy.classify(Some(kind)), Disposition::Quit);
        }
    }

    #[test]
    fn test_resume_set_is_honored() {
        let policy = DispositionPolicy::new()
            .resume_on([SignalKind::BrokenPipe, SignalKind::Hangup]);

        assert_eq!(policy.classify(Some(SignalKind::BrokenPipe)), Disposition::Resume);
        assert_eq!(policy.classify(Some(SignalKind::Hangup)), Disposition::Resume);
        assert_eq!(policy.classify(Some(SignalKind::Terminate)), Disposition::Quit);
    }

    #[test]
    fn test_unclassifiable_raw_value_is_terminal() {
        let policy = DispositionPolicy::new().resume_on(SignalKind::ALL);
        assert_eq!(policy.classify(None), Disposition::Quit);
    }
}
