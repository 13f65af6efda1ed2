//! Human-readable game reporting.
//!
//! The engine describes what happens (setup, each turn, game over) through a
//! `Reporter`. Reporters only observe; nothing they do feeds back into play.
//!
//! - `NullReporter`: drops everything (the engine default)
//! - `ConsoleReporter`: prints entries at or below its verbosity to stdout
//! - `MemoryReporter`: captures entries into a shared buffer for inspection

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// How much detail to report. Ordered from quietest to noisiest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Verbosity {
    /// Nothing at all.
    Silent,
    /// Setup, one line per turn, final result.
    #[default]
    Normal,
    /// Also hands, supply status and skipped purchases.
    Verbose,
}

/// A single reported message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    /// Detail level of this entry.
    pub level: Verbosity,
    /// Short tag such as "setup", "turn" or "game_over".
    pub category: &'static str,
    pub message: String,
}

/// Sink for game reports.
pub trait Reporter {
    fn report(&mut self, entry: ReportEntry);

    /// Whether entries at `level` would be kept. Lets callers skip
    /// formatting work nobody will read.
    fn accepts(&self, level: Verbosity) -> bool {
        level != Verbosity::Silent
    }
}

/// Discards every entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _entry: ReportEntry) {}

    fn accepts(&self, _level: Verbosity) -> bool {
        false
    }
}

/// Prints entries to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleReporter {
    verbosity: Verbosity,
}

impl ConsoleReporter {
    #[must_use]
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, entry: ReportEntry) {
        if self.accepts(entry.level) {
            println!("{}", entry.message);
        }
    }

    fn accepts(&self, level: Verbosity) -> bool {
        level != Verbosity::Silent && level <= self.verbosity
    }
}

/// Captures entries in memory.
///
/// Clones share one buffer, so a test can keep a handle while the engine
/// owns another.
///
/// ```
/// use automation_game::report::{MemoryReporter, Reporter, ReportEntry, Verbosity};
///
/// let capture = MemoryReporter::new(Verbosity::Normal);
/// let mut sink = capture.clone();
/// sink.report(ReportEntry { level: Verbosity::Normal, category: "turn", message: "hi".into() });
/// sink.report(ReportEntry { level: Verbosity::Verbose, category: "turn", message: "noise".into() });
///
/// assert_eq!(capture.len(), 1);
/// assert_eq!(capture.entries()[0].message, "hi");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryReporter {
    verbosity: Verbosity,
    buffer: Rc<RefCell<Vec<ReportEntry>>>,
}

impl MemoryReporter {
    #[must_use]
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            buffer: Rc::default(),
        }
    }

    /// Read-only view of captured entries.
    #[must_use]
    pub fn entries(&self) -> Ref<'_, Vec<ReportEntry>> {
        self.buffer.borrow()
    }

    /// Messages in a category, in report order.
    #[must_use]
    pub fn messages(&self, category: &str) -> Vec<String> {
        self.buffer
            .borrow()
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.message.clone())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }
}

impl Reporter for MemoryReporter {
    fn report(&mut self, entry: ReportEntry) {
        if self.accepts(entry.level) {
            self.buffer.borrow_mut().push(entry);
        }
    }

    fn accepts(&self, level: Verbosity) -> bool {
        level != Verbosity::Silent && level <= self.verbosity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: Verbosity, category: &'static str, message: &str) -> ReportEntry {
        ReportEntry {
            level,
            category,
            message: message.to_owned(),
        }
    }

    #[test]
    fn test_verbosity_order() {
        assert!(Verbosity::Silent < Verbosity::Normal);
        assert!(Verbosity::Normal < Verbosity::Verbose);
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_memory_filters_by_verbosity() {
        let mut capture = MemoryReporter::new(Verbosity::Normal);
        capture.report(entry(Verbosity::Normal, "turn", "kept"));
        capture.report(entry(Verbosity::Verbose, "turn", "dropped"));

        assert_eq!(capture.len(), 1);
        assert_eq!(capture.messages("turn"), vec!["kept".to_owned()]);
    }

    #[test]
    fn test_memory_clones_share_buffer() {
        let capture = MemoryReporter::new(Verbosity::Verbose);
        let mut handle = capture.clone();
        handle.report(entry(Verbosity::Verbose, "setup", "a"));
        handle.report(entry(Verbosity::Normal, "game_over", "b"));

        assert_eq!(capture.len(), 2);
        assert_eq!(capture.messages("game_over"), vec!["b".to_owned()]);

        capture.clear();
        assert!(handle.is_empty());
    }

    #[test]
    fn test_silent_memory_keeps_nothing() {
        let mut capture = MemoryReporter::new(Verbosity::Silent);
        capture.report(entry(Verbosity::Normal, "turn", "x"));
        assert!(capture.is_empty());
    }

    #[test]
    fn test_null_and_console_accepts() {
        assert!(!NullReporter.accepts(Verbosity::Normal));

        let console = ConsoleReporter::new(Verbosity::Normal);
        assert!(console.accepts(Verbosity::Normal));
        assert!(!console.accepts(Verbosity::Verbose));
        assert!(!console.accepts(Verbosity::Silent));
    }
}
