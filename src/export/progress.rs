use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::info;

/// Receives progress updates from an export run
///
/// Updates are infallible. `is_cancelled` is polled between rows; returning
/// `true` stops the run before the next row is written.
pub trait ProgressSink {
    /// Switch between an unknown and a known amount of work
    fn set_indeterminate(&mut self, indeterminate: bool);

    /// Announce the number of rows; resets the count to zero
    fn set_total(&mut self, total: usize);

    /// One more row was written
    fn advance(&mut self);

    /// Whether the run should stop
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Discards every update
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn set_indeterminate(&mut self, _indeterminate: bool) {}

    fn set_total(&mut self, _total: usize) {}

    fn advance(&mut self) {}
}

/// Reports progress through `log` every tenth of the run
#[derive(Debug)]
pub struct LogProgress {
    label: String,
    total: usize,
    done: usize,
    next_decile: usize,
}

impl LogProgress {
    /// Create a reporter prefixing messages with `label`
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            total: 0,
            done: 0,
            next_decile: 1,
        }
    }

    /// Rows reported so far
    pub fn done(&self) -> usize {
        self.done
    }
}

impl ProgressSink for LogProgress {
    fn set_indeterminate(&mut self, indeterminate: bool) {
        if indeterminate {
            info!("{}: resolving rows", self.label);
        }
    }

    fn set_total(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.next_decile = 1;
        info!("{}: {} rows to export", self.label, total);
    }

    fn advance(&mut self) {
        self.done += 1;
        if self.total == 0 {
            return;
        }
        while self.next_decile <= 10 && self.done * 10 >= self.total * self.next_decile {
            info!(
                "{}: {}% ({}/{})",
                self.label,
                self.next_decile * 10,
                self.done,
                self.total
            );
            self.next_decile += 1;
        }
    }
}

/// Shared cancellation switch
///
/// Clones share the same flag, so one handle can be given to another thread
/// or a signal handler while the run polls its own.
#[derive(Debug, Default, Clone)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a flag in the running state
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Progress sink that also reports a [`CancelFlag`]
#[derive(Debug)]
pub struct Cancellable<P> {
    inner: P,
    flag: CancelFlag,
}

impl<P: ProgressSink> Cancellable<P> {
    /// Wrap `inner`, stopping when `flag` is raised
    pub fn new(inner: P, flag: CancelFlag) -> Self {
        Self { inner, flag }
    }

    /// The wrapped sink
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: ProgressSink> ProgressSink for Cancellable<P> {
    fn set_indeterminate(&mut self, indeterminate: bool) {
        self.inner.set_indeterminate(indeterminate);
    }

    fn set_total(&mut self, total: usize) {
        self.inner.set_total(total);
    }

    fn advance(&mut self) {
        self.inner.advance();
    }

    fn is_cancelled(&self) -> bool {
        self.flag.is_cancelled() || self.inner.is_cancelled()
    }
}
