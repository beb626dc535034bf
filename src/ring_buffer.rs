// src/ring_buffer.rs
//! Ring buffer of recently reported codes.
//!
//! The host keeps the last N reports from the controller so an operator can
//! see what happened before a stop, without the log growing for as long as
//! the machine runs.
//!
//! # Design Principles
//!
//! - **Bounded memory**: fixed number of entries, fixed bytes of detail each
//! - **FIFO eviction**: oldest report dropped first
//! - **RwLock-based**: concurrent readers, exclusive writers
//!
//! # Example
//!
//! ```rust
//! use motion_error_codes::{ring_buffer::RingBufferLogger, Severity};
//!
//! let history = RingBufferLogger::new(100, 256);
//! history.log(800, "");
//! history.log(301, "axis=2");
//!
//! assert_eq!(history.worst(), Some(Severity::Fatal));
//! for entry in history.get_recent(10) {
//!     println!("[{}] {} {}", entry.timestamp, entry.raw, entry.description);
//! }
//! ```

use crate::logging::truncate_to_bytes;
use crate::{describe, severity_of, Report, ReportStyle, Severity};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};

const DETAIL_INDICATOR: &str = "...[TRUNC]";

/// One stored report.
///
/// Detail text is `Arc<str>` so `get_recent` clones are refcount bumps.
#[derive(Clone, Debug)]
pub struct ReportEntry {
    /// Unix timestamp (seconds) when the report was logged.
    pub timestamp: u64,
    /// Number as received.
    pub raw: u16,
    /// Resolved severity (fallback ERROR for unknown numbers).
    pub severity: Severity,
    /// Resolved description (fallback "Unknown Error").
    pub description: &'static str,
    /// Free-form detail, truncated to the logger's per-entry limit.
    pub detail: Arc<str>,
    /// Bytes of detail stored.
    pub size_bytes: usize,
}

/// Fixed-size ring buffer with exact allocation (no growth).
struct RingBuffer {
    entries: Box<[Option<ReportEntry>]>,
    tail: usize,
    head: usize,
    len: usize,
}

impl RingBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            entries: std::iter::repeat_with(|| None)
                .take(capacity)
                .collect::<Box<[Option<ReportEntry>]>>(),
            tail: 0,
            head: 0,
            len: 0,
        }
    }

    fn push(&mut self, entry: ReportEntry) -> Option<ReportEntry> {
        let evicted = self.entries[self.tail].replace(entry);
        self.tail = (self.tail + 1) % self.entries.len();

        if self.len < self.entries.len() {
            self.len += 1;
        } else {
            self.head = (self.head + 1) % self.entries.len();
        }

        evicted
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    /// Oldest first.
    fn iter(&self) -> impl DoubleEndedIterator<Item = &ReportEntry> {
        let head = self.head;
        let cap = self.entries.len();

        (0..self.len).filter_map(move |i| self.entries[(head + i) % cap].as_ref())
    }

    fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = None;
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }
}

/// Report history with bounded memory usage.
///
/// Clones share the same buffer, so one handle can live in the serial
/// reader thread and another in the UI.
pub struct RingBufferLogger {
    buffer: Arc<RwLock<RingBuffer>>,
    max_entries: usize,
    max_entry_bytes: usize,
    eviction_count: Arc<AtomicU64>,
}

impl RingBufferLogger {
    /// Create a new history.
    ///
    /// * `max_entries` - entries kept before FIFO eviction (0 is treated as 1)
    /// * `max_entry_bytes` - maximum bytes of detail per entry
    pub fn new(max_entries: usize, max_entry_bytes: usize) -> Self {
        let bounded_entries = max_entries.max(1);
        Self {
            buffer: Arc::new(RwLock::new(RingBuffer::new(bounded_entries))),
            max_entries: bounded_entries,
            max_entry_bytes,
            eviction_count: Arc::new(AtomicU64::new(0)),
        }
    }

    #[inline]
    fn read_buffer(&self) -> RwLockReadGuard<'_, RingBuffer> {
        match self.buffer.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[inline]
    fn write_buffer(&self) -> RwLockWriteGuard<'_, RingBuffer> {
        match self.buffer.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Log a raw number with free-form detail.
    pub fn log(&self, raw: u16, detail: &str) {
        let entry = self.create_entry(raw, detail);
        self.push(entry);
    }

    /// Log a [`Report`]; its context pairs become the detail text.
    pub fn log_report(&self, report: &Report) {
        let mut detail = String::new();
        for (i, (key, value)) in report.context().iter().enumerate() {
            if i > 0 {
                detail.push(' ');
            }
            detail.push_str(key);
            detail.push('=');
            detail.push_str(value);
        }
        self.log(report.raw(), &detail);
    }

    fn push(&self, entry: ReportEntry) {
        let mut buffer = self.write_buffer();
        if buffer.push(entry).is_some() {
            self.eviction_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn create_entry(&self, raw: u16, detail: &str) -> ReportEntry {
        let detail = truncate_to_bytes(detail, self.max_entry_bytes, DETAIL_INDICATOR);
        ReportEntry {
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| d.as_secs()),
            raw,
            severity: severity_of(raw),
            description: describe(raw),
            size_bytes: detail.len(),
            detail: Arc::from(detail.as_ref()),
        }
    }

    /// The N most recent entries, newest first.
    pub fn get_recent(&self, count: usize) -> Vec<ReportEntry> {
        let buffer = self.read_buffer();
        buffer.iter().rev().take(count).cloned().collect()
    }

    /// All entries, newest first.
    pub fn get_all(&self) -> Vec<ReportEntry> {
        let buffer = self.read_buffer();
        buffer.iter().rev().cloned().collect()
    }

    /// Entries matching a predicate, oldest first.
    ///
    /// ```rust
    /// # use motion_error_codes::{ring_buffer::RingBufferLogger, Severity};
    /// # let history = RingBufferLogger::new(100, 256);
    /// let faults = history.get_filtered(|e| e.severity >= Severity::Error);
    /// ```
    pub fn get_filtered<F>(&self, predicate: F) -> Vec<ReportEntry>
    where
        F: Fn(&ReportEntry) -> bool,
    {
        let buffer = self.read_buffer();
        buffer.iter().filter(|e| predicate(e)).cloned().collect()
    }

    /// Number of held entries at or above `severity`.
    pub fn count_at_least(&self, severity: Severity) -> usize {
        let buffer = self.read_buffer();
        buffer.iter().filter(|e| e.severity >= severity).count()
    }

    /// Highest severity currently held.
    pub fn worst(&self) -> Option<Severity> {
        let buffer = self.read_buffer();
        buffer.iter().map(|e| e.severity).max()
    }

    /// Render held entries as report lines, oldest first.
    pub fn render_lines(&self, style: ReportStyle) -> Vec<String> {
        let buffer = self.read_buffer();
        buffer
            .iter()
            .map(|e| {
                let mut line = String::new();
                // Writing into a String cannot fail.
                let _ = Report::new(e.raw).write_to(&mut line, style);
                if !e.detail.is_empty() {
                    line.push_str(" | ");
                    line.push_str(&e.detail);
                }
                line
            })
            .collect()
    }

    /// Current number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.read_buffer().len()
    }

    /// Whether the history is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total detail bytes held.
    pub fn payload_bytes(&self) -> usize {
        let buffer = self.read_buffer();
        buffer.iter().map(|e| e.size_bytes).sum()
    }

    /// Entries dropped since creation.
    #[inline]
    pub fn eviction_count(&self) -> u64 {
        self.eviction_count.load(Ordering::Relaxed)
    }

    /// Drop all entries. The eviction count is kept.
    pub fn clear(&self) {
        self.write_buffer().clear();
    }

    /// Maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    /// Whether the next `log` will evict.
    pub fn is_full(&self) -> bool {
        self.len() >= self.max_entries
    }
}

impl Clone for RingBufferLogger {
    fn clone(&self) -> Self {
        Self {
            buffer: Arc::clone(&self.buffer),
            max_entries: self.max_entries,
            max_entry_bytes: self.max_entry_bytes,
            eviction_count: Arc::clone(&self.eviction_count),
        }
    }
}
