//! Player-facing message log.
//!
//! The log keeps the most recent entries up to a fixed capacity. It is
//! backed by `im::Vector` so snapshots clone in O(1) with structural
//! sharing.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Resources;

/// Category of a log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogKind {
    Movement,
    Draft,
    Placement,
    Action,
    Passive,
    Quest,
    /// Explains why a command did nothing.
    Feedback,
    GameOver,
}

/// One log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Monotonic across the session, survives trimming.
    pub id: u64,
    pub kind: LogKind,
    pub message: String,
    /// Net resource change, when the entry reports one.
    pub delta: Option<Resources>,
    /// VP granted, when non-zero.
    pub vp: Option<i64>,
}

/// Capped, ordered message log.
///
/// ```
/// use tile_explorer::session::{LogKind, MessageLog};
///
/// let mut log = MessageLog::new(2);
/// log.push(LogKind::Movement, "one");
/// log.push(LogKind::Movement, "two");
/// log.push(LogKind::Movement, "three");
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.latest().unwrap().message, "three");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog {
    entries: Vector<LogEntry>,
    capacity: usize,
    next_id: u64,
}

impl MessageLog {
    /// Create an empty log keeping at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vector::new(),
            capacity,
            next_id: 0,
        }
    }

    /// Append a plain message.
    pub fn push(&mut self, kind: LogKind, message: impl Into<String>) -> u64 {
        self.push_entry(kind, message.into(), None, None)
    }

    /// Append a message reporting a resource change and VP.
    pub fn push_with_delta(
        &mut self,
        kind: LogKind,
        message: impl Into<String>,
        delta: Resources,
        vp: i64,
    ) -> u64 {
        let delta = (!delta.is_empty()).then_some(delta);
        let vp = (vp != 0).then_some(vp);
        self.push_entry(kind, message.into(), delta, vp)
    }

    fn push_entry(
        &mut self,
        kind: LogKind,
        message: String,
        delta: Option<Resources>,
        vp: Option<i64>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_back(LogEntry {
            id,
            kind,
            message,
            delta,
            vp,
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        id
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Retained entries of one kind, oldest first.
    pub fn of_kind(&self, kind: LogKind) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    /// Maximum retained entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Resource;

    #[test]
    fn test_ids_are_monotonic() {
        let mut log = MessageLog::new(10);
        let a = log.push(LogKind::Draft, "a");
        let b = log.push(LogKind::Draft, "b");
        assert!(b > a);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = MessageLog::new(3);
        for i in 0..5 {
            log.push(LogKind::Movement, format!("m{i}"));
        }

        let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["m2", "m3", "m4"]);
        assert_eq!(log.iter().next().unwrap().id, 2);
    }

    #[test]
    fn test_delta_entries() {
        let mut log = MessageLog::new(10);
        let delta = Resources::default().with(Resource::Money, -5);
        log.push_with_delta(LogKind::Action, "You used Invest", delta, 2);
        log.push_with_delta(LogKind::Action, "You used Nothing", Resources::default(), 0);

        let entries: Vec<_> = log.of_kind(LogKind::Action).collect();
        assert_eq!(entries[0].delta, Some(delta));
        assert_eq!(entries[0].vp, Some(2));
        assert_eq!(entries[1].delta, None);
        assert_eq!(entries[1].vp, None);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut log = MessageLog::new(10);
        log.push(LogKind::Movement, "first");
        let snapshot = log.clone();
        log.push(LogKind::Movement, "second");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }
}
