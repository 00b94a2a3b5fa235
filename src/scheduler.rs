// SPDX-License-Identifier: MPL-2.0
//! Delayed tasks for the single-threaded panel loop.
//!
//! The panel never sleeps: callers schedule a payload for a deadline and
//! later pop whatever is due with [`Scheduler::pop_due`]. Tasks come
//! out in deadline order; tasks sharing a deadline come out in the order they
//! were scheduled. Nothing is ever cancelled, so handlers for drained tasks
//! must tolerate targets that no longer exist.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Entry<T> {
    deadline: Instant,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .cmp(&other.deadline)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Deadline-ordered queue of pending tasks.
#[derive(Debug)]
pub struct Scheduler<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to become due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) {
        let entry = Entry {
            deadline: now + delay,
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(entry));
    }

    /// Removes the earliest task if it is due at `now`, returning it with
    /// its deadline.
    ///
    /// Lets a caller schedule follow-up tasks relative to the deadline between
    /// pops, so that those are honored within the same drain.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        let is_due = self
            .heap
            .peek()
            .is_some_and(|Reverse(entry)| entry.deadline <= now);
        if !is_due {
            return None;
        }
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.deadline, entry.task))
    }
}
