/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Stop, StopKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("task queue is empty")]
    Empty,
}

/**
 * Pending stops of one car, ordered by urgency.
 *
 * Lower priority values are served first. Equal priorities are served in insertion
 * order: every entry carries a sequence number taken when it was inserted.
 *
 * Priorities are decremented in bulk once per tick. A uniform decrement never changes
 * the relative order, so decay rewrites the keys and rebuilds the heap in O(n).
 */
#[derive(Debug, Default, Clone)]
pub struct TaskQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

#[derive(Debug, Clone)]
struct Entry {
    stop: Stop,
    seq: u64,
}

impl Entry {
    fn key(&self) -> (i32, u64) {
        (self.stop.priority, self.seq)
    }
}

// BinaryHeap is a max-heap, so the smallest key must compare greatest
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl TaskQueue {
    pub fn new() -> TaskQueue {
        TaskQueue::default()
    }

    pub fn insert(&mut self, priority: i32, floor: u8, passenger_id: u32, kind: StopKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            stop: Stop {
                priority,
                floor,
                passenger_id,
                kind,
            },
            seq,
        });
    }

    pub fn pop_min(&mut self) -> Result<Stop, QueueError> {
        self.heap
            .pop()
            .map(|entry| entry.stop)
            .ok_or(QueueError::Empty)
    }

    pub fn peek_min(&self) -> Result<&Stop, QueueError> {
        self.heap
            .peek()
            .map(|entry| &entry.stop)
            .ok_or(QueueError::Empty)
    }

    /// Subtracts `amount` from every priority. No clamping: aged stops go negative.
    pub fn decay_all(&mut self, amount: i32) {
        let mut entries = std::mem::take(&mut self.heap).into_vec();
        for entry in entries.iter_mut() {
            entry.stop.priority -= amount;
        }
        self.heap = BinaryHeap::from(entries);
    }

    /// Drops every stop at `floor` and returns them, in no particular order.
    pub fn take_all_at_floor(&mut self, floor: u8) -> Vec<Stop> {
        let (taken, kept): (Vec<Entry>, Vec<Entry>) = std::mem::take(&mut self.heap)
            .into_vec()
            .into_iter()
            .partition(|entry| entry.stop.floor == floor);
        self.heap = BinaryHeap::from(kept);
        taken.into_iter().map(|entry| entry.stop).collect()
    }

    pub fn remove_all_at_floor(&mut self, floor: u8) -> usize {
        let before = self.heap.len();
        self.heap.retain(|entry| entry.stop.floor != floor);
        before - self.heap.len()
    }

    pub fn contains_floor(&self, floor: u8) -> bool {
        self.heap.iter().any(|entry| entry.stop.floor == floor)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Copy of the pending stops in the order they would be served.
    pub fn snapshot(&self) -> Vec<Stop> {
        let mut entries: Vec<&Entry> = self.heap.iter().collect();
        entries.sort_by_key(|entry| entry.key());
        entries.into_iter().map(|entry| entry.stop.clone()).collect()
    }
}
