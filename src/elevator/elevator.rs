/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::task_queue::{QueueError, TaskQueue};
use crate::shared::{ElevatorSnapshot, MotionState, Stop, StopKind};

/**
 * One car of the bank.
 *
 * The car advances one floor per call to `step`, always toward the floor of its most
 * urgent stop. Reaching a floor that has pending stops flushes all of them at once and
 * reports the arrival to the caller, which decides who boards.
 *
 * # Fields
 * - `id`:              Index of the car in the bank.
 * - `current_floor`:   Floor the car is at, in `[1, n_floors]`.
 * - `motion_state`:    Direction chosen after the last step.
 * - `task_queue`:      Pending stops ordered by decaying priority.
 */
#[derive(Debug, Clone)]
pub struct Elevator {
    id: usize,
    current_floor: u8,
    motion_state: MotionState,
    task_queue: TaskQueue,
}

/// Emitted by `step` when the car flushed the stops at its current floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalEvent {
    pub elevator_id: usize,
    pub floor: u8,
    pub served: Vec<Stop>,
}

impl Elevator {
    pub fn new(id: usize) -> Elevator {
        Elevator::with_state(id, 1, MotionState::Idle)
    }

    pub fn with_state(id: usize, current_floor: u8, motion_state: MotionState) -> Elevator {
        Elevator {
            id,
            current_floor,
            motion_state,
            task_queue: TaskQueue::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    pub fn motion_state(&self) -> MotionState {
        self.motion_state
    }

    pub fn task_queue(&self) -> &TaskQueue {
        &self.task_queue
    }

    pub fn queue_len(&self) -> usize {
        self.task_queue.len()
    }

    pub fn next_stop(&self) -> Result<&Stop, QueueError> {
        self.task_queue.peek_min()
    }

    /// Queues a stop. The priority is the distance from where the car is right now,
    /// plus the weight of the stop kind.
    pub fn add_request(&mut self, floor: u8, passenger_id: u32, kind: StopKind) {
        let distance = (self.current_floor as i32 - floor as i32).abs();
        let priority = kind.weight() + distance;
        self.task_queue.insert(priority, floor, passenger_id, kind);
    }

    pub fn step(&mut self) -> Option<ArrivalEvent> {
        if self.task_queue.is_empty() {
            return self.update_motion_state();
        }

        self.task_queue.decay_all(1);

        if let Ok(target) = self.task_queue.peek_min() {
            if self.current_floor < target.floor {
                self.current_floor += 1;
            } else if self.current_floor > target.floor {
                self.current_floor -= 1;
            }
        }

        self.update_motion_state()
    }

    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            id: self.id,
            current_floor: self.current_floor,
            motion_state: self.motion_state,
            queue: self.task_queue.snapshot(),
        }
    }

    fn update_motion_state(&mut self) -> Option<ArrivalEvent> {
        if self.task_queue.is_empty() {
            self.motion_state = MotionState::Idle;
            return None;
        }

        // Flush the floor before looking at the next target
        if self.task_queue.contains_floor(self.current_floor) {
            let served = self.task_queue.take_all_at_floor(self.current_floor);
            self.motion_state = MotionState::Idle;
            return Some(ArrivalEvent {
                elevator_id: self.id,
                floor: self.current_floor,
                served,
            });
        }

        self.motion_state = match self.task_queue.peek_min() {
            Ok(next) if next.floor > self.current_floor => MotionState::Up,
            Ok(next) if next.floor < self.current_floor => MotionState::Down,
            _ => MotionState::Idle,
        };
        None
    }
}
