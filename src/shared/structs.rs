/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Direction of travel of a car. Derived from the task queue after every step.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MotionState {
    Up,
    Down,
    Idle,
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionState::Up => write!(f, "UP"),
            MotionState::Down => write!(f, "DOWN"),
            MotionState::Idle => write!(f, "IDLE"),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StopKind {
    PickUp,
    DropOff,
}

impl StopKind {
    /// Added to the distance when computing the initial priority of a stop.
    /// Pickups win ties against drop-offs at the same distance.
    pub fn weight(&self) -> i32 {
        match self {
            StopKind::PickUp => 0,
            StopKind::DropOff => 1,
        }
    }
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopKind::PickUp => write!(f, "pick-up"),
            StopKind::DropOff => write!(f, "drop-off"),
        }
    }
}

/// A single scheduled event for a car. Only `priority` changes after creation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub priority: i32,
    pub floor: u8,
    #[serde(rename = "passengerId")]
    pub passenger_id: u32,
    pub kind: StopKind,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    #[serde(rename = "originFloor")]
    pub origin_floor: u8,
    #[serde(rename = "destinationFloor")]
    pub destination_floor: u8,
    #[serde(rename = "passengerId")]
    pub passenger_id: u32,
}

impl Request {
    pub fn new(origin_floor: u8, destination_floor: u8, passenger_id: u32) -> Request {
        Request {
            origin_floor,
            destination_floor,
            passenger_id,
        }
    }

    /// True when both floors lie in `[1, n_floors]`.
    pub fn is_within(&self, n_floors: u8) -> bool {
        (1..=n_floors).contains(&self.origin_floor)
            && (1..=n_floors).contains(&self.destination_floor)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "passenger {} ({} -> {})",
            self.passenger_id, self.origin_floor, self.destination_floor
        )
    }
}

/***************************************/
/*        Observation snapshots        */
/***************************************/
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ElevatorSnapshot {
    pub id: usize,
    #[serde(rename = "currentFloor")]
    pub current_floor: u8,
    #[serde(rename = "motionState")]
    pub motion_state: MotionState,
    pub queue: Vec<Stop>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FloorSnapshot {
    pub floor: u8,
    pub waiting: Vec<Request>,
}

/// State of the whole bank between two ticks. Sent by value to observers.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SystemSnapshot {
    pub tick: u64,
    pub elevators: Vec<ElevatorSnapshot>,
    pub floors: Vec<FloorSnapshot>,
}
