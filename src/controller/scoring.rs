/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Elevator;
use crate::shared::{MotionState, Request};

/// Queue length at which a car starts paying twice for its backlog.
const BUSY_QUEUE_LEN: usize = 3;

/**
 * Cost of sending `elevator` to pick up `request`. Lower is better.
 *
 * Sums the distance to the origin, the queue length (doubled once the car has a
 * backlog), a small charge when the car already has a more urgent target elsewhere,
 * and a third of the building when the car would have to turn around.
 */
pub fn score(elevator: &Elevator, request: &Request, n_floors: u8) -> usize {
    let distance = (elevator.current_floor() as i32 - request.origin_floor as i32).unsigned_abs() as usize;
    let queue_len = elevator.queue_len();

    let mut score = distance + queue_len;
    if queue_len >= BUSY_QUEUE_LEN {
        score += queue_len;
    }

    if let Ok(next) = elevator.next_stop() {
        score += if next.floor != request.origin_floor { 2 } else { 1 };
    }

    if directionally_opposed(elevator, request) {
        score += n_floors as usize / 3;
    }

    score
}

/// True when the car is travelling away from the request origin.
pub fn directionally_opposed(elevator: &Elevator, request: &Request) -> bool {
    match elevator.motion_state() {
        MotionState::Up => request.origin_floor < elevator.current_floor(),
        MotionState::Down => request.origin_floor > elevator.current_floor(),
        MotionState::Idle => false,
    }
}

/// Index of the cheapest car. The first car wins ties. `None` for an empty bank.
pub fn select_elevator(elevators: &[Elevator], request: &Request, n_floors: u8) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, elevator) in elevators.iter().enumerate() {
        let candidate = score(elevator, request, n_floors);
        match best {
            Some((_, best_score)) if candidate >= best_score => {}
            _ => best = Some((index, candidate)),
        }
    }
    best.map(|(index, _)| index)
}
