/*
 * Unit tests for the elevator car
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_elevator_init
 * - test_add_request_priority
 * - test_empty_queue_stays_idle
 * - test_step_moves_toward_next_stop
 * - test_arrival_flushes_floor
 * - test_step_moves_at_most_one_floor
 * - test_aged_stop_overtakes_closer_stop
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod elevator_tests {
    use crate::elevator::Elevator;
    use crate::shared::MotionState::{Down, Idle, Up};
    use crate::shared::StopKind::{DropOff, PickUp};

    #[test]
    fn test_elevator_init() {
        // Purpose: Verify that a new car starts idle at the ground floor with no work

        // Act
        let elevator = Elevator::new(3);

        // Assert
        assert_eq!(elevator.id(), 3);
        assert_eq!(elevator.current_floor(), 1);
        assert_eq!(elevator.motion_state(), Idle);
        assert!(elevator.task_queue().is_empty());
    }

    #[test]
    fn test_add_request_priority() {
        // Purpose: Verify that the initial priority is distance plus the kind weight

        // Arrange
        let mut elevator = Elevator::with_state(0, 4, Idle);

        // Act
        elevator.add_request(7, 1, PickUp);
        elevator.add_request(1, 2, DropOff);

        // Assert
        let stops = elevator.task_queue().snapshot();
        assert_eq!(stops[0].priority, 3);
        assert_eq!(stops[0].passenger_id, 1);
        assert_eq!(stops[1].priority, 4);
        assert_eq!(stops[1].passenger_id, 2);
    }

    #[test]
    fn test_empty_queue_stays_idle() {
        // Purpose: Verify that a car without work goes idle and never moves

        // Arrange
        let mut elevator = Elevator::with_state(0, 5, Up);

        // Act
        let arrival = elevator.step();

        // Assert
        assert!(arrival.is_none());
        assert_eq!(elevator.motion_state(), Idle);
        assert_eq!(elevator.current_floor(), 5);
    }

    #[test]
    fn test_step_moves_toward_next_stop() {
        // Purpose: Verify that the car moves one floor toward its most urgent stop

        // Arrange
        let mut up = Elevator::with_state(0, 3, Idle);
        let mut down = Elevator::with_state(1, 6, Idle);
        up.add_request(6, 1, PickUp);
        down.add_request(2, 2, PickUp);

        // Act
        up.step();
        down.step();

        // Assert
        assert_eq!(up.current_floor(), 4);
        assert_eq!(up.motion_state(), Up);
        assert_eq!(down.current_floor(), 5);
        assert_eq!(down.motion_state(), Down);
    }

    #[test]
    fn test_arrival_flushes_floor() {
        // Purpose: Verify that every stop on the arrival floor is served in the same tick

        // Arrange
        let mut elevator = Elevator::new(0);
        elevator.add_request(3, 7, PickUp);
        elevator.add_request(3, 8, DropOff);
        elevator.add_request(5, 9, DropOff);

        // Act
        let first = elevator.step();
        let second = elevator.step();

        // Assert
        assert!(first.is_none());
        let arrival = second.expect("Expected an arrival at floor 3");
        assert_eq!(arrival.elevator_id, 0);
        assert_eq!(arrival.floor, 3);
        assert_eq!(arrival.served.len(), 2);
        assert_eq!(elevator.current_floor(), 3);
        assert_eq!(elevator.motion_state(), Idle);
        assert_eq!(elevator.queue_len(), 1);

        // The remaining stop drives the next step
        elevator.step();
        assert_eq!(elevator.current_floor(), 4);
        assert_eq!(elevator.motion_state(), Up);
    }

    #[test]
    fn test_step_moves_at_most_one_floor() {
        // Purpose: Verify that position changes by at most one floor per step

        // Arrange
        let mut elevator = Elevator::with_state(0, 6, Idle);
        elevator.add_request(1, 1, PickUp);
        elevator.add_request(12, 2, PickUp);
        elevator.add_request(4, 3, DropOff);

        // Act & Assert
        for _ in 0..30 {
            let before = elevator.current_floor() as i32;
            let target = elevator.next_stop().ok().map(|s| s.floor as i32);
            elevator.step();
            let after = elevator.current_floor() as i32;
            assert!((after - before).abs() <= 1);
            if let Some(target) = target {
                if target != before {
                    assert_eq!((after - before).signum(), (target - before).signum());
                }
            }
        }
        assert!(elevator.task_queue().is_empty());
        assert_eq!(elevator.motion_state(), Idle);
    }

    #[test]
    fn test_aged_stop_overtakes_closer_stop() {
        // Purpose: Verify that decay lets an old stop beat a newer, closer one

        // Arrange
        let mut elevator = Elevator::with_state(0, 1, Idle);
        elevator.add_request(4, 1, PickUp);
        elevator.step();
        elevator.step();

        // Act
        // Car is at 3; the old stop has priority 1, the new one at floor 2 gets 1 as well
        elevator.add_request(2, 2, PickUp);

        // Assert
        let next = elevator.next_stop().unwrap();
        assert_eq!(next.passenger_id, 1);
        assert_eq!(next.floor, 4);
    }
}
