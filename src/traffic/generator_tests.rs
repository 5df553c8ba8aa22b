/*
 * Unit tests for the traffic generator
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_requests_stay_in_building
 * - test_seeded_traffic_is_reproducible
 * - test_generator_terminate
 * - test_generator_stops_when_controller_gone
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod generator_tests {
    use crate::config::TrafficConfig;
    use crate::controller::{request_channel, RequestSubmitter};
    use crate::shared::Request;
    use crate::traffic::TrafficGenerator;
    use crossbeam_channel::{unbounded, Receiver, Sender};
    use std::thread::spawn;
    use std::time::Duration;

    fn setup_generator(n_floors: u8, seed: u64) -> (TrafficGenerator, Receiver<Request>, Sender<()>) {
        let (request_tx, request_rx) = request_channel(0);
        let (terminate_tx, terminate_rx) = unbounded::<()>();

        let config = TrafficConfig {
            min_interval: 1,
            max_interval: 5,
            seed: Some(seed),
        };

        (
            TrafficGenerator::new(&config, n_floors, RequestSubmitter::new(request_tx, n_floors), terminate_rx),
            request_rx,
            terminate_tx,
        )
    }

    #[test]
    fn test_requests_stay_in_building() {
        // Purpose: Verify that generated floors are valid and origin differs from destination

        // Arrange
        let (mut generator, _request_rx, _terminate_tx) = setup_generator(4, 7);

        // Act
        let requests: Vec<Request> = (0..500).map(|_| generator.next_request()).collect();

        // Assert
        for (index, request) in requests.iter().enumerate() {
            assert!(request.is_within(4));
            assert_ne!(request.origin_floor, request.destination_floor);
            assert_eq!(request.passenger_id, index as u32);
        }
        assert!(requests.iter().any(|r| r.origin_floor == 1));
        assert!(requests.iter().any(|r| r.destination_floor == 4));
    }

    #[test]
    fn test_seeded_traffic_is_reproducible() {
        // Purpose: Verify that the same seed yields the same traffic

        // Arrange
        let (mut a, _rx_a, _tx_a) = setup_generator(12, 2024);
        let (mut b, _rx_b, _tx_b) = setup_generator(12, 2024);

        // Act
        let first: Vec<Request> = (0..50).map(|_| a.next_request()).collect();
        let second: Vec<Request> = (0..50).map(|_| b.next_request()).collect();

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn test_generator_terminate() {
        // Purpose: Verify that the generator submits traffic and stops when signalled

        // Arrange
        let (generator, request_rx, terminate_tx) = setup_generator(6, 1);
        let generator_thread = spawn(move || generator.run());

        // Act
        let first = request_rx.recv_timeout(Duration::from_secs(3)).unwrap();
        terminate_tx.send(()).unwrap();
        let submitted = generator_thread.join().unwrap();

        // Assert
        assert_eq!(first.passenger_id, 0);
        assert!(submitted >= 1);
    }

    #[test]
    fn test_generator_stops_when_controller_gone() {
        // Purpose: Verify that a closed request channel ends the generator cleanly

        // Arrange
        let (generator, request_rx, _terminate_tx) = setup_generator(6, 1);
        drop(request_rx);

        // Act
        let submitted = spawn(move || generator.run()).join().unwrap();

        // Assert
        assert_eq!(submitted, 0);
    }
}
