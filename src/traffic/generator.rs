/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::TrafficConfig;
use crate::controller::{RequestSubmitter, SubmitError};
use crate::shared::Request;

/**
 * Random passenger traffic.
 *
 * Emits one request at a time with distinct origin and destination floors, then
 * sleeps a random interval. The terminate channel is checked before every wait.
 *
 * # Fields
 * - `n_floors`:            Floors are drawn from `1..=n_floors`.
 * - `min_interval`:        Shortest pause between two requests, in milliseconds.
 * - `max_interval`:        Longest pause between two requests, in milliseconds.
 * - `next_passenger_id`:   Id given to the next request.
 * - `rng`:                 Seeded from the config when a seed is set.
 * - `submitter`:           Inbound side of the controller.
 * - `terminate_rx`:        Stops the generator.
 */
pub struct TrafficGenerator {
    n_floors: u8,
    min_interval: u64,
    max_interval: u64,
    next_passenger_id: u32,
    rng: StdRng,

    // Channels
    submitter: RequestSubmitter,
    terminate_rx: cbc::Receiver<()>,
}

impl TrafficGenerator {
    pub fn new(
        config: &TrafficConfig,
        n_floors: u8,
        submitter: RequestSubmitter,
        terminate_rx: cbc::Receiver<()>,
    ) -> TrafficGenerator {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        TrafficGenerator {
            n_floors,
            min_interval: config.min_interval,
            max_interval: config.max_interval,
            next_passenger_id: 0,
            rng,
            submitter,
            terminate_rx,
        }
    }

    /// Runs until terminated or until the controller hangs up. Returns the number of
    /// requests submitted.
    pub fn run(mut self) -> u32 {
        loop {
            let request = self.next_request();
            match self.submitter.submit(request) {
                Ok(()) => debug!("Generated {}", request),
                Err(SubmitError::Disconnected) => {
                    info!("Controller gone, traffic generator stopping");
                    return self.next_passenger_id - 1;
                }
                Err(e) => warn!("Discarded generated request: {}", e),
            }

            let pause = Duration::from_millis(self.rng.random_range(self.min_interval..=self.max_interval));
            cbc::select! {
                recv(self.terminate_rx) -> _ => {
                    info!("Traffic generator stopped after {} requests", self.next_passenger_id);
                    return self.next_passenger_id;
                }
                default(pause) => {}
            }
        }
    }

    /// Draws a request with `origin != destination`.
    pub fn next_request(&mut self) -> Request {
        let origin = self.rng.random_range(1..=self.n_floors);
        let mut destination = self.rng.random_range(1..self.n_floors);
        if destination >= origin {
            destination += 1;
        }

        let passenger_id = self.next_passenger_id;
        self.next_passenger_id += 1;
        Request::new(origin, destination, passenger_id)
    }
}
