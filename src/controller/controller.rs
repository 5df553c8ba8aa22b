/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info};
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimulationConfig;
use crate::controller::Dispatcher;
use crate::shared::{Request, SystemSnapshot};

/***************************************/
/*               Enums                 */
/***************************************/
enum Event {
    Tick,
    Terminate,
}

/**
 * Runs the dispatch tick loop on its own thread.
 *
 * Every tick drains what is currently in the request channel, advances the bank by
 * one step and publishes a snapshot. The loop never blocks on the request channel,
 * so cars with pending work keep moving when no new traffic arrives.
 *
 * # Fields
 * - `dispatcher`:          Cars and waiting passengers.
 * - `tick_interval`:       Wall-clock length of one tick.
 * - `request_rx`:          Inbound requests from the traffic sources.
 * - `snapshot_tx`:         Sends the state after each tick to observers.
 * - `terminate_rx`:        Stops the loop.
 */
pub struct Controller {
    dispatcher: Dispatcher,
    tick_interval: Duration,

    // Channels
    request_rx: cbc::Receiver<Request>,
    snapshot_tx: cbc::Sender<SystemSnapshot>,
    terminate_rx: cbc::Receiver<()>,
}

impl Controller {
    pub fn new(
        config: &SimulationConfig,
        request_rx: cbc::Receiver<Request>,
        snapshot_tx: cbc::Sender<SystemSnapshot>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Controller {
        Controller::with_dispatcher(
            Dispatcher::new(config.n_floors, config.n_elevators),
            config.tick_interval(),
            request_rx,
            snapshot_tx,
            terminate_rx,
        )
    }

    pub fn with_dispatcher(
        dispatcher: Dispatcher,
        tick_interval: Duration,
        request_rx: cbc::Receiver<Request>,
        snapshot_tx: cbc::Sender<SystemSnapshot>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Controller {
        Controller {
            dispatcher,
            tick_interval,
            request_rx,
            snapshot_tx,
            terminate_rx,
        }
    }

    /// Runs until terminated and returns the final dispatch state.
    pub fn run(mut self) -> Dispatcher {
        let ticker = cbc::tick(self.tick_interval);

        // Main loop
        loop {
            match self.wait_for_event(&ticker) {
                Event::Tick => self.handle_tick(),
                Event::Terminate => {
                    info!(
                        "Controller stopped after {} ticks, {} requests left undrained",
                        self.dispatcher.tick_count(),
                        self.request_rx.len()
                    );
                    return self.dispatcher;
                }
            }
        }
    }

    fn wait_for_event(&self, ticker: &cbc::Receiver<std::time::Instant>) -> Event {
        cbc::select! {
            recv(self.terminate_rx) -> _ => Event::Terminate,
            recv(ticker) -> _ => Event::Tick,
        }
    }

    fn handle_tick(&mut self) {
        // Only what is queued right now, so a busy producer cannot starve movement
        let pending = self.request_rx.len();
        let requests: Vec<Request> = self.request_rx.try_iter().take(pending).collect();
        if !requests.is_empty() {
            debug!("Tick {}: {} new requests", self.dispatcher.tick_count() + 1, requests.len());
        }

        self.dispatcher.tick(requests);

        if self.snapshot_tx.send(self.dispatcher.snapshot()).is_err() {
            debug!("No observer listening for snapshots");
        }
    }
}
