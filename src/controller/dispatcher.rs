/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::controller::scoring;
use crate::elevator::{ArrivalEvent, Elevator};
use crate::shared::{FloorSnapshot, Request, StopKind, SystemSnapshot};

/**
 * Dispatch state of the bank, advanced one tick at a time.
 *
 * Owns every car and one waiting buffer per floor. A request is parked in the buffer
 * of its origin floor as soon as it is assigned, and leaves it when any car arrives
 * at that floor. Boarding passengers become drop-off stops of the arriving car.
 *
 * # Fields
 * - `n_floors`:        Floors are numbered `1..=n_floors`.
 * - `elevators`:       Cars, stepped in id order.
 * - `floor_buffers`:   Waiting passengers, indexed by `floor - 1`.
 * - `tick`:            Number of completed ticks.
 */
#[derive(Debug, Clone)]
pub struct Dispatcher {
    n_floors: u8,
    elevators: Vec<Elevator>,
    floor_buffers: Vec<VecDeque<Request>>,
    tick: u64,
}

impl Dispatcher {
    pub fn new(n_floors: u8, n_elevators: u8) -> Dispatcher {
        let elevators = (0..n_elevators as usize).map(Elevator::new).collect();
        Dispatcher::with_elevators(n_floors, elevators)
    }

    pub fn with_elevators(n_floors: u8, mut elevators: Vec<Elevator>) -> Dispatcher {
        elevators.sort_by_key(|elevator| elevator.id());
        Dispatcher {
            n_floors,
            elevators,
            floor_buffers: vec![VecDeque::new(); n_floors as usize],
            tick: 0,
        }
    }

    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: usize) -> Option<&Elevator> {
        self.elevators.iter().find(|elevator| elevator.id() == id)
    }

    pub fn waiting_at(&self, floor: u8) -> Option<&VecDeque<Request>> {
        self.floor_index(floor).map(|index| &self.floor_buffers[index])
    }

    /// One discrete step: assign the new requests, then move every car once.
    pub fn tick<I>(&mut self, requests: I) -> Vec<ArrivalEvent>
    where
        I: IntoIterator<Item = Request>,
    {
        for request in requests {
            self.dispatch(request);
        }

        let mut arrivals = Vec::new();
        for index in 0..self.elevators.len() {
            if let Some(arrival) = self.elevators[index].step() {
                self.on_arrival(&arrival);
                arrivals.push(arrival);
            }
        }

        self.tick += 1;
        arrivals
    }

    /// Assigns the pickup of `request` to the cheapest car and parks the passenger on
    /// the origin floor. Returns the id of the chosen car.
    pub fn dispatch(&mut self, request: Request) -> Option<usize> {
        if !request.is_within(self.n_floors) {
            warn!("Dropping {}: floors outside 1..={}", request, self.n_floors);
            return None;
        }

        let Some(index) = scoring::select_elevator(&self.elevators, &request, self.n_floors) else {
            warn!("Dropping {}: no elevators", request);
            return None;
        };

        if let Some(floor_index) = self.floor_index(request.origin_floor) {
            self.floor_buffers[floor_index].push_back(request);
        }

        let elevator = &mut self.elevators[index];
        elevator.add_request(request.origin_floor, request.passenger_id, StopKind::PickUp);
        debug!(
            "Assigned {} to elevator {} at floor {}",
            request,
            elevator.id(),
            elevator.current_floor()
        );

        Some(elevator.id())
    }

    /// Boards everyone waiting on the arrival floor into the arriving car.
    pub fn on_arrival(&mut self, arrival: &ArrivalEvent) {
        for stop in arrival.served.iter().filter(|stop| stop.kind == StopKind::DropOff) {
            info!(
                "Elevator {} delivered passenger {} to floor {}",
                arrival.elevator_id, stop.passenger_id, stop.floor
            );
        }

        let Some(floor_index) = self.floor_index(arrival.floor) else {
            return;
        };
        let Some(elevator) = self
            .elevators
            .iter_mut()
            .find(|elevator| elevator.id() == arrival.elevator_id)
        else {
            warn!("Arrival from unknown elevator {}", arrival.elevator_id);
            return;
        };

        for request in self.floor_buffers[floor_index].drain(..) {
            elevator.add_request(request.destination_floor, request.passenger_id, StopKind::DropOff);
            info!(
                "Passenger {} boarded elevator {} at floor {} heading to {}",
                request.passenger_id,
                elevator.id(),
                arrival.floor,
                request.destination_floor
            );
        }
    }

    pub fn snapshot(&self) -> SystemSnapshot {
        SystemSnapshot {
            tick: self.tick,
            elevators: self.elevators.iter().map(Elevator::snapshot).collect(),
            floors: self
                .floor_buffers
                .iter()
                .enumerate()
                .map(|(index, waiting)| FloorSnapshot {
                    floor: index as u8 + 1,
                    waiting: waiting.iter().copied().collect(),
                })
                .collect(),
        }
    }

    fn floor_index(&self, floor: u8) -> Option<usize> {
        if (1..=self.n_floors).contains(&floor) {
            Some(floor as usize - 1)
        } else {
            None
        }
    }
}
