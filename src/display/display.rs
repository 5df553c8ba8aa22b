/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{error, info};
use std::fmt::Write as _;
use std::io::Write;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{StopKind, SystemSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayFormat {
    Text,
    Json,
}

/**
 * Read-only observer of the simulation.
 *
 * Receives one snapshot per tick from the controller and writes it to stdout, either
 * as a text report with a shaft drawing or as one JSON object per line.
 */
pub struct Display {
    format: DisplayFormat,
    snapshot_rx: cbc::Receiver<SystemSnapshot>,
    terminate_rx: cbc::Receiver<()>,
}

impl Display {
    pub fn new(
        format: DisplayFormat,
        snapshot_rx: cbc::Receiver<SystemSnapshot>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Display {
        Display {
            format,
            snapshot_rx,
            terminate_rx,
        }
    }

    pub fn run(self) {
        let mut stdout = std::io::stdout();

        loop {
            cbc::select! {
                recv(self.snapshot_rx) -> snapshot => {
                    match snapshot {
                        Ok(snapshot) => {
                            let output = match self.format {
                                DisplayFormat::Text => render_text(&snapshot),
                                DisplayFormat::Json => render_json(&snapshot),
                            };
                            if let Err(e) = writeln!(stdout, "{}", output) {
                                error!("Failed to write snapshot: {}", e);
                            }
                        }
                        Err(_) => {
                            info!("Snapshot channel closed, display stopping");
                            return;
                        }
                    }
                }
                recv(self.terminate_rx) -> _ => {
                    info!("Display stopped");
                    return;
                }
            }
        }
    }
}

pub fn render_json(snapshot: &SystemSnapshot) -> String {
    match serde_json::to_string(snapshot) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize snapshot: {}", e);
            String::new()
        }
    }
}

pub fn render_text(snapshot: &SystemSnapshot) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Tick {}", snapshot.tick);
    let _ = writeln!(out, "Elevator Information:");
    for elevator in &snapshot.elevators {
        let _ = writeln!(out, "Elevator {}:", elevator.id);
        let _ = writeln!(out, "  Current Floor: {}", elevator.current_floor);
        let _ = writeln!(out, "  Direction: {}", elevator.motion_state);
        let _ = writeln!(out, "  Requests:");
        for stop in &elevator.queue {
            let _ = writeln!(
                out,
                "    Floor: {}, Passenger ID: {}, Purpose: {}, Priority: {}",
                stop.floor, stop.passenger_id, stop.kind, stop.priority
            );
        }
    }

    let _ = writeln!(out, "Information about people waiting on the floors:");
    for floor in snapshot.floors.iter().rev() {
        let _ = writeln!(out, "Floor {} Requests:", floor.floor);
        for request in &floor.waiting {
            let _ = writeln!(
                out,
                "  From Floor: {}, To Floor: {}, Passenger ID: {}",
                request.origin_floor, request.destination_floor, request.passenger_id
            );
        }
    }

    let _ = writeln!(out);
    let _ = write!(out, "{:<14}{:<13}{:<23}", "Floors", "Elevators", "Waiting");
    for elevator in &snapshot.elevators {
        let _ = write!(out, "{:<30}", format!("Riding elevator {}", elevator.id));
    }
    let _ = writeln!(out);

    for floor in snapshot.floors.iter().rev() {
        let _ = write!(out, "Floor {:>2}:     ", floor.floor);
        for elevator in &snapshot.elevators {
            let cell = if elevator.current_floor == floor.floor { "[]" } else { "| " };
            let _ = write!(out, "{}", cell);
        }
        let _ = write!(out, "{:<width$}", "", width = 11usize.saturating_sub(2 * snapshot.elevators.len()));
        let _ = write!(out, "-{:<22}", "P".repeat(floor.waiting.len()));

        // Riders are listed once, on the top row
        if Some(floor.floor) == snapshot.floors.last().map(|f| f.floor) {
            for elevator in &snapshot.elevators {
                let riders: Vec<String> = elevator
                    .queue
                    .iter()
                    .filter(|stop| stop.kind == StopKind::DropOff)
                    .map(|stop| stop.passenger_id.to_string())
                    .collect();
                let _ = write!(out, "{:<30}", riders.join(" "));
            }
        }
        let _ = writeln!(out);
    }

    out
}
