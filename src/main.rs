/* 3rd party libraries */
use clap::{Arg, ArgMatches, Command};
use crossbeam_channel as cbc;
use log::{error, info};
use std::thread::{sleep, Builder, JoinHandle};

/* Custom libraries */
use elevator_dispatch::config::{self, Config};
use elevator_dispatch::controller::{request_channel, Controller, RequestSubmitter};
use elevator_dispatch::display::{Display, DisplayFormat};
use elevator_dispatch::shared::SystemSnapshot;
use elevator_dispatch::traffic::TrafficGenerator;
use elevator_dispatch::unwrap_or_exit;

/* Main */
fn main() {
    let matches = cli().get_matches();

    // Initialize logging
    let log_level = matches.value_of("log-level").unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let mut config = unwrap_or_exit!(config::load_config(config_path));
    apply_overrides(&mut config, &matches);
    unwrap_or_exit!(config.validate());

    let format = if matches.is_present("json") {
        DisplayFormat::Json
    } else {
        DisplayFormat::Text
    };

    info!(
        "Starting simulation: {} floors, {} elevators, tick {} ms, run {} ms",
        config.simulation.n_floors,
        config.simulation.n_elevators,
        config.simulation.tick_interval,
        config.simulation.run_duration
    );

    // Initialize channels
    let (request_tx, request_rx) = request_channel(config.simulation.request_buffer);
    let (snapshot_tx, snapshot_rx) = cbc::unbounded::<SystemSnapshot>();
    let (generator_terminate_tx, generator_terminate_rx) = cbc::unbounded::<()>();
    let (controller_terminate_tx, controller_terminate_rx) = cbc::unbounded::<()>();
    let (display_terminate_tx, display_terminate_rx) = cbc::unbounded::<()>();

    // Start the display
    let display = Display::new(format, snapshot_rx, display_terminate_rx);
    let display_thread = unwrap_or_exit!(Builder::new()
        .name("display".into())
        .spawn(move || display.run()));

    // Start the controller
    let controller = Controller::new(
        &config.simulation,
        request_rx,
        snapshot_tx,
        controller_terminate_rx,
    );
    let controller_thread = unwrap_or_exit!(Builder::new()
        .name("controller".into())
        .spawn(move || controller.run()));

    // Start the traffic generator
    let generator = TrafficGenerator::new(
        &config.traffic,
        config.simulation.n_floors,
        RequestSubmitter::new(request_tx, config.simulation.n_floors),
        generator_terminate_rx,
    );
    let generator_thread = unwrap_or_exit!(Builder::new()
        .name("traffic_generator".into())
        .spawn(move || generator.run()));

    sleep(config.simulation.run_duration());

    // Shut down producers before the consumer
    let _ = generator_terminate_tx.send(());
    let submitted = join_or_exit(generator_thread, "traffic_generator");

    let _ = controller_terminate_tx.send(());
    let dispatcher = join_or_exit(controller_thread, "controller");

    let _ = display_terminate_tx.send(());
    join_or_exit(display_thread, "display");

    let pending: usize = dispatcher.elevators().iter().map(|e| e.queue_len()).sum();
    info!(
        "Simulation finished: {} requests generated, {} ticks, {} stops still pending",
        submitted,
        dispatcher.tick_count(),
        pending
    );
}

fn cli() -> Command<'static> {
    Command::new("elevator-dispatch")
        .about("Multi-elevator dispatch simulation")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("floors")
                .long("floors")
                .takes_value(true)
                .help("Override the number of floors"),
        )
        .arg(
            Arg::new("elevators")
                .long("elevators")
                .takes_value(true)
                .help("Override the number of elevators"),
        )
        .arg(
            Arg::new("duration")
                .long("duration")
                .takes_value(true)
                .help("Override the run duration in milliseconds"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .takes_value(true)
                .help("Seed for reproducible traffic"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print snapshots as JSON lines"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .takes_value(true)
                .help("Default log filter when RUST_LOG is unset"),
        )
}

fn apply_overrides(config: &mut Config, matches: &ArgMatches) {
    if matches.is_present("floors") {
        config.simulation.n_floors = unwrap_or_exit!(matches.value_of_t::<u8>("floors"));
    }
    if matches.is_present("elevators") {
        config.simulation.n_elevators = unwrap_or_exit!(matches.value_of_t::<u8>("elevators"));
    }
    if matches.is_present("duration") {
        config.simulation.run_duration = unwrap_or_exit!(matches.value_of_t::<u64>("duration"));
    }
    if matches.is_present("seed") {
        config.traffic.seed = Some(unwrap_or_exit!(matches.value_of_t::<u64>("seed")));
    }
}

fn join_or_exit<T>(handle: JoinHandle<T>, name: &str) -> T {
    match handle.join() {
        Ok(value) => value,
        Err(_) => {
            error!("Thread {} panicked", name);
            std::process::exit(1);
        }
    }
}
