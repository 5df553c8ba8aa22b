pub mod generator;

mod generator_tests;

pub use generator::TrafficGenerator;
