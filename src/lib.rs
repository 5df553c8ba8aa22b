pub mod config;
pub mod controller;
pub mod display;
pub mod elevator;
pub mod shared;
pub mod traffic;
