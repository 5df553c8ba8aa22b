pub mod controller;
pub mod dispatcher;
pub mod scoring;
pub mod submitter;


pub use controller::Controller;
pub use dispatcher::Dispatcher;
pub use submitter::{request_channel, RequestSubmitter, SubmitError};
