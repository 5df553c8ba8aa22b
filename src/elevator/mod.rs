pub mod elevator;
pub mod task_queue;

mod elevator_tests;

pub use elevator::ArrivalEvent;
pub use elevator::Elevator;
pub use task_queue::QueueError;
pub use task_queue::TaskQueue;
