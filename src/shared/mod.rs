pub mod macros;
pub mod structs;

pub use structs::ElevatorSnapshot;
pub use structs::FloorSnapshot;
pub use structs::MotionState;
pub use structs::Request;
pub use structs::Stop;
pub use structs::StopKind;
pub use structs::SystemSnapshot;
