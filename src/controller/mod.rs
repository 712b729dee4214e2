//! The stateful signal controller.
//!
//! A [`Controller`] is a plain owned value. Hosts hold it by `&mut` and
//! call its operations from their own event handlers and timers; it has no
//! clock, no threads, and no internal synchronization.

mod machine;
mod snapshot;

pub use machine::Controller;
pub use snapshot::ControllerSnapshot;
