//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! `channels`.

pub mod blink;
pub mod panel;
pub mod receiver;
pub mod transmitter;

pub use blink::blink_task;
pub use panel::panel_task;
pub use receiver::receiver_task;
pub use transmitter::transmitter_task;
