//! Serial link step logic
//!
//! Both loops are written as synchronous `step` functions: the firmware
//! tasks own the timers, the async UART reads and the shared-state locking,
//! and call into these once per iteration.

pub mod receiver;
pub mod transmitter;

pub use receiver::{Receiver, RxOutcome, RxStats};
pub use transmitter::{Transmitter, TxOutcome, TxStats};
