//! Rudderlink wire protocol
//!
//! The local node streams its normalized rudder position to the remote node
//! as plain ASCII text, one value per line:
//!
//! ```text
//! 0.5\n0.5\n0.5123\n0.73\n ...
//! ```
//!
//! Each frame is the decimal representation of a value in `[0, 1]`,
//! terminated by `\n`. There is no checksum, sequence number or start byte;
//! the receiver resynchronizes on the next terminator after any garbage.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod frame;
pub mod reading;

pub use frame::{
    decode_frame, encode_frame, FrameError, LineAssembler, FRAME_TERMINATOR,
    MAX_FRAME_LEN,
};
pub use reading::Reading;
