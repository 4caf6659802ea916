#![cfg_attr(not(test), no_std)]

//!
//! Fixed-capacity byte FIFO used to hand bytes from one flow to another when the two are not
//! synchronized, typically a UART interrupt filling the buffer and a task draining it.
//!
//! [`Fifo`] is the plain ring buffer. It never blocks and never fails once built: pushing into a
//! full buffer discards the oldest byte, and popping from an empty one returns `0`. It offers no
//! protection against concurrent access; when the producer runs in an interrupt, either mask
//! interrupts around each call or use [`SharedFifo`], which does that for you.
//!
//! ```
//! use fifo::Fifo;
//!
//! let mut fifo = Fifo::new(4).unwrap();
//! fifo.push_slice(&[10, 20, 30, 40, 50]);
//!
//! assert!(fifo.is_full());
//! assert_eq!(fifo.pop(), 20);
//! ```
//!

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod logging;

mod error;
mod fifo;
mod shared;

pub use crate::error::fifo_error::FifoError;
pub use crate::fifo::{Drain, Fifo, EMPTY_SENTINEL};
pub use crate::shared::SharedFifo;

// Links the single-core critical section implementation used by `SharedFifo`.
#[cfg(all(target_arch = "arm", target_os = "none"))]
use cortex_m as _;
