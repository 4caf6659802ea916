//! # FIFO errors
//! Almost nothing in this crate can fail: overflow and underflow are defined behaviours, not
//! errors. The only failure is building a buffer that cannot hold anything, which is reported
//! once, at construction, through [`FifoError`].
//!
//! ```
//! # use fifo::{Fifo, FifoError};
//! assert_eq!(Fifo::new(0).unwrap_err(), FifoError::ZeroCapacity);
//! ```

pub mod fifo_error;
