use derive_more::Display;

/// Errors reported while building a [`Fifo`](crate::Fifo) or [`SharedFifo`](crate::SharedFifo).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum FifoError {
    /// The requested capacity, or the storage handed over, holds zero bytes.
    #[display(fmt = "FIFO capacity must be at least one byte")]
    ZeroCapacity,
}

impl defmt::Format for FifoError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            FifoError::ZeroCapacity => {
                defmt::write!(f, "FIFO capacity must be at least one byte")
            }
        }
    }
}
