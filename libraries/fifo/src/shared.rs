#[cfg(feature = "alloc")]
use alloc::boxed::Box;
use core::cell::RefCell;
use critical_section::Mutex;

use crate::{Fifo, FifoError};

/// A [`Fifo`] that can be shared between interrupt handlers and tasks.
///
/// Every method runs inside a critical section, so a push from an interrupt can never observe a
/// half-finished pop and the other way around. Methods take `&self`; a `SharedFifo` built with
/// [`SharedFifo::new_static`] can sit in a plain `static`:
///
/// ```
/// use fifo::SharedFifo;
///
/// static UART_RX: SharedFifo<[u8; 64]> = SharedFifo::new_static();
///
/// // In the UART interrupt
/// UART_RX.push(b'A');
///
/// // In the polled consumer
/// while let Some(b) = UART_RX.try_pop() {
///     assert_eq!(b, b'A');
/// }
/// ```
///
/// Critical sections are kept to a single operation. Use [`SharedFifo::lock`] when several
/// operations must happen without anything slipping in between.
pub struct SharedFifo<S> {
    fifo: Mutex<RefCell<Fifo<S>>>,
}

#[cfg(feature = "alloc")]
impl SharedFifo<Box<[u8]>> {
    pub fn new(capacity: usize) -> Result<Self, FifoError> {
        Ok(Self::from_fifo(Fifo::new(capacity)?))
    }
}

impl<const N: usize> SharedFifo<[u8; N]> {
    pub const fn new_static() -> Self {
        SharedFifo {
            fifo: Mutex::new(RefCell::new(Fifo::new_static())),
        }
    }
}

impl<S> SharedFifo<S>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    pub const fn from_fifo(fifo: Fifo<S>) -> Self {
        SharedFifo {
            fifo: Mutex::new(RefCell::new(fifo)),
        }
    }

    /// Builds a shared FIFO on top of caller-provided storage, see [`Fifo::from_storage`].
    pub fn from_storage(storage: S) -> Result<Self, FifoError> {
        Ok(Self::from_fifo(Fifo::from_storage(storage)?))
    }

    /// Runs `f` with exclusive access to the inner [`Fifo`], all within one critical section.
    ///
    /// Keep `f` short, interrupts are masked while it runs. Calling other `SharedFifo` methods on
    /// the same instance from inside `f` panics.
    pub fn lock<R>(&self, f: impl FnOnce(&mut Fifo<S>) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.fifo.borrow_ref_mut(cs)))
    }

    /// See [`Fifo::push`].
    pub fn push(&self, b: u8) {
        self.lock(|fifo| fifo.push(b))
    }

    /// See [`Fifo::try_push`].
    pub fn try_push(&self, b: u8) -> Result<(), u8> {
        self.lock(|fifo| fifo.try_push(b))
    }

    /// See [`Fifo::pop`].
    pub fn pop(&self) -> u8 {
        self.lock(|fifo| fifo.pop())
    }

    /// See [`Fifo::try_pop`].
    pub fn try_pop(&self) -> Option<u8> {
        self.lock(|fifo| fifo.try_pop())
    }

    pub fn clear(&self) {
        self.lock(|fifo| fifo.clear())
    }

    pub fn is_empty(&self) -> bool {
        self.lock(|fifo| fifo.is_empty())
    }

    pub fn is_full(&self) -> bool {
        self.lock(|fifo| fifo.is_full())
    }

    pub fn len(&self) -> usize {
        self.lock(|fifo| fifo.len())
    }

    pub fn capacity(&self) -> usize {
        self.lock(|fifo| fifo.capacity())
    }

    /// Takes the inner [`Fifo`] back.
    pub fn into_inner(self) -> Fifo<S> {
        self.fifo.into_inner().into_inner()
    }
}
