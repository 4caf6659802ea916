#[cfg(feature = "alloc")]
use alloc::boxed::Box;
#[cfg(feature = "alloc")]
use alloc::vec;
use core::fmt;

use crate::FifoError;

/// Value returned by [`Fifo::pop`] when there is nothing to pop. It is also a valid payload byte,
/// so use [`Fifo::is_empty`] or [`Fifo::try_pop`] when the difference matters.
pub const EMPTY_SENTINEL: u8 = 0;

/// Fixed-capacity byte FIFO backed by a ring buffer.
///
/// Bytes come out in the order they were pushed. The capacity is fixed when the buffer is built
/// and never changes. Two policies make every operation infallible:
/// - pushing into a full buffer overwrites the oldest unread byte, which is lost;
/// - popping from an empty buffer returns [`EMPTY_SENTINEL`] and changes nothing.
///
/// `S` is the backing store: `Box<[u8]>` when built by [`Fifo::new`], an inline array through
/// [`Fifo::new_static`] when no allocator is available, or any byte slice handed to
/// [`Fifo::from_storage`].
///
/// # Concurrency
/// The buffer has no internal locking. A push or pop updates several fields, so if the producer
/// and consumer can preempt each other (for example one of them is an interrupt handler), each
/// call must run with that preemption masked. [`SharedFifo`](crate::SharedFifo) wraps a `Fifo`
/// in a critical section for exactly that case.
pub struct Fifo<S> {
    storage: S,
    capacity: usize,
    /// Index of the next byte to pop.
    head: usize,
    /// Index of the slot the next push writes to.
    tail: usize,
    count: usize,
}

#[cfg(feature = "alloc")]
impl Fifo<Box<[u8]>> {
    /// Allocates an empty FIFO able to hold `capacity` bytes.
    pub fn new(capacity: usize) -> Result<Self, FifoError> {
        if capacity == 0 {
            warn!("rejected FIFO with zero capacity");
            return Err(FifoError::ZeroCapacity);
        }
        Ok(Self::with_storage(vec![0; capacity].into_boxed_slice(), capacity))
    }
}

impl<const N: usize> Fifo<[u8; N]> {
    const NON_ZERO: () = assert!(N > 0, "FIFO capacity must be at least one byte");

    /// Creates an empty FIFO stored inline. This is a `const fn`, so the buffer can live in a
    /// `static`. `N == 0` fails to compile.
    pub const fn new_static() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;

        Self {
            storage: [0; N],
            capacity: N,
            head: 0,
            tail: 0,
            count: 0,
        }
    }
}

impl<S> Fifo<S>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Builds an empty FIFO on top of caller-provided storage. The whole of `storage` is used and
    /// its current contents are ignored.
    pub fn from_storage(storage: S) -> Result<Self, FifoError> {
        let capacity = storage.as_ref().len();
        if capacity == 0 {
            warn!("rejected FIFO storage of zero bytes");
            return Err(FifoError::ZeroCapacity);
        }
        Ok(Self::with_storage(storage, capacity))
    }

    fn with_storage(storage: S, capacity: usize) -> Self {
        Fifo {
            storage,
            capacity,
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Gives back the backing store. Unread bytes are not moved to the front.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Forgets every byte held. The storage is not zeroed.
    pub fn clear(&mut self) {
        trace!("clearing FIFO holding {=usize} bytes", self.count);
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Pushes a byte at the tail.
    ///
    /// If the buffer is already full the oldest byte is discarded to make room and the buffer
    /// stays full. Check [`Fifo::is_full`] first, or use [`Fifo::try_push`], if that loss is not
    /// acceptable.
    pub fn push(&mut self, b: u8) {
        if self.is_full() {
            // The write below lands on the oldest byte.
            trace!(
                "FIFO overflow, dropping {=u8}",
                self.storage.as_ref()[self.head]
            );
            self.head = self.advance(self.head);
        } else {
            self.count += 1;
        }
        self.storage.as_mut()[self.tail] = b;
        self.tail = self.advance(self.tail);
    }

    /// Pushes a byte only if there is room. A full buffer is left untouched and the byte is handed
    /// back.
    pub fn try_push(&mut self, b: u8) -> Result<(), u8> {
        if self.is_full() {
            debug!("FIFO full, refusing {=u8}", b);
            return Err(b);
        }
        self.push(b);
        Ok(())
    }

    /// Pushes every byte of `bytes` in order with the same overwrite policy as [`Fifo::push`].
    /// Returns how many bytes were lost to overwrites, counting bytes of `bytes` itself when it is
    /// longer than the capacity.
    pub fn push_slice(&mut self, bytes: &[u8]) -> usize {
        let dropped = (self.count + bytes.len()).saturating_sub(self.capacity);
        for &b in bytes {
            self.push(b);
        }
        dropped
    }

    /// Pops the oldest byte, or [`EMPTY_SENTINEL`] if there is none.
    pub fn pop(&mut self) -> u8 {
        self.try_pop().unwrap_or(EMPTY_SENTINEL)
    }

    /// Pops the oldest byte, or `None` if the buffer is empty.
    pub fn try_pop(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let b = self.storage.as_ref()[self.head];
        self.head = self.advance(self.head);
        self.count -= 1;
        Some(b)
    }

    /// Returns the oldest byte without removing it.
    pub fn peek(&self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            Some(self.storage.as_ref()[self.head])
        }
    }

    /// Pops bytes into `buf` until it is filled or the FIFO runs dry. Returns the number of bytes
    /// written to the front of `buf`.
    pub fn pop_into(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(self.count);
        for slot in &mut buf[..n] {
            *slot = self.storage.as_ref()[self.head];
            self.head = self.advance(self.head);
        }
        self.count -= n;
        n
    }

    /// Pops up to `N` bytes into a fixed capacity vector.
    pub fn pop_frame<const N: usize>(&mut self) -> heapless::Vec<u8, N> {
        let mut frame = heapless::Vec::new();
        while frame.len() < N {
            let Some(b) = self.try_pop() else {
                break;
            };
            // Cannot fail, the vector has room.
            let _ = frame.push(b);
        }
        frame
    }

    /// Returns an iterator that pops bytes until the buffer is empty. Bytes the iterator did not
    /// get to stay in the buffer if it is dropped early.
    pub fn drain(&mut self) -> Drain<'_, S> {
        Drain { fifo: self }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    /// Number of unread bytes.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of bytes that can be pushed before the oldest ones start being overwritten.
    pub fn free(&self) -> usize {
        self.capacity - self.count
    }

    fn advance(&self, index: usize) -> usize {
        if index + 1 == self.capacity {
            0
        } else {
            index + 1
        }
    }
}

impl<S> Extend<u8> for Fifo<S>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for b in iter {
            self.push(b);
        }
    }
}

impl<'a, S> Extend<&'a u8> for Fifo<S>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

// Storage contents are left out, most of it is stale.
impl<S> fmt::Debug for Fifo<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fifo")
            .field("capacity", &self.capacity)
            .field("len", &self.count)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

impl<S> defmt::Format for Fifo<S> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Fifo(capacity={=usize}, len={=usize})",
            self.capacity,
            self.count
        )
    }
}

/// Iterator returned by [`Fifo::drain`].
pub struct Drain<'a, S> {
    fifo: &'a mut Fifo<S>,
}

impl<S> Iterator for Drain<'_, S>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.fifo.try_pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.fifo.len(), Some(self.fifo.len()))
    }
}

impl<S> ExactSizeIterator for Drain<'_, S> where S: AsRef<[u8]> + AsMut<[u8]> {}
