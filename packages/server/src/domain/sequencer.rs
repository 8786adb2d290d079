//! Serialization domain for room mutation and its fan-out.

use tokio::sync::{Mutex, MutexGuard};

/// Serializes each room mutation together with the delivery that
/// observes it.
///
/// Appending to history and broadcasting to the members must form one
/// critical section: with independent locks, two concurrent sends can
/// append in one order and broadcast in the other, and a join can
/// replay a racing message that then also arrives as a broadcast.
/// One coordinator over all rooms; deliveries go through non-blocking
/// channel handles, so the guard is never held across socket I/O.
pub struct RoomSequencer {
    lock: Mutex<()>,
}

impl RoomSequencer {
    pub fn new() -> Self {
        Self {
            lock: Mutex::new(()),
        }
    }

    /// Enter the critical section. Held for the duration of the guard.
    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }
}

impl Default for RoomSequencer {
    fn default() -> Self {
        Self::new()
    }
}
