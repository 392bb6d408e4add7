//! A random source that can be shared by every deck in a process.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::{Mutex, MutexGuard};

/// A single seedable generator behind a mutex.
///
/// Decks never own a generator; they borrow one for each shuffle. Wrap one
/// `SharedRng` in a `static` or an `Arc` when several threads deal from
/// different decks but should draw from the same random stream.
///
/// ```
/// use hilo::{CardDeck, SharedRng, StandardDeck};
///
/// let rng = SharedRng::from_seed(42);
/// let mut deck = StandardDeck::new();
/// deck.shuffle(&mut *rng.lock());
/// assert_eq!(deck.remaining_cards(), 52);
/// ```
pub struct SharedRng {
    inner: Mutex<ChaCha8Rng>,
}

impl SharedRng {
    /// Creates a shared generator from a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates a shared generator seeded by the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            inner: Mutex::new(ChaCha8Rng::from_os_rng()),
        }
    }

    /// Locks the generator for exclusive use.
    ///
    /// Holding the guard blocks other callers, so keep it for a single shuffle.
    pub fn lock(&self) -> MutexGuard<'_, ChaCha8Rng> {
        self.inner.lock()
    }
}

impl core::fmt::Debug for SharedRng {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedRng").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore;

    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let a = SharedRng::from_seed(9);
        let b = SharedRng::from_seed(9);

        assert_eq!(a.lock().next_u64(), b.lock().next_u64());
        assert_eq!(a.lock().next_u64(), b.lock().next_u64());
    }

    #[test]
    fn draws_advance_one_stream() {
        let shared = SharedRng::from_seed(9);
        let first = shared.lock().next_u64();
        let second = shared.lock().next_u64();

        assert_ne!(first, second);
    }
}
