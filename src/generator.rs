//! Random id generation from a mutable allowed alphabet.
//!
//! An [`IdGenerator`] owns its allowed alphabet behind a mutex, so one
//! instance can be shared across threads. A process-wide instance backs the
//! free functions [`add`], [`remove`], [`generate`] and [`generate_default`].
//!
//! None of these operations fail. Lengths below [`MIN_LENGTH`] are raised to
//! it, and an alphabet emptied by removals is reset to the default one the
//! next time an id is generated.

use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use rand::Rng;
use tracing::debug;

use crate::alphabet::Alphabet;

/// Length used when the caller does not pick one.
pub const DEFAULT_LENGTH: usize = 10;

/// Shortest id that will be produced.
pub const MIN_LENGTH: usize = 5;

static GLOBAL: LazyLock<IdGenerator> = LazyLock::new(IdGenerator::new);

/// Returns the length an id requested with `length` will actually have.
#[must_use]
pub fn effective_length(length: usize) -> usize {
    length.max(MIN_LENGTH)
}

/// Generates ids from an allowed alphabet that can be grown and shrunk.
#[derive(Debug)]
pub struct IdGenerator {
    allowed: Mutex<Alphabet>,
}

impl IdGenerator {
    /// Creates a generator allowing the default 62 alphanumerics.
    #[must_use]
    pub fn new() -> Self {
        Self::with_alphabet(Alphabet::default())
    }

    /// Creates a generator starting from the given alphabet.
    ///
    /// An empty alphabet is accepted; it is replaced by the default one
    /// when the first id is generated.
    #[must_use]
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self { allowed: Mutex::new(alphabet) }
    }

    /// Allows each of `chars`. Characters already allowed are skipped.
    pub fn add(&self, chars: &[char]) {
        if chars.is_empty() {
            return;
        }
        let mut allowed = self.lock();
        let added = chars.iter().filter(|&&c| allowed.insert(c)).count();
        debug!(added, size = allowed.len(), "added characters to alphabet");
    }

    /// Disallows each of `chars`. Characters not allowed are skipped.
    ///
    /// Removing every character is fine; see [`IdGenerator::generate`].
    pub fn remove(&self, chars: &[char]) {
        if chars.is_empty() {
            return;
        }
        let mut allowed = self.lock();
        let removed = chars.iter().filter(|&&c| allowed.remove(c)).count();
        debug!(removed, size = allowed.len(), "removed characters from alphabet");
    }

    /// Returns a copy of the currently allowed alphabet.
    ///
    /// The copy may be empty if every character was removed; generation
    /// heals that, this accessor does not.
    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        self.lock().clone()
    }

    /// Returns the alphabet the next id will be drawn from.
    ///
    /// Unlike [`IdGenerator::alphabet`], an emptied alphabet is first reset to
    /// the default one, exactly as generation would do.
    #[must_use]
    pub fn effective_alphabet(&self) -> Alphabet {
        let mut allowed = self.lock();
        ensure_allowed_chars(&mut allowed);
        allowed.clone()
    }

    /// Generates an id of [`DEFAULT_LENGTH`] characters.
    #[must_use]
    pub fn generate_default(&self) -> String {
        self.generate(DEFAULT_LENGTH)
    }

    /// Generates an id of `length` characters using the thread-local RNG.
    ///
    /// `length` is raised to [`MIN_LENGTH`] if smaller. Each character is an
    /// independent uniform draw from the allowed alphabet, so repeats are
    /// possible within and across ids.
    #[must_use]
    pub fn generate(&self, length: usize) -> String {
        self.generate_with_rng(length, &mut rand::rng())
    }

    /// Like [`IdGenerator::generate`], drawing from the supplied RNG.
    #[must_use]
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> String {
        let length = effective_length(length);
        let mut allowed = self.lock();
        ensure_allowed_chars(&mut allowed);
        (0..length).filter_map(|_| allowed.choose(&mut *rng)).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Alphabet> {
        // The alphabet is always left valid, so a poisoned lock is safe to reuse.
        self.allowed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_allowed_chars(allowed: &mut Alphabet) {
    if allowed.is_empty() {
        debug!("allowed alphabet is empty, resetting to default");
        *allowed = Alphabet::default();
    }
}

/// The process-wide generator used by the free functions in this module.
#[must_use]
pub fn global() -> &'static IdGenerator {
    &GLOBAL
}

/// Allows `chars` on the process-wide generator.
pub fn add(chars: &[char]) {
    GLOBAL.add(chars);
}

/// Disallows `chars` on the process-wide generator.
pub fn remove(chars: &[char]) {
    GLOBAL.remove(chars);
}

/// Generates an id of `length` characters from the process-wide generator.
#[must_use]
pub fn generate(length: usize) -> String {
    GLOBAL.generate(length)
}

/// Generates an id of [`DEFAULT_LENGTH`] characters from the process-wide generator.
#[must_use]
pub fn generate_default() -> String {
    GLOBAL.generate_default()
}
