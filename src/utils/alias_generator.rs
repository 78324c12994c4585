//! Random alias generation.
//!
//! Aliases are drawn from the 62-character alphabet `A-Z a-z 0-9`, each
//! character independently and uniformly.

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Alias length used when none is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Produces candidate aliases.
///
/// Generators make no uniqueness promise; collisions are detected by the
/// store's uniqueness constraint.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Returns a token of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Generator backed by a single seeded RNG.
///
/// The RNG is seeded once, when the generator is built at startup, and then
/// shared by every caller for the lifetime of the process. It is never
/// reseeded per call.
#[derive(Debug)]
pub struct RandomAliasGenerator {
    rng: Mutex<StdRng>,
}

impl RandomAliasGenerator {
    /// Creates a generator seeded from the operating system's entropy source.
    ///
    /// # Panics
    ///
    /// Panics if the OS random number generator is unavailable. This only
    /// happens at startup.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a deterministic generator. Intended for tests and tooling.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomAliasGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        // A panic while holding the lock cannot leave the RNG in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (&mut *rng)
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_generate_has_requested_length() {
        let generator = RandomAliasGenerator::new();

        assert_eq!(generator.generate(DEFAULT_ALIAS_LENGTH).len(), 6);
        assert_eq!(generator.generate(1).len(), 1);
        assert_eq!(generator.generate(32).len(), 32);
    }

    #[test]
    fn test_generate_uses_alphanumeric_alphabet() {
        let generator = RandomAliasGenerator::new();

        for _ in 0..200 {
            let alias = generator.generate(DEFAULT_ALIAS_LENGTH);
            assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_covers_all_character_classes() {
        let generator = RandomAliasGenerator::with_seed(7);
        let sample = generator.generate(10_000);

        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_digit()));

        let distinct: HashSet<char> = sample.chars().collect();
        assert_eq!(distinct.len(), 62);
    }

    #[test]
    fn test_generate_produces_unique_aliases() {
        let generator = RandomAliasGenerator::with_seed(2024);
        let mut aliases = HashSet::new();

        for _ in 0..1000 {
            aliases.insert(generator.generate(DEFAULT_ALIAS_LENGTH));
        }

        assert_eq!(aliases.len(), 1000);
    }

    #[test]
    fn test_seeded_generators_are_deterministic() {
        let a = RandomAliasGenerator::with_seed(42);
        let b = RandomAliasGenerator::with_seed(42);

        assert_eq!(a.generate(12), b.generate(12));
        assert_eq!(a.generate(12), b.generate(12));
    }

    #[test]
    fn test_consecutive_draws_advance_the_rng() {
        let generator = RandomAliasGenerator::with_seed(42);

        assert_ne!(generator.generate(16), generator.generate(16));
    }

    #[test]
    fn test_shared_across_threads() {
        let generator = Arc::new(RandomAliasGenerator::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = Arc::clone(&generator);
                std::thread::spawn(move || {
                    (0..100)
                        .map(|_| generator.generate(DEFAULT_ALIAS_LENGTH))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for alias in handle.join().unwrap() {
                assert_eq!(alias.len(), DEFAULT_ALIAS_LENGTH);
            }
        }
    }
}
