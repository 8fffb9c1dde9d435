// accessgen-core/src/domain/ports/person.rs

use rand::Rng;

/// Source of synthetic identity data (names, emails).
///
/// Implementations draw from the caller's RNG so a seeded run reproduces
/// the same people.
pub trait PersonSource {
    fn name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String;

    fn email<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String;
}
