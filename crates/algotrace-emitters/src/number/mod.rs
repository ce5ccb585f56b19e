//! Number-theory emitters.

mod gcd;
mod sieve;

pub use gcd::EuclideanGcd;
pub use sieve::SieveOfEratosthenes;
