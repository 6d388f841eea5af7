// Constants from "Numerical Recipes in C".
pub const MODULUS: i64 = 233280;
pub const MULTIPLIER: i64 = 9301;
pub const INCREMENT: i64 = 49297;

/// A linear congruential pseudo-random number generator.
///
/// Every call advances the state with `seed = (seed * MULTIPLIER + INCREMENT) mod MODULUS`.
/// The same initial seed always reproduces the same sequence.
///
/// This is not a source of good randomness, let alone a cryptographic one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Randomizer {
	seed: i64,
}

impl Randomizer {
	/// Creates a generator from an arbitrary initial seed.
	///
	/// Any value is accepted, negative ones included. The first call to
	/// [`Randomizer::next_fraction`] brings the state into `[0, MODULUS)`.
	pub fn new(seed: i64) -> Self {
		Self { seed }
	}

	/// The current state.
	pub fn seed(&self) -> i64 {
		self.seed
	}

	/// Advances the state and returns a value in `[0, 1)`.
	pub fn next_fraction(&mut self) -> f64 {
		// i128 so that no i64 seed can overflow the product
		let next = (self.seed as i128 * MULTIPLIER as i128 + INCREMENT as i128)
			.rem_euclid(MODULUS as i128);

		// always fits, 0 <= next < MODULUS
		self.seed = next as i64;

		self.seed as f64 / MODULUS as f64
	}

	/// Advances the state and returns an integer in `[0, max]`.
	///
	/// The fraction is scaled by `max` and rounded to the nearest integer,
	/// halfway cases away from zero. A negative `max` gives a result in `[max, 0]`.
	pub fn next_int(&mut self, max: i64) -> i64 {
		(max as f64 * self.next_fraction()).round() as i64
	}
}

impl Default for Randomizer {
	fn default() -> Self {
		Self::new(1)
	}
}
