use crate::Randomizer;
use anyhow::Result;
use chrono::Utc;
use std::io::Write;

/// How many integers the demo prints.
pub const DRAWS: usize = 10;
/// Passed to `next_int` for every draw.
pub const DRAW_MAX: i64 = 100;

/// Milliseconds since the unix epoch, for seeding the demo.
pub fn seed_from_clock() -> i64 {
	Utc::now().timestamp_millis()
}

/// Writes `count` results of `next_int(max)`, one per line.
pub fn print_draws(rng: &mut Randomizer, count: usize, max: i64, mut out: impl Write) -> Result<()> {
	for _ in 0..count {
		writeln!(out, "{}", rng.next_int(max))?;
	}

	out.flush()?;

	Ok(())
}
