use anyhow::Result;
use randomizer::{
	Config, Randomizer,
	config::CONFIG_PATH,
	demo::{DRAW_MAX, DRAWS, print_draws, seed_from_clock},
	logging,
};
use std::io;
use tracing::info;

fn main() -> Result<()> {
	logging::init_logger()?;

	let result = run();

	if result.is_err() {
		// log lines leading up to the error
		if let Err(e) = logging::dump_logs(io::stderr()) {
			eprintln!("failed to write logs: {e}");
		}
	}

	result
}

fn run() -> Result<()> {
	let config = Config::load(CONFIG_PATH)?;

	let seed = match config.seed {
		Some(seed) => {
			info!(seed, "using seed from {CONFIG_PATH}");
			seed
		}
		None => {
			let seed = seed_from_clock();
			info!(seed, "seeded from the current time");
			seed
		}
	};

	let mut rng = Randomizer::new(seed);

	print_draws(&mut rng, DRAWS, DRAW_MAX, io::stdout().lock())
}
