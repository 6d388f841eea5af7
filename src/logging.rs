use std::{
	collections::VecDeque,
	io::Write,
	sync::{Mutex, MutexGuard, PoisonError},
};

use anyhow::Result;
use tracing_subscriber::{FmtSubscriber, fmt::MakeWriter};

/// How many log lines are kept for dumping on error
pub const MAX_LOG_LINES: usize = 1000;

static LOG_BUFFER: LogBuffer = LogBuffer::new();

/// Keeps the latest log lines in memory, so stdout is left to the demo output.
/// Newest line is at the front.
pub struct LogBuffer {
	buffer: Mutex<VecDeque<Vec<u8>>>,
}

pub struct LogWriter<'a> {
	lock: MutexGuard<'a, VecDeque<Vec<u8>>>,
}

impl LogBuffer {
	pub const fn new() -> Self {
		Self {
			buffer: Mutex::new(VecDeque::new()),
		}
	}

	fn lock(&self) -> MutexGuard<'_, VecDeque<Vec<u8>>> {
		self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
	}

	/// Writes all saved lines, oldest first.
	pub fn dump(&self, mut out: impl Write) -> std::io::Result<()> {
		let buffer = self.lock();

		for line in buffer.iter().rev() {
			out.write_all(line)?;
		}

		out.flush()
	}
}

impl Default for LogBuffer {
	fn default() -> Self {
		Self::new()
	}
}

impl<'a> Write for LogWriter<'a> {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		match self.lock.front_mut() {
			Some(log_line) => log_line.write(buf),
			None => Ok(buf.len()),
		}
	}

	fn flush(&mut self) -> std::io::Result<()> {
		Ok(())
	}
}

impl<'a> MakeWriter<'a> for &'static LogBuffer {
	type Writer = LogWriter<'a>;

	fn make_writer(&'a self) -> Self::Writer {
		let mut buffer = self.lock();

		// remove oldest log line if we're at limit
		if buffer.len() == MAX_LOG_LINES {
			buffer.pop_back();
		}

		buffer.push_front(Vec::new());

		LogWriter { lock: buffer }
	}
}

pub fn init_logger() -> Result<()> {
	FmtSubscriber::builder()
		.with_env_filter("randomizer=trace")
		.json()
		.with_writer(&LOG_BUFFER)
		.try_init()
		.map_err(anyhow::Error::msg)?;

	Ok(())
}

/// Writes the saved log lines to `out`, oldest first.
pub fn dump_logs(out: impl Write) -> std::io::Result<()> {
	LOG_BUFFER.dump(out)
}
