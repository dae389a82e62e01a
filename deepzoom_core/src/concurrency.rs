//! Concurrency limit tuning for the tile worker pool.
//!
//! Tile encoding is CPU-bound, so the worker pool is sized to the CPU
//! count; more workers would only add context switching.

use num_cpus;

/// Bounded worker-pool limit for the per-level tile jobs.
#[derive(Debug, Clone, Copy)]
pub struct ConcurrencyLimits {
	/// Limit for CPU-bound work (resampling, tile encoding): 1x CPU count.
	pub cpu_bound: usize,
}

impl ConcurrencyLimits {
	/// Creates a limit with a custom value, clamped to at least 1.
	pub fn new(cpu_bound: usize) -> Self {
		Self {
			cpu_bound: cpu_bound.max(1),
		}
	}
}

impl Default for ConcurrencyLimits {
	fn default() -> Self {
		Self {
			cpu_bound: num_cpus::get(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_limit_follows_cpu_count() {
		let limits = ConcurrencyLimits::default();
		assert_eq!(limits.cpu_bound, num_cpus::get());
		assert!(limits.cpu_bound >= 1);
	}

	#[test]
	fn custom_limit_is_clamped() {
		assert_eq!(ConcurrencyLimits::new(0).cpu_bound, 1);
		assert_eq!(ConcurrencyLimits::new(8).cpu_bound, 8);
	}
}
