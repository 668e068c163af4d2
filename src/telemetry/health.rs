use std::fmt;

use super::random_walk::Lcg;

/// Grade of a single platform metric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum HealthStatus {
	/// Within normal bounds.
	#[default]
	Healthy,
	/// Elevated, needs watching.
	Degraded,
	/// Past the alert threshold.
	Critical,
}

impl HealthStatus {
	/// Grade `value` against `(degraded, critical)` thresholds.
	pub fn grade(value: f64, (degraded, critical): (f64, f64)) -> Self {
		if value >= critical {
			HealthStatus::Critical
		} else if value >= degraded {
			HealthStatus::Degraded
		} else {
			HealthStatus::Healthy
		}
	}

	/// Indicator color for this grade.
	pub fn color(self) -> &'static str {
		match self {
			HealthStatus::Healthy => "#10b981",
			HealthStatus::Degraded => "#f59e0b",
			HealthStatus::Critical => "#ef4444",
		}
	}
}

impl fmt::Display for HealthStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			HealthStatus::Healthy => "healthy",
			HealthStatus::Degraded => "degraded",
			HealthStatus::Critical => "critical",
		})
	}
}

/// CPU and memory thresholds, in percent.
pub const USAGE_THRESHOLDS: (f64, f64) = (70.0, 85.0);
/// Network latency thresholds, in milliseconds.
pub const LATENCY_THRESHOLDS: (f64, f64) = (100.0, 200.0);

/// Platform resource readings at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct HealthSnapshot {
	/// CPU load in percent.
	pub cpu_percent: f64,
	/// Memory in use in percent.
	pub memory_percent: f64,
	/// Round-trip latency in milliseconds.
	pub latency_ms: f64,
	/// Availability over the trailing window, in percent.
	pub uptime_percent: f64,
}

impl Default for HealthSnapshot {
	fn default() -> Self {
		Self {
			cpu_percent: 35.0,
			memory_percent: 55.0,
			latency_ms: 40.0,
			uptime_percent: 99.9,
		}
	}
}

impl HealthSnapshot {
	/// Each graded metric with its label, reading and status.
	pub fn readings(&self) -> [(&'static str, String, HealthStatus); 3] {
		[
			(
				"CPU",
				format!("{:.0}%", self.cpu_percent),
				HealthStatus::grade(self.cpu_percent, USAGE_THRESHOLDS),
			),
			(
				"Memory",
				format!("{:.0}%", self.memory_percent),
				HealthStatus::grade(self.memory_percent, USAGE_THRESHOLDS),
			),
			(
				"Latency",
				format!("{:.0} ms", self.latency_ms),
				HealthStatus::grade(self.latency_ms, LATENCY_THRESHOLDS),
			),
		]
	}

	/// Worst grade across all metrics.
	pub fn overall(&self) -> HealthStatus {
		self.readings()
			.into_iter()
			.map(|(_, _, status)| status)
			.max()
			.unwrap_or_default()
	}
}

/// Anything that can hand out the next health reading on demand.
pub trait HealthSource {
	/// Produce the reading for the current instant.
	fn next_snapshot(&mut self) -> HealthSnapshot;
}

/// Mock health feed, a bounded random walk per metric.
#[derive(Clone, Debug)]
pub struct RandomWalkHealth {
	rng: Lcg,
	current: HealthSnapshot,
}

impl RandomWalkHealth {
	/// Start from nominal readings.
	pub fn new(seed: u64) -> Self {
		Self {
			rng: Lcg::new(seed),
			current: HealthSnapshot::default(),
		}
	}
}

impl HealthSource for RandomWalkHealth {
	fn next_snapshot(&mut self) -> HealthSnapshot {
		let c = &mut self.current;
		c.cpu_percent = (c.cpu_percent + self.rng.step(6.0)).clamp(5.0, 99.0);
		c.memory_percent = (c.memory_percent + self.rng.step(3.0)).clamp(20.0, 98.0);
		c.latency_ms = (c.latency_ms + self.rng.step(15.0)).clamp(5.0, 400.0);
		c.uptime_percent = (c.uptime_percent + self.rng.step(0.02)).clamp(99.0, 100.0);
		c.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn grading_is_inclusive_at_thresholds() {
		assert_eq!(HealthStatus::grade(69.9, USAGE_THRESHOLDS), HealthStatus::Healthy);
		assert_eq!(HealthStatus::grade(70.0, USAGE_THRESHOLDS), HealthStatus::Degraded);
		assert_eq!(HealthStatus::grade(85.0, USAGE_THRESHOLDS), HealthStatus::Critical);
		assert_eq!(HealthStatus::grade(250.0, LATENCY_THRESHOLDS), HealthStatus::Critical);
	}

	#[test]
	fn overall_is_worst_reading() {
		let mut snap = HealthSnapshot::default();
		assert_eq!(snap.overall(), HealthStatus::Healthy);
		snap.latency_ms = 150.0;
		assert_eq!(snap.overall(), HealthStatus::Degraded);
		snap.cpu_percent = 92.0;
		assert_eq!(snap.overall(), HealthStatus::Critical);
	}

	#[test]
	fn readings_are_formatted() {
		let labels: Vec<_> = HealthSnapshot::default()
			.readings()
			.into_iter()
			.map(|(label, value, _)| format!("{label} {value}"))
			.collect();
		assert_eq!(labels, ["CPU 35%", "Memory 55%", "Latency 40 ms"]);
	}

	#[test]
	fn health_walk_stays_in_bounds() {
		let mut source = RandomWalkHealth::new(9);
		for _ in 0..5_000 {
			let snap = source.next_snapshot();
			assert!((5.0..=99.0).contains(&snap.cpu_percent));
			assert!((20.0..=98.0).contains(&snap.memory_percent));
			assert!((5.0..=400.0).contains(&snap.latency_ms));
			assert!((99.0..=100.0).contains(&snap.uptime_percent));
		}
	}
}
