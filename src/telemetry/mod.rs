//! Traffic snapshots and the sources that produce them.
//!
//! Panels pull snapshots through [`TrafficSource`] or [`HealthSource`], each
//! on its own timer, so a live feed can replace the random walks without
//! touching any view.

use std::cell::RefCell;
use std::fmt;
use std::time::Duration;

use leptos::prelude::*;
use log::{debug, warn};

mod health;
mod random_walk;

pub use health::{HealthSnapshot, HealthSource, HealthStatus, RandomWalkHealth};
pub use random_walk::RandomWalkSource;

/// Coarse congestion grade for the whole network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CongestionLevel {
	/// Traffic moves at or above 35 km/h.
	#[default]
	Low,
	/// Average speed between 15 and 35 km/h.
	Moderate,
	/// Average speed under 15 km/h.
	High,
}

impl CongestionLevel {
	/// Grade an average speed in km/h.
	pub fn from_speed(speed: f64) -> Self {
		if speed < 15.0 {
			CongestionLevel::High
		} else if speed < 35.0 {
			CongestionLevel::Moderate
		} else {
			CongestionLevel::Low
		}
	}

	/// Badge color for this grade.
	pub fn color(self) -> &'static str {
		match self {
			CongestionLevel::Low => "#10b981",
			CongestionLevel::Moderate => "#f59e0b",
			CongestionLevel::High => "#ef4444",
		}
	}
}

impl fmt::Display for CongestionLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			CongestionLevel::Low => "low",
			CongestionLevel::Moderate => "moderate",
			CongestionLevel::High => "high",
		})
	}
}

/// Aggregate state of the network at one instant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrafficSnapshot {
	/// Vehicles currently tracked.
	pub vehicle_count: u32,
	/// Mean speed in km/h.
	pub average_speed: f64,
	/// Grade derived from `average_speed`.
	pub congestion: CongestionLevel,
	/// Intersections currently reporting.
	pub active_intersections: u32,
}

/// Anything that can hand out the next snapshot on demand.
pub trait TrafficSource {
	/// Produce the snapshot for the current instant.
	fn next_snapshot(&mut self) -> TrafficSnapshot;
}

/// Polling period of the traffic metrics feed.
pub const TRAFFIC_PERIOD_MS: u64 = 2000;
/// Polling period of the system health feed.
pub const HEALTH_PERIOD_MS: u64 = 3000;
/// Sampling period of the realtime chart.
pub const CHART_PERIOD_MS: u64 = 1000;

/// Call `produce` every `period_ms` milliseconds and expose its latest value.
///
/// The timer is cleared when the calling owner is disposed.
fn use_polled<T, F>(period_ms: u64, mut produce: F) -> ReadSignal<T>
where
	T: Send + Sync + 'static,
	F: FnMut() -> T + 'static,
{
	let (latest, set_latest) = signal(produce());
	let produce = RefCell::new(produce);
	let tick = move || {
		let next = (*produce.borrow_mut())();
		set_latest.set(next);
	};

	match set_interval_with_handle(tick, Duration::from_millis(period_ms)) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => warn!("feed timer unavailable: {err:?}"),
	}
	latest
}

/// Poll a traffic source on its own timer.
pub fn use_traffic_feed<S>(mut source: S, period_ms: u64) -> ReadSignal<TrafficSnapshot>
where
	S: TrafficSource + 'static,
{
	use_polled(period_ms, move || {
		let next = source.next_snapshot();
		debug!(
			"traffic snapshot: {} vehicles, {}",
			next.vehicle_count, next.congestion
		);
		next
	})
}

/// Poll a health source on its own timer.
pub fn use_health_feed<S>(mut source: S, period_ms: u64) -> ReadSignal<HealthSnapshot>
where
	S: HealthSource + 'static,
{
	use_polled(period_ms, move || {
		let next = source.next_snapshot();
		debug!("health snapshot: {}", next.overall());
		next
	})
}
