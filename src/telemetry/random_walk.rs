use super::{CongestionLevel, TrafficSnapshot, TrafficSource};

/// Linear congruential generator shared by the mock feeds.
#[derive(Clone, Debug)]
pub(crate) struct Lcg(u64);

impl Lcg {
	pub(crate) fn new(seed: u64) -> Self {
		Self(seed)
	}

	/// Uniform in `[0, 1)`.
	pub(crate) fn next_unit(&mut self) -> f64 {
		self.0 = self
			.0
			.wrapping_add(1)
			.wrapping_mul(9301)
			.wrapping_add(49297)
			% 233280;
		self.0 as f64 / 233280.0
	}

	/// Uniform in `[-span, span)`.
	pub(crate) fn step(&mut self, span: f64) -> f64 {
		(self.next_unit() * 2.0 - 1.0) * span
	}
}

const MAX_VEHICLES: f64 = 5000.0;
const SPEED_RANGE: (f64, f64) = (5.0, 80.0);

/// Mock feed: every metric takes a bounded random step per snapshot.
///
/// Deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct RandomWalkSource {
	rng: Lcg,
	vehicles: f64,
	speed: f64,
	active: f64,
	max_intersections: u32,
}

impl RandomWalkSource {
	/// Start a walk from typical mid-day values.
	pub fn new(seed: u64, max_intersections: u32) -> Self {
		Self {
			rng: Lcg::new(seed),
			vehicles: 1250.0,
			speed: 42.0,
			active: max_intersections as f64 * 0.8,
			max_intersections,
		}
	}

	fn step(&mut self, span: f64) -> f64 {
		self.rng.step(span)
	}
}

impl Default for RandomWalkSource {
	fn default() -> Self {
		Self::new(42, 24)
	}
}

impl TrafficSource for RandomWalkSource {
	fn next_snapshot(&mut self) -> TrafficSnapshot {
		self.vehicles = (self.vehicles + self.step(60.0)).clamp(0.0, MAX_VEHICLES);
		self.speed = (self.speed + self.step(4.0)).clamp(SPEED_RANGE.0, SPEED_RANGE.1);
		self.active = (self.active + self.step(1.5)).clamp(0.0, self.max_intersections as f64);

		TrafficSnapshot {
			vehicle_count: self.vehicles.round() as u32,
			average_speed: (self.speed * 10.0).round() / 10.0,
			congestion: CongestionLevel::from_speed(self.speed),
			active_intersections: self.active.round() as u32,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lcg_stays_in_unit_interval() {
		let mut rng = Lcg::new(u64::MAX);
		for _ in 0..1_000 {
			assert!((0.0..1.0).contains(&rng.next_unit()));
		}
	}

	#[test]
	fn same_seed_same_walk() {
		let (mut a, mut b) = (RandomWalkSource::new(7, 12), RandomWalkSource::new(7, 12));
		for _ in 0..20 {
			assert_eq!(a.next_snapshot(), b.next_snapshot());
		}
	}

	#[test]
	fn walk_stays_in_bounds() {
		let mut source = RandomWalkSource::new(3, 10);
		for _ in 0..5_000 {
			let snap = source.next_snapshot();
			assert!(snap.vehicle_count <= 5000);
			assert!((5.0..=80.0).contains(&snap.average_speed));
			assert!(snap.active_intersections <= 10);
		}
	}

	#[test]
	fn congestion_follows_speed() {
		let mut source = RandomWalkSource::default();
		for _ in 0..200 {
			let snap = source.next_snapshot();
			let expected = CongestionLevel::from_speed(snap.average_speed);
			// Rounding to one decimal can only move a value across a threshold
			// when it sits within 0.05 of it.
			let near = |threshold: f64| (snap.average_speed - threshold).abs() <= 0.05;
			if !near(15.0) && !near(35.0) {
				assert_eq!(snap.congestion, expected);
			}
		}
	}

	#[test]
	fn steps_are_bounded() {
		let mut source = RandomWalkSource::new(11, 24);
		let mut prev = source.next_snapshot();
		for _ in 0..100 {
			let next = source.next_snapshot();
			assert!(prev.vehicle_count.abs_diff(next.vehicle_count) <= 61);
			prev = next;
		}
	}
}
