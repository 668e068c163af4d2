use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use leptos::prelude::*;

use crate::components::canvas::{Scene, Shape, use_render_loop};

const CAPACITY: usize = 60;
const PADDING: f64 = 16.0;
const GRID_SPACING: f64 = 40.0;
const GRID_COLOR: &str = "rgba(59, 130, 246, 0.1)";
const LINE_COLOR: &str = "#3b82f6";
const MARKER_COLOR: &str = "#06b6d4";

/// Rolling window of samples drawn as a line chart.
#[derive(Clone, Debug)]
pub struct ChartState {
	samples: VecDeque<f64>,
	width: f64,
	height: f64,
	frame: u64,
}

impl ChartState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			samples: VecDeque::with_capacity(CAPACITY),
			width,
			height,
			frame: 0,
		}
	}

	/// Append a sample, evicting the oldest once the window is full.
	pub fn push(&mut self, sample: f64) {
		if self.samples.len() == CAPACITY {
			self.samples.pop_front();
		}
		self.samples.push_back(sample.max(0.0));
	}

	pub fn len(&self) -> usize {
		self.samples.len()
	}

	/// Canvas positions of the samples, oldest at the left edge.
	///
	/// The tallest sample touches the top padding; zero sits on the bottom.
	pub fn points(&self) -> Vec<(f64, f64)> {
		let peak = self.samples.iter().copied().fold(0.0, f64::max).max(1.0);
		let step = (self.width - 2.0 * PADDING) / (CAPACITY - 1) as f64;
		let span = self.height - 2.0 * PADDING;
		self.samples
			.iter()
			.enumerate()
			.map(|(i, v)| {
				(
					PADDING + i as f64 * step,
					self.height - PADDING - v / peak * span,
				)
			})
			.collect()
	}
}

impl Scene for ChartState {
	fn shapes(&self) -> Vec<Shape> {
		let mut out = vec![Shape::Clear {
			width: self.width,
			height: self.height,
		}];
		let mut y = 0.0;
		while y <= self.height {
			out.push(Shape::Line {
				from: (0.0, y),
				to: (self.width, y),
				color: GRID_COLOR,
				width: 1.0,
			});
			y += GRID_SPACING;
		}

		let points = self.points();
		if let Some(&last) = points.last() {
			out.push(Shape::Polyline {
				points,
				color: LINE_COLOR,
				width: 2.0,
				dashed: false,
			});
			out.push(Shape::Ring {
				center: last,
				radius: 6.0 + (self.frame as f64 * 0.1).sin() * 2.0,
				color: MARKER_COLOR,
				width: 2.0,
				alpha: 0.5,
			});
			out.push(Shape::Disc {
				center: last,
				radius: 3.0,
				color: MARKER_COLOR,
				alpha: 1.0,
			});
		}
		out
	}

	fn tick(&mut self) {
		self.frame = self.frame.wrapping_add(1);
	}

	fn frame(&self) -> u64 {
		self.frame
	}
}

/// Live line chart of `data`, sampled whenever the signal changes.
#[component]
pub fn RealtimeChart(
	title: &'static str,
	#[prop(into)] data: Signal<f64>,
	#[prop(default = 400.0)] width: f64,
	#[prop(default = 160.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = Rc::new(RefCell::new(ChartState::new(width, height)));

	let state_feed = state.clone();
	Effect::new(move |_| {
		let sample = data.get();
		state_feed.borrow_mut().push(sample);
	});
	use_render_loop(canvas_ref, state, width, height);

	view! {
		<section class="realtime-chart">
			<h2>{title}</h2>
			<canvas node_ref=canvas_ref class="chart-canvas" style="display: block;" />
			<span class="chart-latest">{move || format!("{:.0}", data.get())}</span>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn window_keeps_latest_samples() {
		let mut chart = ChartState::new(400.0, 160.0);
		for i in 0..(CAPACITY + 5) {
			chart.push(i as f64);
		}
		assert_eq!(chart.len(), CAPACITY);
		assert_eq!(chart.samples.front(), Some(&5.0));
	}

	#[test]
	fn points_span_padded_area() {
		let mut chart = ChartState::new(400.0, 160.0);
		for v in [0.0, 50.0, 100.0] {
			chart.push(v);
		}
		let points = chart.points();
		assert_eq!(points[0], (16.0, 144.0));
		assert_eq!(points[2].1, 16.0);
		assert!(points.iter().all(|(x, _)| (16.0..=384.0).contains(x)));
	}

	#[test]
	fn negative_samples_clamp_to_baseline() {
		let mut chart = ChartState::new(400.0, 160.0);
		chart.push(-20.0);
		assert_eq!(chart.points(), [(16.0, 144.0)]);
	}

	#[test]
	fn empty_chart_draws_only_grid() {
		let chart = ChartState::new(400.0, 160.0);
		let shapes = chart.shapes();
		assert!(matches!(shapes[0], Shape::Clear { .. }));
		assert!(shapes[1..].iter().all(|s| matches!(s, Shape::Line { .. })));
		assert_eq!(shapes.len(), 1 + 5);
	}

	#[test]
	fn marker_follows_latest_sample() {
		let mut chart = ChartState::new(400.0, 160.0);
		chart.push(10.0);
		chart.push(20.0);
		chart.tick();
		let last = *chart.points().last().unwrap();
		let marker = chart.shapes().into_iter().find_map(|s| match s {
			Shape::Disc { center, .. } => Some(center),
			_ => None,
		});
		assert_eq!(marker, Some(last));
		assert_eq!(chart.frame(), 1);
	}
}
