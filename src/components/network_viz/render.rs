use super::state::NetworkState;
use super::types::NodeKind;
use crate::components::canvas::{Scene, Shape};

const GRID_SPACING: f64 = 40.0;
const GRID_COLOR: &str = "rgba(59, 130, 246, 0.1)";
const EDGE_COLOR: &str = "rgba(59, 130, 246, 0.3)";
const PARTICLE_COLOR: &str = "#06b6d4";
const PARTICLE_RADIUS: f64 = 3.0;
const CURVE_MARGIN: f64 = 20.0;
const CURVE_STEP: f64 = 2.0;
const GLOW_ALPHA: f64 = 0.3;
const PULSE_ALPHA: f64 = 0.5;

/// A traffic route drawn as a wave across the canvas.
struct Route {
	base_y: f64,
	amplitude: f64,
	phase_scale: f64,
	frequency: f64,
	color: &'static str,
	wave: fn(f64) -> f64,
	dashed: bool,
}

const PRIMARY_ROUTE: Route = Route {
	base_y: 100.0,
	amplitude: 20.0,
	phase_scale: 100.0,
	frequency: 0.02,
	color: "#10b981",
	wave: f64::sin,
	dashed: false,
};

const ALTERNATIVE_ROUTE: Route = Route {
	base_y: 200.0,
	amplitude: 15.0,
	phase_scale: 80.0,
	frequency: 0.015,
	color: "#f59e0b",
	wave: f64::cos,
	dashed: true,
};

/// Lay out one complete frame for the current state.
pub fn build_frame(state: &NetworkState) -> Vec<Shape> {
	let mut frame = vec![Shape::Clear {
		width: state.width,
		height: state.height,
	}];
	push_grid(state, &mut frame);
	push_edges(state, &mut frame);
	push_routes(state, &mut frame);
	push_nodes(state, &mut frame);
	frame
}

fn push_grid(state: &NetworkState, out: &mut Vec<Shape>) {
	let line = |from, to| Shape::Line {
		from,
		to,
		color: GRID_COLOR,
		width: 1.0,
	};
	let mut x = 0.0;
	while x <= state.width {
		out.push(line((x, 0.0), (x, state.height)));
		x += GRID_SPACING;
	}
	let mut y = 0.0;
	while y <= state.height {
		out.push(line((0.0, y), (state.width, y)));
		y += GRID_SPACING;
	}
}

fn push_edges(state: &NetworkState, out: &mut Vec<Shape>) {
	let p = state.flow_progress();
	for node in &state.nodes {
		for target in node.connections.iter().filter_map(|id| state.node(id)) {
			let (start, end) = ((node.x, node.y), (target.x, target.y));
			out.push(Shape::Line {
				from: start,
				to: end,
				color: EDGE_COLOR,
				width: 2.0,
			});
			out.push(Shape::Disc {
				center: (
					start.0 + (end.0 - start.0) * p,
					start.1 + (end.1 - start.1) * p,
				),
				radius: PARTICLE_RADIUS,
				color: PARTICLE_COLOR,
				alpha: 1.0,
			});
		}
	}
}

fn push_routes(state: &NetworkState, out: &mut Vec<Shape>) {
	let phase = state.wave_phase();
	for route in [&PRIMARY_ROUTE, &ALTERNATIVE_ROUTE] {
		let offset = phase * route.phase_scale;
		let mut points = Vec::new();
		let mut x = CURVE_MARGIN;
		while x <= state.width - CURVE_MARGIN {
			let y = route.base_y + (route.wave)((x + offset) * route.frequency) * route.amplitude;
			points.push((x, y));
			x += CURVE_STEP;
		}
		out.push(Shape::Polyline {
			points,
			color: route.color,
			width: 3.0,
			dashed: route.dashed,
		});
	}
}

fn push_nodes(state: &NetworkState, out: &mut Vec<Shape>) {
	let phase = state.wave_phase();
	for node in &state.nodes {
		let style = node.status.style();
		let (center, radius) = ((node.x, node.y), node.radius());

		out.push(Shape::Disc {
			center,
			radius: radius + 4.0,
			color: style.color,
			alpha: GLOW_ALPHA,
		});
		out.push(Shape::Disc {
			center,
			radius,
			color: style.color,
			alpha: 1.0,
		});
		out.push(Shape::Ring {
			center,
			radius,
			color: "#ffffff",
			width: 2.0,
			alpha: 1.0,
		});
		if style.pulses {
			out.push(Shape::Ring {
				center,
				radius: radius + 6.0 + (phase * 2.0).sin() * 2.0,
				color: style.color,
				width: 2.0,
				alpha: PULSE_ALPHA,
			});
		}
		if node.kind == NodeKind::Intersection && node.traffic > 0 {
			out.push(Shape::Text {
				at: (node.x, node.y - radius - 8.0),
				text: node.traffic.to_string(),
				color: "#ffffff",
			});
		}
	}
}

impl Scene for NetworkState {
	fn shapes(&self) -> Vec<Shape> {
		build_frame(self)
	}

	fn tick(&mut self) {
		NetworkState::tick(self);
	}

	fn frame(&self) -> u64 {
		NetworkState::frame(self)
	}
}
