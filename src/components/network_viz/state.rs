use super::types::{NetworkNode, seed_nodes};

/// Fraction of an edge a flow particle covers per frame.
pub const FLOW_SPEED: f64 = 0.02;
/// Phase advance per frame shared by the route curves and the pulse rings.
pub const WAVE_SPEED: f64 = 0.03;

/// Particle progress along every edge at `frame`, in `[0, 1)`.
pub fn flow_progress(frame: u64) -> f64 {
	(frame as f64 * FLOW_SPEED).rem_euclid(1.0)
}

/// Decorative phase at `frame`.
pub fn wave_phase(frame: u64) -> f64 {
	frame as f64 * WAVE_SPEED
}

/// First node in list order whose disc contains `(x, y)`.
pub fn hit_test(nodes: &[NetworkNode], x: f64, y: f64) -> Option<usize> {
	nodes.iter().position(|node| node.distance_to(x, y) <= node.radius())
}

/// Everything the render loop reads and writes.
///
/// The frame counter only moves inside [`NetworkState::tick`].
#[derive(Clone, Debug)]
pub struct NetworkState {
	pub nodes: Vec<NetworkNode>,
	pub width: f64,
	pub height: f64,
	frame: u64,
	selected: Option<usize>,
}

impl NetworkState {
	pub fn new(width: f64, height: f64) -> Self {
		Self::with_nodes(seed_nodes(), width, height)
	}

	pub fn with_nodes(nodes: Vec<NetworkNode>, width: f64, height: f64) -> Self {
		Self {
			nodes,
			width,
			height,
			frame: 0,
			selected: None,
		}
	}

	pub fn frame(&self) -> u64 {
		self.frame
	}

	pub fn tick(&mut self) {
		self.frame = self.frame.wrapping_add(1);
	}

	pub fn flow_progress(&self) -> f64 {
		flow_progress(self.frame)
	}

	pub fn wave_phase(&self) -> f64 {
		wave_phase(self.frame)
	}

	pub fn node(&self, id: &str) -> Option<&NetworkNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		hit_test(&self.nodes, x, y)
	}

	/// Hit-test a click and replace the selection with the result.
	pub fn select_at(&mut self, x: f64, y: f64) -> Option<&NetworkNode> {
		self.selected = self.node_at_position(x, y);
		self.selected()
	}

	pub fn selected(&self) -> Option<&NetworkNode> {
		self.selected.and_then(|idx| self.nodes.get(idx))
	}

	/// Edges as they are drawn: one per listed id that resolves.
	pub fn edge_count(&self) -> usize {
		self.nodes
			.iter()
			.flat_map(|n| &n.connections)
			.filter(|id| self.node(id).is_some())
			.count()
	}

	#[cfg(test)]
	pub(crate) fn set_frame(&mut self, frame: u64) {
		self.frame = frame;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_viz::types::{NodeKind, NodeStatus};

	fn node(id: &str, x: f64, y: f64, kind: NodeKind) -> NetworkNode {
		NetworkNode {
			id: id.into(),
			x,
			y,
			kind,
			status: NodeStatus::Optimal,
			connections: vec![],
			traffic: 0,
			name: id.into(),
		}
	}

	#[test]
	fn flow_progress_stays_in_unit_interval() {
		for frame in (0..10_000).chain([u32::MAX as u64, u64::MAX / 3, u64::MAX]) {
			let p = flow_progress(frame);
			assert!((0.0..1.0).contains(&p), "frame {frame} gave {p}");
		}
	}

	#[test]
	fn flow_progress_resets_every_fifty_frames() {
		assert_eq!(flow_progress(0), 0.0);
		assert_eq!(flow_progress(25), 0.5);
		assert_eq!(flow_progress(50), 0.0);
	}

	#[test]
	fn tick_advances_by_one() {
		let mut state = NetworkState::new(400.0, 300.0);
		assert_eq!(state.frame(), 0);
		state.tick();
		state.tick();
		assert_eq!(state.frame(), 2);
		assert!((state.wave_phase() - 0.06).abs() < 1e-12);
	}

	#[test]
	fn click_on_hub_selects_it() {
		let mut state = NetworkState::new(400.0, 300.0);
		let hub = state.select_at(200.0, 150.0).cloned().unwrap();
		assert_eq!(hub.name, "Central Hub");
		assert_eq!(hub.status, NodeStatus::Optimal);
		assert_eq!(hub.traffic, 95);
		assert_eq!(hub.connections.len(), 3);
	}

	#[test]
	fn click_far_away_selects_nothing() {
		let mut state = NetworkState::new(400.0, 300.0);
		assert!(state.select_at(0.0, 0.0).is_none());
	}

	#[test]
	fn selection_clears_on_empty_click() {
		let mut state = NetworkState::new(400.0, 300.0);
		assert!(state.select_at(100.0, 80.0).is_some());
		assert!(state.select_at(390.0, 10.0).is_none());
		assert!(state.selected().is_none());
	}

	#[test]
	fn hit_radius_is_inclusive_and_per_kind() {
		let nodes = vec![node("s", 50.0, 50.0, NodeKind::Sensor)];
		assert_eq!(hit_test(&nodes, 55.0, 50.0), Some(0));
		assert_eq!(hit_test(&nodes, 55.1, 50.0), None);
		assert_eq!(hit_test(&nodes, 53.0, 54.0), Some(0));
	}

	#[test]
	fn overlapping_nodes_pick_first_in_list() {
		let nodes = vec![
			node("a", 10.0, 10.0, NodeKind::Intersection),
			node("b", 14.0, 10.0, NodeKind::Hub),
		];
		assert_eq!(hit_test(&nodes, 12.0, 10.0), Some(0));
		assert_eq!(hit_test(&nodes, 24.0, 10.0), Some(1));
	}

	#[test]
	fn hit_test_is_repeatable() {
		let state = NetworkState::new(400.0, 300.0);
		for (x, y) in [(200.0, 150.0), (0.0, 0.0), (302.0, 83.0), (61.0, 199.0)] {
			assert_eq!(state.node_at_position(x, y), state.node_at_position(x, y));
		}
	}

	#[test]
	fn edge_count_skips_dangling_ids() {
		let mut nodes = vec![
			node("a", 0.0, 0.0, NodeKind::Hub),
			node("b", 50.0, 0.0, NodeKind::Sensor),
		];
		nodes[0].connections = vec!["b".into(), "ghost".into()];
		let state = NetworkState::with_nodes(nodes, 100.0, 100.0);
		assert_eq!(state.edge_count(), 1);
		assert_eq!(NetworkState::new(400.0, 300.0).edge_count(), 5);
	}
}
