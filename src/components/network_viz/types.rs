use std::fmt;
use std::str::FromStr;

/// What a node on the canvas stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	/// A road intersection.
	Intersection,
	/// A vehicle. Declared for completeness, the seed data has none.
	Vehicle,
	/// A roadside sensor.
	Sensor,
	/// The central coordination hub.
	Hub,
}

impl NodeKind {
	/// Disc radius in canvas pixels. Also the hit radius for selection.
	pub fn radius(self) -> f64 {
		match self {
			NodeKind::Hub => 12.0,
			NodeKind::Sensor => 5.0,
			_ => 8.0,
		}
	}

	/// Lower-case tag shown in the detail panel.
	pub fn as_str(self) -> &'static str {
		match self {
			NodeKind::Intersection => "intersection",
			NodeKind::Vehicle => "vehicle",
			NodeKind::Sensor => "sensor",
			NodeKind::Hub => "hub",
		}
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Operational status of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStatus {
	/// Flowing freely.
	Optimal,
	/// Backed up.
	Congested,
	/// Degraded.
	Warning,
	/// Not reporting.
	Offline,
	/// Any tag this build does not recognise.
	Unknown,
}

/// Visual treatment of a status, shared by the canvas and the badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusStyle {
	/// CSS hex color.
	pub color: &'static str,
	/// Whether the node gets the animated outer ring.
	pub pulses: bool,
}

const STATUS_STYLES: [(NodeStatus, StatusStyle); 5] = [
	(NodeStatus::Optimal, StatusStyle { color: "#10b981", pulses: true }),
	(NodeStatus::Congested, StatusStyle { color: "#ef4444", pulses: true }),
	(NodeStatus::Warning, StatusStyle { color: "#f59e0b", pulses: false }),
	(NodeStatus::Offline, StatusStyle { color: "#6b7280", pulses: false }),
	(NodeStatus::Unknown, StatusStyle { color: "#06b6d4", pulses: false }),
];

impl NodeStatus {
	/// Every status in legend order.
	pub const ALL: [NodeStatus; 4] = [
		NodeStatus::Optimal,
		NodeStatus::Congested,
		NodeStatus::Warning,
		NodeStatus::Offline,
	];

	/// Look up the color and pulse behaviour for this status.
	pub fn style(self) -> StatusStyle {
		STATUS_STYLES
			.iter()
			.find(|(status, _)| *status == self)
			.map(|(_, style)| *style)
			.unwrap_or(STATUS_STYLES[4].1)
	}

	/// Lower-case tag as used by the telemetry feed.
	pub fn as_str(self) -> &'static str {
		match self {
			NodeStatus::Optimal => "optimal",
			NodeStatus::Congested => "congested",
			NodeStatus::Warning => "warning",
			NodeStatus::Offline => "offline",
			NodeStatus::Unknown => "unknown",
		}
	}
}

impl FromStr for NodeStatus {
	type Err = std::convert::Infallible;

	/// Unrecognised tags map to [`NodeStatus::Unknown`] rather than failing.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s {
			"optimal" => NodeStatus::Optimal,
			"congested" => NodeStatus::Congested,
			"warning" => NodeStatus::Warning,
			"offline" => NodeStatus::Offline,
			_ => NodeStatus::Unknown,
		})
	}
}

impl fmt::Display for NodeStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One rendered entity in the traffic network.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkNode {
	pub id: String,
	pub x: f64,
	pub y: f64,
	pub kind: NodeKind,
	pub status: NodeStatus,
	/// Ids this node draws an edge towards. Unknown ids are skipped.
	pub connections: Vec<String>,
	/// Vehicles per hour. Display only.
	pub traffic: u32,
	pub name: String,
}

impl NetworkNode {
	fn seed(
		id: &str,
		(x, y): (f64, f64),
		kind: NodeKind,
		status: NodeStatus,
		connections: &[&str],
		traffic: u32,
		name: &str,
	) -> Self {
		Self {
			id: id.into(),
			x,
			y,
			kind,
			status,
			connections: connections.iter().map(|c| (*c).into()).collect(),
			traffic,
			name: name.into(),
		}
	}

	pub fn radius(&self) -> f64 {
		self.kind.radius()
	}

	pub fn distance_to(&self, x: f64, y: f64) -> f64 {
		(self.x - x).hypot(self.y - y)
	}
}

/// The fixed network shown on mount: one hub, three intersections, two sensors.
pub fn seed_nodes() -> Vec<NetworkNode> {
	use NodeKind::*;
	use NodeStatus::*;

	vec![
		NetworkNode::seed(
			"hub-1",
			(200.0, 150.0),
			Hub,
			Optimal,
			&["int-1", "int-2", "int-3"],
			95,
			"Central Hub",
		),
		NetworkNode::seed(
			"int-1",
			(100.0, 80.0),
			Intersection,
			Optimal,
			&["sensor-1"],
			78,
			"Main St & 1st Ave",
		),
		NetworkNode::seed(
			"int-2",
			(300.0, 80.0),
			Intersection,
			Congested,
			&["sensor-2"],
			92,
			"Broadway & 5th",
		),
		NetworkNode::seed(
			"int-3",
			(200.0, 240.0),
			Intersection,
			Warning,
			&[],
			65,
			"Park Ave & Oak",
		),
		NetworkNode::seed("sensor-1", (60.0, 200.0), Sensor, Optimal, &[], 45, "Sensor Alpha"),
		NetworkNode::seed("sensor-2", (340.0, 200.0), Sensor, Offline, &[], 0, "Sensor Beta"),
	]
}
