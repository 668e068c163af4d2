use leptos::prelude::*;

use crate::components::network_viz::NetworkVisualization;
use crate::components::realtime_chart::RealtimeChart;
use crate::components::system_health::SystemHealth;
use crate::components::traffic_metrics::TrafficMetrics;
use crate::telemetry::{
	CHART_PERIOD_MS, HEALTH_PERIOD_MS, RandomWalkHealth, RandomWalkSource, TRAFFIC_PERIOD_MS,
	use_health_feed, use_traffic_feed,
};

/// Seeds for the mock feeds (deterministic for consistency).
const FEED_SEED: u64 = 42;
const HEALTH_SEED: u64 = 7;
const CHART_SEED: u64 = 1337;
const MONITORED_INTERSECTIONS: u32 = 24;

/// Traffic dashboard. Each panel polls its own source on its own timer.
#[component]
pub fn Dashboard() -> impl IntoView {
	let snapshot = use_traffic_feed(
		RandomWalkSource::new(FEED_SEED, MONITORED_INTERSECTIONS),
		TRAFFIC_PERIOD_MS,
	);
	let health = use_health_feed(RandomWalkHealth::new(HEALTH_SEED), HEALTH_PERIOD_MS);
	let throughput = use_traffic_feed(
		RandomWalkSource::new(CHART_SEED, MONITORED_INTERSECTIONS),
		CHART_PERIOD_MS,
	);
	let vehicles = Signal::derive(move || throughput.get().vehicle_count as f64);

	view! {
		<div class="dashboard">
			<div class="dashboard-header">
				<h1>"Traffic Network"</h1>
				<p class="subtitle">"Click a node to inspect it."</p>
			</div>
			<TrafficMetrics data=snapshot />
			<SystemHealth data=health />
			<RealtimeChart title="Vehicles (live)" data=vehicles />
			<NetworkVisualization data=snapshot />
		</div>
	}
}
