use leptos::prelude::*;

use crate::telemetry::TrafficSnapshot;

/// Title, value and unit for each card, in display order.
pub fn metric_rows(snapshot: &TrafficSnapshot) -> [(&'static str, String, &'static str); 3] {
	[
		("Active Vehicles", snapshot.vehicle_count.to_string(), "vehicles"),
		("Average Speed", format!("{:.1}", snapshot.average_speed), "km/h"),
		(
			"Active Intersections",
			snapshot.active_intersections.to_string(),
			"online",
		),
	]
}

/// A single headline number.
#[component]
pub fn MetricCard(
	title: &'static str,
	#[prop(into)] value: Signal<String>,
	unit: &'static str,
) -> impl IntoView {
	view! {
		<div class="metric-card">
			<span class="metric-title">{title}</span>
			<span class="metric-value">{move || value.get()}</span>
			<span class="metric-unit">{unit}</span>
		</div>
	}
}

/// Headline metrics for the latest snapshot.
#[component]
pub fn TrafficMetrics(#[prop(into)] data: Signal<TrafficSnapshot>) -> impl IntoView {
	let cards = (0..3)
		.map(|i| {
			let (title, _, unit) = data.with_untracked(|s| metric_rows(s)[i].clone());
			let value = Signal::derive(move || metric_rows(&data.get())[i].1.clone());
			view! { <MetricCard title=title value=value unit=unit /> }
		})
		.collect_view();

	view! {
		<section class="traffic-metrics">
			<header>
				<h2>"Traffic Metrics"</h2>
				<span
					class="congestion-badge"
					style=move || format!("background-color: {};", data.get().congestion.color())
				>
					{move || data.get().congestion.to_string()}
				</span>
			</header>
			<div class="metric-grid">{cards}</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::telemetry::CongestionLevel;

	#[test]
	fn rows_format_snapshot() {
		let snapshot = TrafficSnapshot {
			vehicle_count: 1234,
			average_speed: 27.0,
			congestion: CongestionLevel::Moderate,
			active_intersections: 18,
		};
		let rows = metric_rows(&snapshot);
		assert_eq!(rows[0], ("Active Vehicles", "1234".to_string(), "vehicles"));
		assert_eq!(rows[1].1, "27.0");
		assert_eq!(rows[2].1, "18");
	}
}
