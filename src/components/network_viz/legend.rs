use leptos::prelude::*;

use super::types::NodeStatus;
use crate::telemetry::TrafficSnapshot;

/// Swatch color and label for each status, in display order.
pub fn legend_entries() -> Vec<(&'static str, &'static str)> {
	NodeStatus::ALL
		.into_iter()
		.map(|status| (status.style().color, status.as_str()))
		.collect()
}

/// Status legend plus a one-line summary of the network and the live feed.
#[component]
pub fn NetworkLegend(
	#[prop(into)] data: Signal<TrafficSnapshot>,
	node_count: usize,
	edge_count: usize,
) -> impl IntoView {
	let swatches = legend_entries()
		.into_iter()
		.map(|(color, label)| {
			view! {
				<span class="legend-item">
					<span
						class="legend-swatch"
						style=format!(
							"display: inline-block; width: 10px; height: 10px; \
							 border-radius: 50%; background-color: {color};",
						)
					/>
					{label}
				</span>
			}
		})
		.collect_view();

	view! {
		<div class="network-legend">
			<div class="legend-items">{swatches}</div>
			<div class="network-stats">
				<span>{format!("{node_count} nodes")}</span>
				<span>{format!("{edge_count} connections")}</span>
				<span>{move || format!("{} vehicles", data.get().vehicle_count)}</span>
				<span>
					{move || format!("{} active intersections", data.get().active_intersections)}
				</span>
				<span style=move || {
					format!("color: {};", data.get().congestion.color())
				}>{move || format!("{} congestion", data.get().congestion)}</span>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn legend_lists_every_status_once() {
		assert_eq!(
			legend_entries(),
			[
				("#10b981", "optimal"),
				("#ef4444", "congested"),
				("#f59e0b", "warning"),
				("#6b7280", "offline"),
			]
		);
	}
}
