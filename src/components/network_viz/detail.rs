use leptos::prelude::*;

use super::types::NetworkNode;

/// Label/value pairs shown for a selected node.
pub fn detail_rows(node: &NetworkNode) -> [(&'static str, String); 3] {
	[
		("Type", node.kind.to_string()),
		("Traffic", format!("{} vehicles/hour", node.traffic)),
		("Connections", node.connections.len().to_string()),
	]
}

/// Details of the selected node. Renders nothing without a selection.
#[component]
pub fn NodeDetailPanel(#[prop(into)] selected: Signal<Option<NetworkNode>>) -> impl IntoView {
	move || {
		selected.get().map(|node| {
			let style = node.status.style();
			let rows = detail_rows(&node)
				.into_iter()
				.map(|(label, value)| {
					view! {
						<div class="detail-row">
							<dt>{label}</dt>
							<dd>{value}</dd>
						</div>
					}
				})
				.collect_view();

			view! {
				<div class="node-detail">
					<div class="node-detail-header">
						<h3>{node.name}</h3>
						<span
							class="status-badge"
							style=format!("background-color: {};", style.color)
						>
							{node.status.as_str()}
						</span>
					</div>
					<dl>{rows}</dl>
				</div>
			}
		})
	}
}
