use leptos::prelude::*;

use crate::telemetry::{HealthSnapshot, HealthStatus};

/// Uptime line shown under the graded readings.
pub fn uptime_label(snapshot: &HealthSnapshot) -> String {
	format!("{:.2}% uptime", snapshot.uptime_percent)
}

/// Colored dot plus label for a health grade.
#[component]
pub fn StatusIndicator(#[prop(into)] status: Signal<HealthStatus>) -> impl IntoView {
	view! {
		<span class="status-indicator">
			<span
				class="status-dot"
				style=move || format!("background-color: {};", status.get().color())
			/>
			<span class="status-label">{move || status.get().to_string()}</span>
		</span>
	}
}

/// Platform resource readings, each with its own indicator.
#[component]
pub fn SystemHealth(#[prop(into)] data: Signal<HealthSnapshot>) -> impl IntoView {
	let rows = (0..3)
		.map(|i| {
			let label = data.with_untracked(|s| s.readings()[i].0);
			let value = move || data.with(|s| s.readings()[i].1.clone());
			let status = Signal::derive(move || data.with(|s| s.readings()[i].2));
			view! {
				<li class="health-row">
					<span class="health-label">{label}</span>
					<span class="health-value">{value}</span>
					<StatusIndicator status=status />
				</li>
			}
		})
		.collect_view();
	let overall = Signal::derive(move || data.with(HealthSnapshot::overall));

	view! {
		<section class="system-health">
			<header>
				<h2>"System Health"</h2>
				<StatusIndicator status=overall />
			</header>
			<ul class="health-list">{rows}</ul>
			<span class="health-uptime">{move || data.with(uptime_label)}</span>
		</section>
	}
}
