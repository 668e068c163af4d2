use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::detail::NodeDetailPanel;
use super::legend::NetworkLegend;
use super::state::NetworkState;
use super::types::NetworkNode;
use crate::components::canvas::use_render_loop;
use crate::telemetry::TrafficSnapshot;

/// Animated traffic network on a canvas, with click-to-inspect.
///
/// `data` feeds the stat overlay only; the node set itself is fixed.
#[component]
pub fn NetworkVisualization(
	#[prop(into)] data: Signal<TrafficSnapshot>,
	#[prop(default = 400.0)] width: f64,
	#[prop(default = 300.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = Rc::new(RefCell::new(NetworkState::new(width, height)));
	let (selected, set_selected) = signal(None::<NetworkNode>);
	let (node_count, edge_count) = {
		let s = state.borrow();
		(s.nodes.len(), s.edge_count())
	};

	use_render_loop(canvas_ref, state.clone(), width, height);

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		let picked = state_click.borrow_mut().select_at(x, y).cloned();
		match &picked {
			Some(node) => debug!("selected {} at ({x:.0}, {y:.0})", node.id),
			None => debug!("selection cleared at ({x:.0}, {y:.0})"),
		}
		set_selected.set(picked);
	};

	view! {
		<div class="network-visualization">
			<canvas
				node_ref=canvas_ref
				class="network-canvas"
				on:click=on_click
				style="display: block; cursor: pointer;"
			/>
			<NetworkLegend data=data node_count=node_count edge_count=edge_count />
			<NodeDetailPanel selected=selected />
		</div>
	}
}
