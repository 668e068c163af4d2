use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::context::{CanvasError, canvas_context, window};
use super::shape::{Shape, paint};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Something a [`RenderLoop`] can draw once per display frame.
pub trait Scene {
	/// The complete frame for the current state, back to front.
	fn shapes(&self) -> Vec<Shape>;
	/// Advance to the next frame.
	fn tick(&mut self);
	/// Frames drawn so far.
	fn frame(&self) -> u64;
}

/// Owns the `requestAnimationFrame` chain that draws a [`Scene`].
///
/// Each callback draws one frame, advances the scene, then queues the next
/// callback. [`RenderLoop::stop`] cancels the pending request and drops the
/// closure, which breaks the self-reference keeping it alive.
pub struct RenderLoop {
	scene: Rc<RefCell<dyn Scene>>,
	callback: FrameCallback,
	pending: Rc<Cell<Option<i32>>>,
}

impl RenderLoop {
	pub fn start(
		scene: Rc<RefCell<dyn Scene>>,
		ctx: CanvasRenderingContext2d,
	) -> Result<Self, CanvasError> {
		let win = window()?;
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));

		let (scene_inner, callback_inner, pending_inner) =
			(scene.clone(), callback.clone(), pending.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			{
				let mut s = scene_inner.borrow_mut();
				paint(&s.shapes(), &ctx);
				s.tick();
			}
			if let (Some(cb), Ok(win)) = (callback_inner.borrow().as_ref(), window()) {
				let next = win.request_animation_frame(cb.as_ref().unchecked_ref());
				pending_inner.set(next.ok());
			}
		}));

		let id = match callback.borrow().as_ref() {
			Some(cb) => win
				.request_animation_frame(cb.as_ref().unchecked_ref())
				.map_err(|_| CanvasError::FrameRequestRejected)?,
			None => return Err(CanvasError::FrameRequestRejected),
		};
		pending.set(Some(id));
		info!("render loop started");

		Ok(Self {
			scene,
			callback,
			pending,
		})
	}

	/// Cancel the queued frame and release the callback. Idempotent.
	pub fn stop(&self) {
		if let (Some(id), Ok(win)) = (self.pending.take(), window()) {
			let _ = win.cancel_animation_frame(id);
		}
		if self.callback.borrow_mut().take().is_some() {
			debug!(
				"render loop stopped after {} frames",
				self.scene.borrow().frame()
			);
		}
	}
}

impl Drop for RenderLoop {
	fn drop(&mut self) {
		self.stop();
	}
}

/// Size the canvas behind `canvas_ref` and animate `scene` on it for as long
/// as the calling owner lives.
///
/// Without a 2D context the loop never starts.
pub fn use_render_loop<S>(
	canvas_ref: NodeRef<Canvas>,
	scene: Rc<RefCell<S>>,
	width: f64,
	height: f64,
) where
	S: Scene + 'static,
{
	let render_loop = StoredValue::new_local(None::<RenderLoop>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx = match canvas_context(&canvas) {
			Ok(ctx) => ctx,
			Err(err) => {
				warn!("canvas disabled: {err}");
				return;
			}
		};
		match RenderLoop::start(scene.clone(), ctx) {
			Ok(started) => render_loop.update_value(|slot| {
				if let Some(previous) = slot.replace(started) {
					previous.stop();
				}
			}),
			Err(err) => warn!("render loop not started: {err}"),
		}
	});

	on_cleanup(move || {
		render_loop.try_update_value(|slot| {
			if let Some(running) = slot.take() {
				running.stop();
			}
		});
	});
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
	use super::*;
	use crate::components::network_viz::NetworkState;
	use gloo_timers::future::TimeoutFuture;
	use wasm_bindgen::JsCast;
	use wasm_bindgen_test::*;
	use web_sys::HtmlElement;

	wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

	fn context() -> CanvasRenderingContext2d {
		let document = window().unwrap().document().unwrap();
		let canvas: HtmlCanvasElement = document
			.create_element("canvas")
			.unwrap()
			.dyn_into()
			.unwrap();
		canvas_context(&canvas).unwrap()
	}

	fn host() -> HtmlElement {
		let document = window().unwrap().document().unwrap();
		let host: HtmlElement = document
			.create_element("div")
			.unwrap()
			.dyn_into()
			.unwrap();
		document.body().unwrap().append_child(&host).unwrap();
		host
	}

	#[wasm_bindgen_test]
	fn start_then_stop_releases_callback() {
		let state = Rc::new(RefCell::new(NetworkState::new(400.0, 300.0)));
		let render_loop = RenderLoop::start(state.clone(), context()).unwrap();
		render_loop.stop();
		render_loop.stop();
		assert!(render_loop.callback.borrow().is_none());
		assert_eq!(state.borrow().frame(), 0);
		// Only the test's handle remains once the closure is gone.
		drop(render_loop);
		assert_eq!(Rc::strong_count(&state), 1);
	}

	#[wasm_bindgen_test]
	async fn unmount_stops_the_frame_counter() {
		let state = Rc::new(RefCell::new(NetworkState::new(400.0, 300.0)));
		let scene = state.clone();
		let handle = leptos::mount::mount_to(host(), move || {
			let canvas_ref = NodeRef::<Canvas>::new();
			use_render_loop(canvas_ref, scene.clone(), 400.0, 300.0);
			view! { <canvas node_ref=canvas_ref /> }
		});

		TimeoutFuture::new(200).await;
		let running = state.borrow().frame();
		assert!(running > 0, "loop never drew a frame");

		drop(handle);
		let stopped = state.borrow().frame();
		TimeoutFuture::new(200).await;
		assert_eq!(state.borrow().frame(), stopped);
	}
}
