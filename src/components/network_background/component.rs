use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, MediaQueryList, MediaQueryListEvent, Window,
};

use super::config::{NetworkConfig, Palette};
use super::environment::{
	Debouncer, prefers_reduced_motion, reduced_motion_query, window_viewport,
};
use super::paint;
use super::renderer::NetworkRenderer;
use super::types::Viewport;

const CANVAS_STYLE: &str =
	"position: fixed; inset: 0; z-index: 0; display: block; pointer-events: none;";
const OVERLAY_STYLE: &str = "position: fixed; inset: 0; z-index: 0; pointer-events: none; \
	background: radial-gradient(ellipse at center, rgba(5, 6, 15, 0) 40%, rgba(5, 6, 15, 0.7) 100%);";

/// Host resources acquired on mount and released on teardown.
#[derive(Default)]
struct Mounted {
	window: Option<Window>,
	frame: Rc<Cell<Option<i32>>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	on_resize: Option<Closure<dyn FnMut()>>,
	on_motion: Option<(MediaQueryList, Closure<dyn FnMut(MediaQueryListEvent)>)>,
	debouncer: Debouncer,
}

impl Mounted {
	fn release(&mut self) {
		let Some(window) = self.window.take() else {
			return;
		};
		if let Some(id) = self.frame.take() {
			let _ = window.cancel_animation_frame(id);
		}
		// breaks the loop's self reference
		self.animate.borrow_mut().take();
		self.debouncer.cancel();
		if let Some(cb) = self.on_resize.take() {
			let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		if let Some((query, cb)) = self.on_motion.take() {
			let _ = query.remove_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
		}
		debug!("network background torn down");
	}
}

/// Full-viewport animated node network, drawn behind page content.
#[component]
pub fn NetworkBackground(#[prop(optional)] config: Option<NetworkConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let config = config.unwrap_or_default();
	let mounted: Rc<RefCell<Mounted>> = Rc::new(RefCell::new(Mounted::default()));
	let mounted_init = mounted.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if mounted_init.borrow().window.is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		if let Err(err) = mount(canvas, config.clone(), &mounted_init) {
			warn!("network background disabled: {:?}", err);
			mounted_init.borrow_mut().release();
		}
	});

	let teardown = SendWrapper::new(mounted);
	on_cleanup(move || teardown.take().borrow_mut().release());

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-background"
			aria-hidden="true"
			style=CANVAS_STYLE
		/>
		<div class="network-gradient-overlay" aria-hidden="true" style=OVERLAY_STYLE />
	}
}

/// Paint the current scene, or blank the canvas when there is none.
fn draw_frame(
	renderer: &NetworkRenderer,
	reduced_motion: bool,
	palette: &Palette,
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
) -> Result<(), JsValue> {
	match renderer.scene(reduced_motion) {
		Some(scene) => paint::paint(&scene, palette, ctx),
		None => {
			paint::clear(ctx, canvas.width() as f64, canvas.height() as f64);
			Ok(())
		}
	}
}

fn apply_viewport(canvas: &HtmlCanvasElement, renderer: &RefCell<NetworkRenderer>, viewport: Viewport) {
	if viewport.is_renderable() {
		canvas.set_width(viewport.width as u32);
		canvas.set_height(viewport.height as u32);
	}
	renderer.borrow_mut().resize(viewport);
}

fn mount(
	canvas: HtmlCanvasElement,
	config: NetworkConfig,
	mounted: &Rc<RefCell<Mounted>>,
) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("no 2d context"))?
		.dyn_into()?;

	let debounce_ms = config.resize_debounce_ms;
	let palette = config.palette.clone();
	let renderer = Rc::new(RefCell::new(NetworkRenderer::from_entropy(config)));

	let query = reduced_motion_query(&window);
	if query.is_none() {
		warn!("prefers-reduced-motion is not available, animating");
	}
	let reduced = Rc::new(Cell::new(prefers_reduced_motion(query.as_ref())));
	info!("network background mounted, reduced motion: {}", reduced.get());

	// first size is applied right away, later ones after a quiet period
	apply_viewport(&canvas, &renderer, window_viewport(&window)?);

	let mut m = mounted.borrow_mut();
	m.window = Some(window.clone());

	let (renderer_resize, canvas_resize, window_resize, debouncer) = (
		renderer.clone(),
		canvas.clone(),
		window.clone(),
		m.debouncer.clone(),
	);
	let on_resize = Closure::<dyn FnMut()>::new(move || {
		let (renderer, canvas, window) = (
			renderer_resize.clone(),
			canvas_resize.clone(),
			window_resize.clone(),
		);
		debouncer.schedule(debounce_ms, move || match window_viewport(&window) {
			Ok(viewport) => apply_viewport(&canvas, &renderer, viewport),
			Err(err) => warn!("could not read viewport: {:?}", err),
		});
	});
	window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
	m.on_resize = Some(on_resize);

	if let Some(query) = query {
		let reduced_change = reduced.clone();
		let on_change =
			Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |ev: MediaQueryListEvent| {
				reduced_change.set(ev.matches());
				info!("reduced motion preference changed: {}", ev.matches());
			});
		query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
		m.on_motion = Some((query, on_change));
	}

	let (frame, animate) = (m.frame.clone(), m.animate.clone());
	let (frame_inner, animate_inner, window_anim) =
		(frame.clone(), animate.clone(), window.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		frame_inner.set(None);
		let reduced = reduced.get();
		renderer.borrow_mut().tick(reduced);
		if let Err(err) = draw_frame(&renderer.borrow(), reduced, &palette, &canvas, &ctx) {
			warn!("network frame failed: {:?}", err);
		}
		if let Some(ref cb) = *animate_inner.borrow() {
			frame_inner.set(
				window_anim
					.request_animation_frame(cb.as_ref().unchecked_ref())
					.ok(),
			);
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		frame.set(Some(
			window.request_animation_frame(cb.as_ref().unchecked_ref())?,
		));
	}
	Ok(())
}
