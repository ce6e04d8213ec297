use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::config::ExplorerConfig;
use super::controller::{Controller, Gesture, Pointer};
use super::filter::Filter;
use super::model::TopicGraph;
use super::panel::PanelView;
use super::render::CanvasRenderer;
use super::state::ExplorerState;
use super::tooltip::TooltipView;

const FRAME_SECS: f64 = 0.016;

type SharedController = Rc<RefCell<Option<Controller<CanvasRenderer>>>>;

fn canvas_context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or((800.0, 600.0))
}

fn pointer(canvas_ref: NodeRef<Canvas>, ev: &MouseEvent) -> Option<Pointer> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?;
	let rect = canvas.get_bounding_client_rect();
	Some(Pointer {
		x: ev.client_x() as f64 - rect.left(),
		y: ev.client_y() as f64 - rect.top(),
		page_x: ev.page_x() as f64,
		page_y: ev.page_y() as f64,
	})
}

#[component]
pub fn ExplorerCanvas(
	graph: TopicGraph,
	#[prop(optional)] config: ExplorerConfig,
	#[prop(into)] filter: Signal<Filter>,
	panel: RwSignal<PanelView>,
	tooltip: RwSignal<TooltipView>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<Canvas>::new();
	let controller: SharedController = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pending = Rc::new(RefCell::new(Some((graph, config))));
	let (controller_init, animate_init, resize_cb_init) =
		(controller.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some((graph, config)) = pending.borrow_mut().take() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas_context(&canvas) else {
			log::error!("canvas 2d context unavailable, graph not shown");
			return;
		};
		let renderer = CanvasRenderer::new(ctx, (w, h), &config, panel, tooltip);
		let mut state = ExplorerState::new(graph, config, w, h);
		let initial_filter = filter.get_untracked();
		if initial_filter.is_active() {
			state.apply_filter(initial_filter);
		}
		*controller_init.borrow_mut() = Some(Controller::new(state, renderer));

		let (controller_resize, canvas_resize) = (controller_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = parent_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *controller_resize.borrow_mut() {
				c.renderer_mut().resize(nw, nh);
				c.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (controller_anim, animate_inner) = (controller_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *controller_anim.borrow_mut() {
				c.tick(FRAME_SECS);
			}
			if let (Some(window), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let controller_filter = controller.clone();
	Effect::new(move |_| {
		let filter = filter.get();
		if let Some(ref mut c) = *controller_filter.borrow_mut() {
			c.handle(Gesture::ApplyFilter(filter));
		}
	});

	let controller_md = controller.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(p) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *controller_md.borrow_mut() {
			c.pointer_down(p);
		}
	};

	let controller_mm = controller.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(p) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *controller_mm.borrow_mut() {
			c.pointer_move(p);
		}
	};

	let controller_mu = controller.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut c) = *controller_mu.borrow_mut() {
			c.pointer_up();
		}
	};

	let controller_ml = controller;
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *controller_ml.borrow_mut() {
			c.pointer_leave();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			id="chart"
			class="topic-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
	}
}
