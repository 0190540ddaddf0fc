//! Leptos component drawing the community graph as SVG.
//!
//! The component creates one `line.link` per edge, one `circle.node` and one
//! text label per node, then drives the layout from a `requestAnimationFrame`
//! loop: each frame advances the simulation and rewrites the coordinate
//! buffer the SVG attributes read from. Clicking a circle publishes that
//! community's detail; dragging pins and moves it. The surface resizes with
//! its container while keeping its initial aspect ratio.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, Window};

use super::config::LayoutConfig;
use super::panel::NodeDetail;
use super::resize::ResponsiveSize;
use super::state::{Frame, GraphViewState, Point, VisualId};
use super::types::GraphDataset;

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Everything the unmount cleanup needs to release.
#[derive(Clone)]
struct Teardown {
	state: Rc<RefCell<GraphViewState>>,
	alive: Rc<Cell<bool>>,
	resize_cb: Callback,
}

impl Teardown {
	fn run(&self) {
		self.alive.set(false);
		self.state.borrow_mut().teardown();
		if let Some(cb) = self.resize_cb.borrow_mut().take() {
			if let Some(window) = web_sys::window() {
				let listener: &js_sys::Function = cb.as_ref().unchecked_ref();
				let _ = window.remove_event_listener_with_callback("resize", listener);
			}
		}
		debug!("community-graph: view torn down");
	}
}

/// Pointer position relative to the drawing surface.
fn surface_point(svg_ref: NodeRef<leptos::svg::Svg>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let svg = svg_ref.get_untracked()?;
	let rect = svg.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Renders the dataset as an interactive force-directed SVG graph.
///
/// `selected` receives the complete detail of a community whenever its
/// circle is clicked. The layout uses [`LayoutConfig::default`] unless
/// `config` is given.
#[component]
pub fn GraphView(
	data: GraphDataset,
	selected: RwSignal<Option<NodeDetail>>,
	#[prop(optional)] config: Option<LayoutConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let svg_ref = NodeRef::<leptos::svg::Svg>::new();

	let state = Rc::new(RefCell::new(GraphViewState::new(data, config.clone())));
	let frame = RwSignal::new(state.borrow().new_frame());
	let size = RwSignal::new((config.width as u32, config.height as u32));
	let alive = Rc::new(Cell::new(true));
	let animate: Callback = Rc::new(RefCell::new(None));
	let resize_cb: Callback = Rc::new(RefCell::new(None));

	let teardown = StoredValue::new_local(Teardown {
		state: state.clone(),
		alive: alive.clone(),
		resize_cb: resize_cb.clone(),
	});
	on_cleanup(move || {
		if let Some(t) = teardown.try_get_value() {
			t.run();
		}
	});

	let (state_init, animate_init, resize_init) = (state.clone(), animate.clone(), resize_cb.clone());
	let sizing = ResponsiveSize::new(config.width, config.height, config.max_height);
	Effect::new(move |_| {
		let Some(svg) = svg_ref.get() else {
			return;
		};
		let Some(window): Option<Window> = web_sys::window() else {
			return;
		};
		{
			let s = state_init.borrow();
			info!(
				"community-graph: drawing {} nodes, {} links",
				s.nodes().len(),
				s.links().len()
			);
		}

		let fit = move || {
			if let Some(parent) = svg.parent_element() {
				size.set(sizing.fit(parent.client_width() as f64));
			}
		};
		fit();
		*resize_init.borrow_mut() = Some(Closure::new(fit));
		if let Some(ref cb) = *resize_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, alive_anim) =
			(state_init.clone(), animate_init.clone(), alive.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !alive_anim.get() {
				return;
			}
			{
				let mut s = state_anim.borrow_mut();
				let was_running = s.simulation.is_running();
				if s.tick() {
					frame.update(|f| s.sync_frame(f));
				} else if was_running {
					debug!("community-graph: layout settled");
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(w) = web_sys::window() {
					let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let point = move |i: usize| frame.with(|f: &Frame| f.nodes.get(i).copied().unwrap_or_default());
	let segment =
		move |i: usize| frame.with(|f: &Frame| f.links.get(i).copied().unwrap_or_default());

	let links_view = state
		.borrow()
		.links()
		.iter()
		.enumerate()
		.map(|(i, link)| {
			let style = format!("stroke-width: {}px", link.width);
			view! {
				<line
					class="link"
					style=style
					x1=move || segment(i).x1.to_string()
					y1=move || segment(i).y1.to_string()
					x2=move || segment(i).x2.to_string()
					y2=move || segment(i).y2.to_string()
				/>
			}
		})
		.collect_view();

	let label_offset = config.label_offset;
	let nodes_view = state
		.borrow()
		.nodes()
		.iter()
		.enumerate()
		.map(|(i, node)| {
			let id: VisualId = node.id;
			let state_md = state.clone();
			let on_mousedown = move |ev: MouseEvent| {
				ev.prevent_default();
				if let Some((x, y)) = surface_point(svg_ref, &ev) {
					state_md.borrow_mut().begin_drag(id, x, y);
				}
			};
			let state_click = state.clone();
			let on_click = move |_: MouseEvent| {
				let detail = {
					let mut s = state_click.borrow_mut();
					if !s.accept_click() {
						return;
					}
					s.detail_for(id)
				};
				if let Some(detail) = detail {
					debug!("community-graph: selected {}", detail.name);
					selected.set(Some(detail));
				}
			};
			let at = move || -> Point { point(i) };

			view! {
				<circle
					class="node"
					name=node.name.clone()
					r=node.radius.to_string()
					style=format!("fill: {}", node.color)
					cx=move || at().x.to_string()
					cy=move || at().y.to_string()
					on:mousedown=on_mousedown
					on:click=on_click
				/>
				<text
					class="label"
					x=move || (at().x + label_offset).to_string()
					y=move || at().y.to_string()
					dy=".35em"
				>
					{node.name.clone()}
				</text>
			}
		})
		.collect_view();

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let mut s = state_mm.borrow_mut();
		if s.drag.node_idx.is_none() {
			return;
		}
		if let Some((x, y)) = surface_point(svg_ref, &ev) {
			s.drag_to(x, y);
			frame.update(|f| s.sync_frame(f));
		}
	};
	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| state_mu.borrow_mut().end_drag();
	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| state_ml.borrow_mut().end_drag();

	view! {
		<svg
			id="chart"
			node_ref=svg_ref
			width=move || size.get().0.to_string()
			height=move || size.get().1.to_string()
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
		>
			{links_view}
			{nodes_view}
		</svg>
	}
}
