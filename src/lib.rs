//! community-graph: force-directed view of a social account's communities.
//!
//! This crate provides a WASM view that reads a community graph injected into
//! the page, lays it out with a force simulation, and shows the focal
//! account's profile alongside details of whichever community is clicked.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::graph_view::{
	DatasetError, Edge, EdgeEnd, GraphDataset, GraphView, LoadError, Node, NodeDetail,
	NodeDetailPanel, ProfilePanel, ProfileText, RootProfile,
};

/// Id of the `<script type="application/json">` element holding the dataset.
pub const GRAPH_DATA_ID: &str = "graph-data";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("community-graph: logging initialized");
}

/// Load the graph dataset from the script element with id [`GRAPH_DATA_ID`].
/// Expected format: node-link JSON with `root`, `nodes` and `links`.
pub fn load_graph_data() -> Result<GraphDataset, LoadError> {
	let window: Window = web_sys::window().ok_or(LoadError::NoDocument)?;
	let document = window.document().ok_or(LoadError::NoDocument)?;
	let element = document
		.get_element_by_id(GRAPH_DATA_ID)
		.ok_or_else(|| LoadError::MissingElement(GRAPH_DATA_ID.to_string()))?;
	let script: HtmlScriptElement = element
		.dyn_into()
		.map_err(|_| LoadError::NotAScript(GRAPH_DATA_ID.to_string()))?;
	let json_text = script.text().unwrap_or_default();

	let data = GraphDataset::from_json(&json_text)?;
	info!(
		"community-graph: loaded @{} with {} nodes, {} links",
		data.root.screen_name,
		data.nodes.len(),
		data.links.len()
	);
	Ok(data)
}

/// Main application component.
/// Loads the dataset from the DOM and renders the profile, graph and detail panels.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let dataset = load_graph_data().unwrap_or_else(|e| {
		warn!("community-graph: {e}");
		GraphDataset::default()
	});
	let profile = ProfileText::from(&dataset.root);
	let title = format!("{} communities", profile.handle);
	let selected = RwSignal::new(None::<NodeDetail>);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="community-graph">
			<ProfilePanel profile=profile />
			<div class="chart-container">
				<GraphView data=dataset selected=selected />
			</div>
			<NodeDetailPanel selected=selected />
		</main>
	}
}
