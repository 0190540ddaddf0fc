//! Graph view state: the dataset bound to its visuals.
//!
//! Holds the force simulation, the static attributes of every drawn element
//! (radius, color, stroke width), the association from circle visuals back to
//! their `Node` records, and drag tracking. Created once when the view mounts
//! and mutated by the animation loop and pointer handlers.

use std::collections::HashMap;

use log::warn;

use super::config::LayoutConfig;
use super::palette::ColorScale;
use super::panel::NodeDetail;
use super::simulation::ForceSimulation;
use super::types::{GraphDataset, Node};

/// Identifier of one node circle, stable for the lifetime of the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisualId(pub u32);

/// Static attributes of a node's circle and label.
#[derive(Clone, Debug)]
pub struct NodeVisual {
	/// Key back to the node record.
	pub id: VisualId,
	/// Label text and the circle's `name` attribute.
	pub name: String,
	/// Circle radius in pixels.
	pub radius: f64,
	/// CSS fill color.
	pub color: String,
}

/// Static attributes of an edge's line, with its endpoints resolved to node
/// indices.
#[derive(Clone, Debug)]
pub struct LinkVisual {
	/// Index of the source node.
	pub source: usize,
	/// Index of the target node.
	pub target: usize,
	/// Stroke width in pixels.
	pub width: f64,
}

/// Center of a circle on the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
}

/// Endpoints of a drawn line: (`x1`, `y1`) is the source, (`x2`, `y2`) the
/// target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
	/// Source x.
	pub x1: f64,
	/// Source y.
	pub y1: f64,
	/// Target x.
	pub x2: f64,
	/// Target y.
	pub y2: f64,
}

/// Drawn coordinates of every visual, rewritten in place each tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
	/// One segment per drawn link.
	pub links: Vec<Segment>,
	/// One point per node.
	pub nodes: Vec<Point>,
}

/// Tracks an in-progress node drag.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node_idx: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
	/// Pointer travelled past the drag threshold.
	pub moved: bool,
	/// The click that follows a real drag must not select the node.
	suppress_click: bool,
}

/// Core view state combining the simulation with the visual bindings.
pub struct GraphViewState {
	dataset: GraphDataset,
	config: LayoutConfig,
	pub simulation: ForceSimulation,
	nodes: Vec<NodeVisual>,
	links: Vec<LinkVisual>,
	association: HashMap<VisualId, usize>,
	pub drag: DragState,
}

impl GraphViewState {
	pub fn new(dataset: GraphDataset, config: LayoutConfig) -> Self {
		if let Err(e) = dataset.validate() {
			warn!("community-graph: {e}");
		}

		let mut colors = ColorScale::default();
		let followers = dataset.root.followers_count;
		let nodes: Vec<NodeVisual> = dataset
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| NodeVisual {
				id: VisualId(i as u32),
				name: node.name.clone(),
				radius: config.node_radius(node.comm_size, followers),
				color: colors.color(node.group).to_css(),
			})
			.collect();
		let association = nodes.iter().enumerate().map(|(i, v)| (v.id, i)).collect();

		let mut links = Vec::with_capacity(dataset.links.len());
		for (link, resolved) in dataset.links.iter().zip(dataset.resolve_links()) {
			match resolved {
				Some((source, target)) => links.push(LinkVisual {
					source,
					target,
					width: config.link_width(link.value),
				}),
				None => warn!(
					"community-graph: skipping link {} -> {}",
					link.source, link.target
				),
			}
		}

		let simulation = ForceSimulation::new(
			nodes.len(),
			links.iter().map(|l| (l.source, l.target)).collect(),
			config.width,
			config.height,
			config.force.clone(),
		);

		Self {
			dataset,
			config,
			simulation,
			nodes,
			links,
			association,
			drag: DragState::default(),
		}
	}

	pub fn nodes(&self) -> &[NodeVisual] {
		&self.nodes
	}

	pub fn links(&self) -> &[LinkVisual] {
		&self.links
	}

	/// The `Node` record a circle was drawn for.
	pub fn node_for(&self, id: VisualId) -> Option<&Node> {
		self.association
			.get(&id)
			.and_then(|&idx| self.dataset.nodes.get(idx))
	}

	/// Complete detail-panel text for the node behind a circle.
	pub fn detail_for(&self, id: VisualId) -> Option<NodeDetail> {
		self.node_for(id).map(NodeDetail::from)
	}

	/// Advance the simulation one step. Returns whether it is still moving.
	pub fn tick(&mut self) -> bool {
		self.simulation.tick()
	}

	/// An empty frame sized for this graph.
	pub fn new_frame(&self) -> Frame {
		let mut frame = Frame {
			links: vec![Segment::default(); self.links.len()],
			nodes: vec![Point::default(); self.nodes.len()],
		};
		self.sync_frame(&mut frame);
		frame
	}

	/// Copy current simulated positions into `frame`.
	///
	/// Only writes coordinates; a frame from [`Self::new_frame`] is never
	/// reallocated.
	pub fn sync_frame(&self, frame: &mut Frame) {
		let bodies = self.simulation.bodies();
		frame.nodes.resize(bodies.len(), Point::default());
		frame.links.resize(self.links.len(), Segment::default());

		for (point, body) in frame.nodes.iter_mut().zip(bodies) {
			point.x = body.x;
			point.y = body.y;
		}
		for (segment, link) in frame.links.iter_mut().zip(&self.links) {
			let (src, tgt) = (&bodies[link.source], &bodies[link.target]);
			segment.x1 = src.x;
			segment.y1 = src.y;
			segment.x2 = tgt.x;
			segment.y2 = tgt.y;
		}
	}

	/// Pointer went down on a circle at surface coordinates (`x`, `y`).
	pub fn begin_drag(&mut self, id: VisualId, x: f64, y: f64) {
		let Some(&idx) = self.association.get(&id) else {
			return;
		};
		let Some((nx, ny)) = self.simulation.position(idx) else {
			return;
		};
		self.drag = DragState {
			node_idx: Some(idx),
			start_x: x,
			start_y: y,
			node_start_x: nx,
			node_start_y: ny,
			moved: false,
			suppress_click: false,
		};
		self.simulation.pin(idx);
	}

	/// Pointer moved to (`x`, `y`) during a drag.
	pub fn drag_to(&mut self, x: f64, y: f64) {
		let Some(idx) = self.drag.node_idx else {
			return;
		};
		let (dx, dy) = (x - self.drag.start_x, y - self.drag.start_y);
		if (dx * dx + dy * dy).sqrt() > self.config.drag_threshold {
			self.drag.moved = true;
		}
		if self.drag.moved {
			self.simulation.move_pinned(
				idx,
				self.drag.node_start_x + dx,
				self.drag.node_start_y + dy,
			);
		}
	}

	/// Pointer released or left the surface.
	pub fn end_drag(&mut self) {
		if let Some(idx) = self.drag.node_idx.take() {
			self.simulation.unpin(idx);
			self.drag.suppress_click = self.drag.moved;
		}
		self.drag.moved = false;
	}

	/// Whether a click should select its node; consumes a pending suppression
	/// left by a drag.
	pub fn accept_click(&mut self) -> bool {
		!std::mem::take(&mut self.drag.suppress_click)
	}

	/// Stop the simulation for good when the view unmounts.
	pub fn teardown(&mut self) {
		self.end_drag();
		self.simulation.stop();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_view::panel::Sentiment;
	use crate::components::graph_view::types::{Edge, EdgeEnd, RootProfile};

	fn node(name: &str, group: u32, comm_size: u64, score: f64) -> Node {
		Node {
			name: name.into(),
			group,
			comm_size,
			hashtags: vec![format!("#{name}")],
			sentiment: vec![Some(score)],
			density: 0.25,
			modularity: Some(0.5),
			..Default::default()
		}
	}

	fn edge(source: usize, target: usize, value: f64) -> Edge {
		Edge {
			source: EdgeEnd::Index(source),
			target: EdgeEnd::Index(target),
			value,
		}
	}

	fn dataset() -> GraphDataset {
		GraphDataset {
			root: RootProfile {
				screen_name: "focal".into(),
				followers_count: 1000,
				..Default::default()
			},
			nodes: vec![
				node("0-0", 0, 900, 7.0),
				node("0-1", 0, 10, 3.0),
				node("1-0", 1, 500, 5.0),
			],
			links: vec![
				edge(0, 2, 4.0),
				edge(1, 2, 1.0),
				Edge {
					source: EdgeEnd::Name("nowhere".into()),
					target: EdgeEnd::Index(0),
					value: 1.0,
				},
			],
		}
	}

	fn assert_frame_matches(state: &GraphViewState, frame: &Frame) {
		for (point, idx) in frame.nodes.iter().zip(0..) {
			assert_eq!(state.simulation.position(idx), Some((point.x, point.y)));
		}
		for (segment, link) in frame.links.iter().zip(state.links()) {
			assert_eq!(
				state.simulation.position(link.source),
				Some((segment.x1, segment.y1))
			);
			assert_eq!(
				state.simulation.position(link.target),
				Some((segment.x2, segment.y2))
			);
		}
	}

	#[test]
	fn builds_one_visual_per_node_and_resolved_link() {
		let state = GraphViewState::new(dataset(), LayoutConfig::default());
		assert_eq!(state.nodes().len(), 3);
		assert_eq!(state.links().len(), 2);
		assert_eq!(state.links()[0].width, 2.0);

		let radii: Vec<f64> = state.nodes().iter().map(|n| n.radius).collect();
		assert_eq!(radii, vec![27.0, 5.0, 15.0]);
		assert!(state.nodes().iter().all(|n| n.radius >= 5.0));

		assert_eq!(state.nodes()[0].color, state.nodes()[1].color);
		assert_ne!(state.nodes()[0].color, state.nodes()[2].color);
	}

	#[test]
	fn frame_tracks_simulation_every_tick() {
		let mut state = GraphViewState::new(dataset(), LayoutConfig::default());
		let mut frame = state.new_frame();
		assert_frame_matches(&state, &frame);

		for _ in 0..25 {
			state.tick();
			state.sync_frame(&mut frame);
			assert_frame_matches(&state, &frame);
		}

		let snapshot = frame.clone();
		state.sync_frame(&mut frame);
		assert_eq!(frame, snapshot);
	}

	#[test]
	fn selection_replaces_every_detail_field() {
		let state = GraphViewState::new(dataset(), LayoutConfig::default());
		let first = state.detail_for(VisualId(0)).unwrap();
		let second = state.detail_for(VisualId(1)).unwrap();

		assert_eq!(first.sentiment, Sentiment::Happy);
		assert_eq!(second.sentiment, Sentiment::Sad);
		assert_eq!(second, NodeDetail::from(&dataset().nodes[1]));
		assert_eq!(second.hashtags, vec!["#0-1"]);
		assert_eq!(second.comm_size, "10");
		assert!(state.detail_for(VisualId(99)).is_none());
	}

	#[test]
	fn drag_moves_node_and_swallows_the_click() {
		let mut state = GraphViewState::new(dataset(), LayoutConfig::default());
		let (x0, y0) = state.simulation.position(2).unwrap();

		state.begin_drag(VisualId(2), 100.0, 100.0);
		state.drag_to(140.0, 130.0);
		assert_eq!(state.simulation.position(2), Some((x0 + 40.0, y0 + 30.0)));
		state.tick();
		assert_eq!(state.simulation.position(2), Some((x0 + 40.0, y0 + 30.0)));

		state.end_drag();
		assert!(!state.simulation.bodies()[2].pinned);
		assert!(!state.accept_click());
		assert!(state.accept_click());
	}

	#[test]
	fn a_press_without_travel_is_a_click() {
		let mut state = GraphViewState::new(dataset(), LayoutConfig::default());
		let before = state.simulation.position(1);
		state.begin_drag(VisualId(1), 50.0, 50.0);
		state.drag_to(51.0, 50.0);
		state.end_drag();
		assert_eq!(state.simulation.position(1), before);
		assert!(state.accept_click());
	}

	#[test]
	fn teardown_stops_the_simulation() {
		let mut state = GraphViewState::new(dataset(), LayoutConfig::default());
		assert!(state.tick());
		state.teardown();
		assert!(!state.tick());
	}
}
