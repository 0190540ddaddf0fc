//! Layout and sizing configuration for the graph view.
//!
//! Centralizes the fixed parameters of the drawing: canvas size, force layout
//! constants, node radius rule and label placement.
//!
//! # Node radius
//!
//! A community's circle is sized by its share of the focal account's
//! followers: `max(min_radius, comm_size / followers_count * radius_scale)`.
//! The floor keeps small communities clickable.

/// Force layout constants.
#[derive(Clone, Debug)]
pub struct ForceConfig {
	/// Target length of every link, in canvas units.
	pub link_distance: f64,
	/// How strongly links pull toward `link_distance` (0.0 to 1.0).
	pub link_strength: f64,
	/// Pairwise node charge. Negative values repel.
	pub charge: f64,
	/// Pull of every node toward the canvas center.
	pub gravity: f64,
	/// Velocity retained per tick (1.0 = frictionless).
	pub friction: f64,
	/// Alpha the simulation starts (and resumes) at.
	pub initial_alpha: f64,
	/// Multiplier applied to alpha after every tick.
	pub alpha_decay: f64,
	/// Alpha below which the simulation stops.
	pub alpha_min: f64,
}

impl Default for ForceConfig {
	fn default() -> Self {
		Self {
			link_distance: 30.0,
			link_strength: 1.0,
			charge: -120.0,
			gravity: 0.1,
			friction: 0.9,
			initial_alpha: 0.1,
			alpha_decay: 0.99,
			alpha_min: 0.005,
		}
	}
}

/// Complete view configuration.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
	/// Simulation space and initial SVG width.
	pub width: f64,
	/// Simulation space and initial SVG height.
	pub height: f64,
	/// Largest height the responsive resize may give the SVG.
	pub max_height: f64,
	pub force: ForceConfig,
	pub min_radius: f64,
	pub radius_scale: f64,
	/// Horizontal label offset from the node center.
	pub label_offset: f64,
	/// Pointer travel (px) after which a press counts as a drag, not a click.
	pub drag_threshold: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			width: 960.0,
			height: 500.0,
			max_height: 450.0,
			force: ForceConfig::default(),
			min_radius: 5.0,
			radius_scale: 30.0,
			label_offset: 12.0,
			drag_threshold: 3.0,
		}
	}
}

impl LayoutConfig {
	/// Circle radius for a community of `comm_size` accounts.
	///
	/// A zero followers count has no meaningful share; such nodes get the
	/// minimum radius.
	pub fn node_radius(&self, comm_size: u64, followers_count: u64) -> f64 {
		if followers_count == 0 {
			return self.min_radius;
		}
		let share = comm_size as f64 / followers_count as f64;
		self.min_radius.max(share * self.radius_scale)
	}

	/// Stroke width for a link of the given weight.
	pub fn link_width(&self, value: f64) -> f64 {
		value.max(0.0).sqrt()
	}
}
