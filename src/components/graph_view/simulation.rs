//! Force-directed layout engine.
//!
//! Position-Verlet integration over a set of bodies: each body keeps its
//! current (`x`, `y`) and previous (`px`, `py`) position, so velocity is
//! implicit. Every tick applies, in order:
//!
//! 1. Link relaxation: each link nudges its endpoints toward the target
//!    distance, biased so the better-connected endpoint moves less.
//! 2. Gravity: a weak pull toward the canvas center.
//! 3. Charge: pairwise repulsion (for negative charge), inverse to distance.
//! 4. Integration with friction. Pinned bodies snap back to their pin.
//!
//! All forces are scaled by `alpha`, which cools geometrically each tick. Once
//! it drops below the configured minimum the simulation stops; dragging a node
//! resumes it.

use std::f64::consts::PI;

use super::config::ForceConfig;

/// Radius of the circle bodies start on, around the canvas center.
const INITIAL_SPREAD: f64 = 100.0;

/// Simulated state of one node.
#[derive(Clone, Debug, Default)]
pub struct Body {
	pub x: f64,
	pub y: f64,
	px: f64,
	py: f64,
	/// Pinned bodies ignore forces and stay where they were put.
	pub pinned: bool,
	/// Number of links touching this body.
	weight: f64,
}

/// The layout simulation: bodies, links and the cooling schedule.
pub struct ForceSimulation {
	bodies: Vec<Body>,
	links: Vec<(usize, usize)>,
	config: ForceConfig,
	center: (f64, f64),
	alpha: f64,
}

impl ForceSimulation {
	/// Create a running simulation for `node_count` bodies in a
	/// `width` × `height` space.
	///
	/// Links must reference bodies by index; out-of-range links are dropped.
	pub fn new(
		node_count: usize,
		links: Vec<(usize, usize)>,
		width: f64,
		height: f64,
		config: ForceConfig,
	) -> Self {
		let links: Vec<_> = links
			.into_iter()
			.filter(|&(s, t)| s < node_count && t < node_count)
			.collect();
		let (cx, cy) = (width / 2.0, height / 2.0);

		let mut bodies: Vec<Body> = (0..node_count)
			.map(|i| {
				let angle = (i as f64) * 2.0 * PI / node_count as f64;
				let (x, y) = (
					cx + INITIAL_SPREAD * angle.cos(),
					cy + INITIAL_SPREAD * angle.sin(),
				);
				Body {
					x,
					y,
					px: x,
					py: y,
					pinned: false,
					weight: 0.0,
				}
			})
			.collect();
		for &(s, t) in &links {
			bodies[s].weight += 1.0;
			bodies[t].weight += 1.0;
		}

		let alpha = config.initial_alpha;
		Self {
			bodies,
			links,
			config,
			center: (cx, cy),
			alpha,
		}
	}

	pub fn bodies(&self) -> &[Body] {
		&self.bodies
	}

	/// Current position of body `idx`.
	pub fn position(&self, idx: usize) -> Option<(f64, f64)> {
		self.bodies.get(idx).map(|b| (b.x, b.y))
	}

	pub fn is_running(&self) -> bool {
		self.alpha > 0.0
	}

	/// Reheat the simulation to its initial alpha.
	pub fn resume(&mut self) {
		self.alpha = self.config.initial_alpha;
	}

	/// Stop immediately, leaving bodies where they are.
	pub fn stop(&mut self) {
		self.alpha = 0.0;
	}

	/// Pin body `idx` at its current position.
	pub fn pin(&mut self, idx: usize) {
		if let Some(b) = self.bodies.get_mut(idx) {
			b.pinned = true;
			b.px = b.x;
			b.py = b.y;
		}
	}

	/// Move a pinned body and reheat so its neighbors follow.
	pub fn move_pinned(&mut self, idx: usize, x: f64, y: f64) {
		if let Some(b) = self.bodies.get_mut(idx) {
			b.pinned = true;
			b.x = x;
			b.y = y;
			b.px = x;
			b.py = y;
		}
		self.resume();
	}

	pub fn unpin(&mut self, idx: usize) {
		if let Some(b) = self.bodies.get_mut(idx) {
			b.pinned = false;
		}
	}

	/// Advance one step. Returns `false` once the simulation has cooled and
	/// no longer moves anything.
	pub fn tick(&mut self) -> bool {
		if self.alpha <= 0.0 {
			return false;
		}
		self.alpha *= self.config.alpha_decay;
		if self.alpha < self.config.alpha_min {
			self.alpha = 0.0;
			return false;
		}

		self.apply_links();
		self.apply_gravity();
		self.apply_charge();
		self.integrate();
		true
	}

	fn apply_links(&mut self) {
		let strength = self.alpha * self.config.link_strength;
		for &(s, t) in &self.links {
			if s == t {
				continue;
			}
			let (src, tgt) = (&self.bodies[s], &self.bodies[t]);
			let (mut dx, mut dy) = (tgt.x - src.x, tgt.y - src.y);
			let dist_sq = dx * dx + dy * dy;
			if dist_sq <= 0.0 {
				continue;
			}
			let dist = dist_sq.sqrt();
			let f = strength * (dist - self.config.link_distance) / dist;
			dx *= f;
			dy *= f;

			let k = src.weight / (tgt.weight + src.weight);
			let tgt = &mut self.bodies[t];
			tgt.x -= dx * k;
			tgt.y -= dy * k;
			let src = &mut self.bodies[s];
			src.x += dx * (1.0 - k);
			src.y += dy * (1.0 - k);
		}
	}

	fn apply_gravity(&mut self) {
		let k = self.alpha * self.config.gravity;
		if k == 0.0 {
			return;
		}
		let (cx, cy) = self.center;
		for b in self.bodies.iter_mut().filter(|b| !b.pinned) {
			b.x += (cx - b.x) * k;
			b.y += (cy - b.y) * k;
		}
	}

	/// Charge only adjusts previous positions, so reading current positions
	/// of other bodies mid-loop sees a consistent snapshot.
	fn apply_charge(&mut self) {
		let charge = self.alpha * self.config.charge;
		if charge == 0.0 {
			return;
		}
		for i in 0..self.bodies.len() {
			if self.bodies[i].pinned {
				continue;
			}
			let (xi, yi) = (self.bodies[i].x, self.bodies[i].y);
			let (mut dpx, mut dpy) = (0.0, 0.0);
			for (j, other) in self.bodies.iter().enumerate() {
				if i == j {
					continue;
				}
				let (dx, dy) = (other.x - xi, other.y - yi);
				let dist_sq = dx * dx + dy * dy;
				if dist_sq <= 0.0 {
					continue;
				}
				let f = charge / dist_sq;
				dpx += dx * f;
				dpy += dy * f;
			}
			let b = &mut self.bodies[i];
			b.px -= dpx;
			b.py -= dpy;
		}
	}

	fn integrate(&mut self) {
		let friction = self.config.friction;
		for b in &mut self.bodies {
			if b.pinned {
				b.x = b.px;
				b.y = b.py;
			} else {
				let (x, y) = (b.x, b.y);
				b.x -= (b.px - x) * friction;
				b.y -= (b.py - y) * friction;
				b.px = x;
				b.py = y;
			}
		}
	}
}
