//! Aspect-preserving responsive sizing of the drawing surface.

/// Fits the SVG to its container width while keeping the aspect ratio it was
/// created with and never exceeding a maximum height.
#[derive(Clone, Copy, Debug)]
pub struct ResponsiveSize {
	aspect: f64,
	max_height: f64,
}

impl ResponsiveSize {
	/// Capture the aspect ratio of the surface's initial size.
	pub fn new(initial_width: f64, initial_height: f64, max_height: f64) -> Self {
		let aspect = if initial_height > 0.0 {
			initial_width / initial_height
		} else {
			1.0
		};
		Self { aspect, max_height }
	}

	/// Width and height for a container `container_width` pixels wide.
	///
	/// Height is derived first (and capped), then width is recomputed from it,
	/// so the result always has the captured aspect ratio.
	pub fn fit(&self, container_width: f64) -> (u32, u32) {
		let height = (container_width / self.aspect).round().min(self.max_height).max(0.0);
		let width = (height * self.aspect).round();
		(width as u32, height as u32)
	}
}
