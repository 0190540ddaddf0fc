//! Categorical coloring of community groups.

use std::collections::HashMap;

/// RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Twenty colors in ten light/dark pairs.
pub const CATEGORY20: [Color; 20] = [
	Color::rgb(0x1f, 0x77, 0xb4), // Blue
	Color::rgb(0xae, 0xc7, 0xe8), // Light blue
	Color::rgb(0xff, 0x7f, 0x0e), // Orange
	Color::rgb(0xff, 0xbb, 0x78), // Light orange
	Color::rgb(0x2c, 0xa0, 0x2c), // Green
	Color::rgb(0x98, 0xdf, 0x8a), // Light green
	Color::rgb(0xd6, 0x27, 0x28), // Red
	Color::rgb(0xff, 0x98, 0x96), // Light red
	Color::rgb(0x94, 0x67, 0xbd), // Purple
	Color::rgb(0xc5, 0xb0, 0xd5), // Light purple
	Color::rgb(0x8c, 0x56, 0x4b), // Brown
	Color::rgb(0xc4, 0x9c, 0x94), // Light brown
	Color::rgb(0xe3, 0x77, 0xc2), // Pink
	Color::rgb(0xf7, 0xb6, 0xd2), // Light pink
	Color::rgb(0x7f, 0x7f, 0x7f), // Gray
	Color::rgb(0xc7, 0xc7, 0xc7), // Light gray
	Color::rgb(0xbc, 0xbd, 0x22), // Olive
	Color::rgb(0xdb, 0xdb, 0x8d), // Light olive
	Color::rgb(0x17, 0xbe, 0xcf), // Cyan
	Color::rgb(0x9e, 0xda, 0xe5), // Light cyan
];

/// Ordinal color scale: each new group takes the next palette color, in the
/// order groups are first seen, wrapping after the palette runs out.
#[derive(Clone, Debug)]
pub struct ColorScale {
	palette: Vec<Color>,
	assigned: HashMap<u32, usize>,
}

impl Default for ColorScale {
	fn default() -> Self {
		Self::new(CATEGORY20.to_vec())
	}
}

impl ColorScale {
	pub fn new(palette: Vec<Color>) -> Self {
		Self {
			palette,
			assigned: HashMap::new(),
		}
	}

	/// Color for `group`, assigning one on first use.
	pub fn color(&mut self, group: u32) -> Color {
		let next = self.assigned.len();
		let slot = *self.assigned.entry(group).or_insert(next);
		self.palette
			.get(slot % self.palette.len().max(1))
			.copied()
			.unwrap_or(Color::rgb(128, 128, 128))
	}
}
