//! Errors raised while loading and checking the graph dataset.

use thiserror::Error;

/// Failure to obtain a dataset from the hosting page.
#[derive(Debug, Error)]
pub enum LoadError {
	/// Not running in a page.
	#[error("no browser window or document available")]
	NoDocument,
	/// The page has no element with the dataset id.
	#[error("no <script id=\"{0}\"> element in the page")]
	MissingElement(String),
	/// The element with the dataset id is not a script.
	#[error("element #{0} is not a <script> element")]
	NotAScript(String),
	/// The script text is not a valid dataset.
	#[error("failed to parse graph data: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Data the view can draw only incorrectly.
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
	/// Nothing to draw.
	#[error("dataset has no nodes")]
	NoNodes,
	/// Radii are relative to the follower count, which is zero.
	#[error("@{screen_name} has no followers; node radii fall back to the minimum")]
	ZeroFollowers {
		/// Focal account's screen name.
		screen_name: String,
	},
	/// An edge endpoint names no node; the edge is not drawn.
	#[error("link {index} ({from} -> {to}) references a missing node")]
	DanglingEdge {
		/// Position of the edge in `links`.
		index: usize,
		/// Source endpoint as written in the data.
		from: String,
		/// Target endpoint as written in the data.
		to: String,
	},
}
