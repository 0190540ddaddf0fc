//! Force-directed community graph view.
//!
//! Draws a social account's detected communities as an SVG force layout:
//! - One circle per community, sized by its share of the account's followers
//!   and colored by cluster group
//! - One line per link between communities, weighted by stroke width
//! - Click a circle to fill the detail panel, drag it to reposition
//! - Aspect-preserving resize with the surrounding container
//!
//! # Example
//!
//! ```ignore
//! use community_graph::{GraphDataset, GraphView, NodeDetail};
//!
//! let data = GraphDataset::from_json(json)?;
//! let selected = RwSignal::new(None::<NodeDetail>);
//!
//! view! { <GraphView data=data selected=selected /> }
//! ```

mod component;
pub mod config;
mod error;
mod palette;
pub mod panel;
mod panels;
mod resize;
mod simulation;
mod state;
mod types;

pub use component::GraphView;
pub use config::LayoutConfig;
pub use error::{DatasetError, LoadError};
pub use panel::{NodeDetail, ProfileText, Sentiment};
pub use panels::{NodeDetailPanel, ProfilePanel};
pub use types::{Edge, EdgeEnd, GraphDataset, Node, RootProfile};
