//! Graph dataset structures injected into the page by the data-preparation stage.

use std::collections::HashMap;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::error::DatasetError;

/// Profile of the focal account whose follower network is drawn.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RootProfile {
	/// Platform account id, when the data stage recorded it.
	#[serde(rename = "id_")]
	pub id: Option<u64>,
	pub screen_name: String,
	/// Display name.
	#[serde(rename = "name_", alias = "name")]
	pub display_name: String,
	pub description: String,
	pub followers_count: u64,
	pub friends_count: u64,
}

/// A detected community, drawn as one circle.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Node {
	/// Unique name, also used as the circle's label (e.g. "0-3").
	pub name: String,
	/// Categorical cluster id; drives the fill color.
	pub group: u32,
	/// Number of accounts in the community.
	pub comm_size: u64,
	#[serde(deserialize_with = "labels")]
	pub most_connected: Vec<String>,
	#[serde(deserialize_with = "labels")]
	pub hashtags: Vec<String>,
	#[serde(deserialize_with = "labels")]
	pub mentioned: Vec<String>,
	/// Topic groups, each a list of `[label, weight]` pairs.
	#[serde(deserialize_with = "topic_groups")]
	pub topics: Vec<Vec<(String, f64)>>,
	/// Sentiment tuple; the first element is the mean happiness score. A
	/// community without tweets has no score (`null`).
	#[serde(deserialize_with = "scores")]
	pub sentiment: Vec<Option<f64>>,
	pub density: f64,
	pub modularity: Option<f64>,
}

impl Node {
	/// Mean happiness score, if the data stage produced one.
	pub fn sentiment_score(&self) -> Option<f64> {
		self.sentiment.first().copied().flatten()
	}
}

/// Reference to a node from an edge: an index into `nodes` or a node name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EdgeEnd {
	/// Position in `nodes`.
	Index(usize),
	/// A node's `name`.
	Name(String),
}

impl fmt::Display for EdgeEnd {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EdgeEnd::Index(i) => write!(f, "#{i}"),
			EdgeEnd::Name(name) => f.write_str(name),
		}
	}
}

/// A weighted edge between two communities.
#[derive(Clone, Debug, Deserialize)]
pub struct Edge {
	pub source: EdgeEnd,
	pub target: EdgeEnd,
	#[serde(default = "default_edge_value")]
	pub value: f64,
}

fn default_edge_value() -> f64 {
	1.0
}

/// Complete dataset: focal profile, nodes and links.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GraphDataset {
	pub root: RootProfile,
	pub nodes: Vec<Node>,
	pub links: Vec<Edge>,
}

impl GraphDataset {
	/// Parse a dataset from its JSON form.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Resolve every edge to `(source_index, target_index)`.
	///
	/// Entries are `None` for edges with an endpoint that names no node.
	pub fn resolve_links(&self) -> Vec<Option<(usize, usize)>> {
		let by_name: HashMap<&str, usize> = self
			.nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.name.as_str(), i))
			.collect();
		let resolve = |r: &EdgeEnd| match r {
			EdgeEnd::Index(i) if *i < self.nodes.len() => Some(*i),
			EdgeEnd::Index(_) => None,
			EdgeEnd::Name(name) => by_name.get(name.as_str()).copied(),
		};
		self.links
			.iter()
			.map(|l| Some((resolve(&l.source)?, resolve(&l.target)?)))
			.collect()
	}

	/// Check for data the view can only draw incorrectly.
	///
	/// Reports the first problem found; the view still renders what it can.
	pub fn validate(&self) -> Result<(), DatasetError> {
		if self.nodes.is_empty() {
			return Err(DatasetError::NoNodes);
		}
		if self.root.followers_count == 0 {
			return Err(DatasetError::ZeroFollowers {
				screen_name: self.root.screen_name.clone(),
			});
		}
		for (index, (link, resolved)) in self.links.iter().zip(self.resolve_links()).enumerate() {
			if resolved.is_none() {
				return Err(DatasetError::DanglingEdge {
					index,
					from: link.source.to_string(),
					to: link.target.to_string(),
				});
			}
		}
		Ok(())
	}
}

/// Accepts a list of strings or numbers (unresolved account ids), or null.
fn labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
	Ok(values
		.into_iter()
		.map(|v| match v {
			Value::String(s) => s,
			other => other.to_string(),
		})
		.collect())
}

/// Accepts topic groups as a list, or as an object keyed by topic index.
///
/// Object entries are ordered by their numeric key, so `"10"` follows `"2"`.
fn topic_groups<'de, D>(deserializer: D) -> Result<Vec<Vec<(String, f64)>>, D::Error>
where
	D: Deserializer<'de>,
{
	let groups = match Option::<Value>::deserialize(deserializer)? {
		None | Some(Value::Null) => return Ok(Vec::new()),
		Some(Value::Array(groups)) => groups,
		Some(Value::Object(map)) => {
			let mut keyed: Vec<_> = map.into_iter().collect();
			keyed.sort_by(|(a, _), (b, _)| {
				let index = |k: &str| k.parse::<u64>().unwrap_or(u64::MAX);
				index(a).cmp(&index(b)).then_with(|| a.cmp(b))
			});
			keyed.into_iter().map(|(_, group)| group).collect()
		}
		Some(other) => {
			return Err(D::Error::custom(format!(
				"expected topic groups as a list or object, found {other}"
			)));
		}
	};
	groups
		.into_iter()
		.map(|group| serde_json::from_value(group).map_err(D::Error::custom))
		.collect()
}

/// Accepts a list of scores where any entry, or the whole list, may be null.
fn scores<'de, D>(deserializer: D) -> Result<Vec<Option<f64>>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<Vec<Option<f64>>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = r##"{
		"directed": true,
		"root": {
			"id_": 42,
			"screen_name": "ZipfianAcademy",
			"name_": "Zipfian Academy",
			"description": "Data science bootcamp",
			"followers_count": 2000,
			"friends_count": 150
		},
		"nodes": [
			{
				"id": "0-0", "name": "0-0", "group": 0, "comm_size": 120,
				"most_connected": ["alice", 1234],
				"hashtags": ["#data"], "mentioned": ["@bob"],
				"topics": [[["python", 0.9], ["pandas", 0.4]]],
				"sentiment": [6.8, 0.4], "density": 0.05, "modularity": 0.41
			},
			{ "name": "1-0", "group": 1, "comm_size": 300, "most_connected": null, "modularity": null }
		],
		"links": [ { "source": 0, "target": 1, "value": 1 } ]
	}"##;

	#[test]
	fn parses_node_link_json() {
		let data = GraphDataset::from_json(SAMPLE).unwrap();
		assert_eq!(data.root.screen_name, "ZipfianAcademy");
		assert_eq!(data.root.display_name, "Zipfian Academy");
		assert_eq!(data.root.id, Some(42));
		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.nodes[0].most_connected, vec!["alice", "1234"]);
		assert_eq!(data.nodes[0].topics[0][1], ("pandas".to_string(), 0.4));
		assert_eq!(data.nodes[0].sentiment_score(), Some(6.8));
		assert!(data.nodes[1].most_connected.is_empty());
		assert_eq!(data.nodes[1].modularity, None);
		assert_eq!(data.links[0].source, EdgeEnd::Index(0));
	}

	#[test]
	fn topics_accept_an_object_keyed_by_index() {
		let data = GraphDataset::from_json(
			r#"{ "nodes": [ {
				"name": "0-0",
				"topics": {
					"10": [["late", 0.1]],
					"0": [["python", 0.9], ["pandas", 0.4]],
					"2": [["data", 0.2]]
				}
			} ] }"#,
		)
		.unwrap();
		let topics = &data.nodes[0].topics;
		assert_eq!(topics.len(), 3);
		assert_eq!(topics[0][0], ("python".to_string(), 0.9));
		assert_eq!(topics[1][0].0, "data");
		assert_eq!(topics[2][0].0, "late");
	}

	#[test]
	fn missing_topics_and_sentiment_are_empty() {
		let data = GraphDataset::from_json(
			r#"{ "nodes": [
				{ "name": "a", "topics": null, "sentiment": [null, 0.0] },
				{ "name": "b", "sentiment": null }
			] }"#,
		)
		.unwrap();
		assert!(data.nodes[0].topics.is_empty());
		assert_eq!(data.nodes[0].sentiment_score(), None);
		assert_eq!(data.nodes[1].sentiment_score(), None);
		assert!(GraphDataset::from_json(r#"{ "nodes": [ { "topics": 3 } ] }"#).is_err());
	}

	#[test]
	fn resolves_links_by_index_and_name() {
		let mut data = GraphDataset::from_json(SAMPLE).unwrap();
		data.links.push(Edge {
			source: EdgeEnd::Name("1-0".into()),
			target: EdgeEnd::Name("0-0".into()),
			value: 2.0,
		});
		data.links.push(Edge {
			source: EdgeEnd::Index(0),
			target: EdgeEnd::Index(9),
			value: 1.0,
		});
		assert_eq!(
			data.resolve_links(),
			vec![Some((0, 1)), Some((1, 0)), None]
		);
	}

	#[test]
	fn validate_reports_dangling_edges() {
		let mut data = GraphDataset::from_json(SAMPLE).unwrap();
		assert!(data.validate().is_ok());
		data.links.push(Edge {
			source: EdgeEnd::Name("missing".into()),
			target: EdgeEnd::Index(0),
			value: 1.0,
		});
		assert!(matches!(
			data.validate(),
			Err(DatasetError::DanglingEdge { index: 1, .. })
		));
	}

	#[test]
	fn validate_reports_zero_followers_and_empty_graphs() {
		let mut data = GraphDataset::from_json(SAMPLE).unwrap();
		data.root.followers_count = 0;
		assert!(matches!(data.validate(), Err(DatasetError::ZeroFollowers { .. })));
		assert!(matches!(
			GraphDataset::default().validate(),
			Err(DatasetError::NoNodes)
		));
	}
}
