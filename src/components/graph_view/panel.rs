//! Text shown in the profile and community-detail panels.
//!
//! Both panels are plain text models built in one go from the dataset, so a
//! view only ever swaps a complete value in; nothing is patched field by field.

use std::fmt;

use super::types::{Node, RootProfile};

/// Scores above this read as happy.
const HAPPY_ABOVE: f64 = 6.5;
/// Scores below this read as sad.
const SAD_BELOW: f64 = 4.5;

/// Three-way bucket of a community's mean happiness score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentiment {
	Happy,
	Neutral,
	Sad,
}

impl Sentiment {
	/// Classify a score. Both thresholds are strict, so 4.5 and 6.5 are
	/// neutral. A missing score is neutral too.
	pub fn classify(score: Option<f64>) -> Self {
		match score {
			Some(s) if s > HAPPY_ABOVE => Sentiment::Happy,
			Some(s) if s < SAD_BELOW => Sentiment::Sad,
			_ => Sentiment::Neutral,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Sentiment::Happy => "Happy",
			Sentiment::Neutral => "Neutral",
			Sentiment::Sad => "Sad",
		}
	}
}

impl fmt::Display for Sentiment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Render a fraction as a percentage with at most one decimal: `0.1234` is
/// `12.3%`, `1.0` is `100%`.
pub fn format_percent(fraction: f64) -> String {
	let tenths = (fraction * 1000.0).round() / 10.0;
	format!("{tenths}%")
}

/// One line per topic group: the group's labels joined with `-`.
pub fn topic_lines(topics: &[Vec<(String, f64)>]) -> Vec<String> {
	topics
		.iter()
		.map(|group| {
			group
				.iter()
				.map(|(label, _)| label.as_str())
				.collect::<Vec<_>>()
				.join("-")
		})
		.collect()
}

/// Focal account fields, bound once at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileText {
	/// `@screen_name`
	pub handle: String,
	pub name: String,
	pub description: String,
	pub followers_count: String,
	pub friends_count: String,
}

impl From<&RootProfile> for ProfileText {
	fn from(root: &RootProfile) -> Self {
		Self {
			handle: format!("@{}", root.screen_name),
			name: root.display_name.clone(),
			description: root.description.clone(),
			followers_count: root.followers_count.to_string(),
			friends_count: root.friends_count.to_string(),
		}
	}
}

/// Every field of the community-detail panel for one selected node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDetail {
	pub name: String,
	pub comm_size: String,
	pub most_connected: Vec<String>,
	pub hashtags: Vec<String>,
	pub mentioned: Vec<String>,
	pub topics: Vec<String>,
	pub sentiment: Sentiment,
	pub density: String,
	pub modularity: String,
}

impl From<&Node> for NodeDetail {
	fn from(node: &Node) -> Self {
		Self {
			name: node.name.clone(),
			comm_size: node.comm_size.to_string(),
			most_connected: node.most_connected.clone(),
			hashtags: node.hashtags.clone(),
			mentioned: node.mentioned.clone(),
			topics: topic_lines(&node.topics),
			sentiment: Sentiment::classify(node.sentiment_score()),
			density: format_percent(node.density),
			modularity: format_percent(node.modularity.unwrap_or(0.0)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sentiment_thresholds_are_strict() {
		assert_eq!(Sentiment::classify(Some(6.51)), Sentiment::Happy);
		assert_eq!(Sentiment::classify(Some(6.5)), Sentiment::Neutral);
		assert_eq!(Sentiment::classify(Some(5.5)), Sentiment::Neutral);
		assert_eq!(Sentiment::classify(Some(4.5)), Sentiment::Neutral);
		assert_eq!(Sentiment::classify(Some(4.49)), Sentiment::Sad);
		assert_eq!(Sentiment::classify(None), Sentiment::Neutral);
		assert_eq!(Sentiment::Happy.to_string(), "Happy");
	}

	#[test]
	fn percent_keeps_one_decimal() {
		assert_eq!(format_percent(0.1234), "12.3%");
		assert_eq!(format_percent(1.0), "100%");
		assert_eq!(format_percent(0.05), "5%");
		assert_eq!(format_percent(0.0), "0%");
		assert_eq!(format_percent(0.4167), "41.7%");
	}

	#[test]
	fn topics_join_labels_per_group() {
		let topics = vec![
			vec![("a".to_string(), 0.9), ("b".to_string(), 0.5)],
			vec![("c".to_string(), 0.2)],
		];
		assert_eq!(topic_lines(&topics), vec!["a-b", "c"]);
		assert!(topic_lines(&[]).is_empty());
	}

	#[test]
	fn profile_text_prefixes_handle() {
		let root = RootProfile {
			screen_name: "ZipfianAcademy".into(),
			display_name: "Zipfian Academy".into(),
			followers_count: 2000,
			friends_count: 150,
			..Default::default()
		};
		let text = ProfileText::from(&root);
		assert_eq!(text.handle, "@ZipfianAcademy");
		assert_eq!(text.followers_count, "2000");
		assert_eq!(text.friends_count, "150");
	}

	#[test]
	fn node_detail_covers_every_field() {
		let node = Node {
			name: "0-1".into(),
			comm_size: 42,
			most_connected: vec!["alice".into(), "bob".into()],
			hashtags: vec!["#rust".into()],
			mentioned: vec!["@carol".into()],
			topics: vec![vec![("wasm".into(), 0.7), ("svg".into(), 0.2)]],
			sentiment: vec![Some(3.1), Some(0.2)],
			density: 0.1234,
			modularity: None,
			..Default::default()
		};
		let detail = NodeDetail::from(&node);
		assert_eq!(detail.comm_size, "42");
		assert_eq!(detail.most_connected, vec!["alice", "bob"]);
		assert_eq!(detail.topics, vec!["wasm-svg"]);
		assert_eq!(detail.sentiment, Sentiment::Sad);
		assert_eq!(detail.density, "12.3%");
		assert_eq!(detail.modularity, "0%");
	}

	#[test]
	fn community_without_a_score_is_neutral() {
		let data = crate::GraphDataset::from_json(
			r#"{ "nodes": [ { "name": "quiet", "sentiment": [null, null] } ] }"#,
		)
		.unwrap();
		let detail = NodeDetail::from(&data.nodes[0]);
		assert_eq!(detail.sentiment, Sentiment::Neutral);
	}
}
