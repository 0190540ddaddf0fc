//! Text panels around the graph.
//!
//! The `span` class names are the page contract: styling and any surrounding
//! markup key off them.

use leptos::prelude::*;

use super::panel::{NodeDetail, ProfileText};

/// Focal account summary, bound once.
#[component]
pub fn ProfilePanel(profile: ProfileText) -> impl IntoView {
	view! {
		<section class="profile">
			<h2><span class="id">{profile.handle}</span></h2>
			<p><span class="name">{profile.name}</span></p>
			<p><span class="description">{profile.description}</span></p>
			<p>"Followers: "<span class="followers_count">{profile.followers_count}</span></p>
			<p>"Following: "<span class="friends_count">{profile.friends_count}</span></p>
		</section>
	}
}

/// Detail of the selected community. Every field reads from the same
/// signal, so a new selection replaces the whole panel at once.
#[component]
pub fn NodeDetailPanel(#[prop(into)] selected: Signal<Option<NodeDetail>>) -> impl IntoView {
	let text = move |field: fn(&NodeDetail) -> String| {
		move || selected.with(|d| d.as_ref().map(field).unwrap_or_default())
	};
	let lines = move |field: fn(&NodeDetail) -> Vec<String>| {
		move || {
			selected
				.with(|d| d.as_ref().map(field).unwrap_or_default())
				.into_iter()
				.map(|line| view! { {line}<br /> })
				.collect_view()
		}
	};
	let sentiment = move || selected.with(|d| d.as_ref().map_or("", |d| d.sentiment.label()));

	view! {
		<section class="community">
			<p>"Community size: "<span class="comm_size">{text(|d| d.comm_size.clone())}</span></p>
			<p>"Most connected:"<br /><span class="most_connected">{lines(|d| d.most_connected.clone())}</span></p>
			<p>"Hashtags:"<br /><span class="hashtags">{lines(|d| d.hashtags.clone())}</span></p>
			<p>"Mentioned:"<br /><span class="mentioned">{lines(|d| d.mentioned.clone())}</span></p>
			<p>"Topics:"<br /><span class="topics">{lines(|d| d.topics.clone())}</span></p>
			<p>"Sentiment: "<span class="sentiment">{sentiment}</span></p>
			<p>"Density: "<span class="density">{text(|d| d.density.clone())}</span></p>
			<p>"Modularity: "<span class="modularity">{text(|d| d.modularity.clone())}</span></p>
		</section>
	}
}
