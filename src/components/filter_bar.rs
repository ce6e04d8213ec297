use leptos::prelude::*;
use log::warn;

use super::topic_graph::{Filter, TopicGraph};

/// A button declared as `(filter_type, filter_value)`, like the data attributes it renders.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterButton {
	pub label: String,
	pub filter_type: &'static str,
	pub filter_value: String,
}

impl FilterButton {
	fn declare(label: impl Into<String>, filter_type: &'static str, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			filter_type,
			filter_value: value.into(),
		}
	}

	/// "All", one button per level present, then one per CS category.
	pub fn for_graph(graph: &TopicGraph) -> Vec<Self> {
		let mut buttons = vec![Self::declare("All", "all", "")];
		buttons.extend(
			graph
				.levels()
				.into_iter()
				.map(|level| Self::declare(level.label(), "calc_level", level.label())),
		);
		buttons.extend(
			graph
				.categories()
				.into_iter()
				.map(|category| Self::declare(category, "cs_categories", category)),
		);
		buttons
	}

	pub fn filter(&self) -> Option<Filter> {
		Filter::from_button(self.filter_type, &self.filter_value)
	}
}

#[component]
pub fn FilterBar(buttons: Vec<FilterButton>, active: RwSignal<Filter>) -> impl IntoView {
	let buttons = buttons
		.into_iter()
		.filter_map(|button| match button.filter() {
			Some(filter) => Some((button, filter)),
			None => {
				warn!(
					"ignoring filter button `{}` ({}={})",
					button.label, button.filter_type, button.filter_value
				);
				None
			}
		})
		.map(|(button, filter)| {
			let is_active = {
				let filter = filter.clone();
				move || active.with(|current| *current == filter)
			};
			view! {
				<button
					class="filter-btn"
					class:active=is_active
					data-filter-type=button.filter_type
					data-filter-value=button.filter_value
					on:click=move |_| active.set(filter.clone())
				>
					{button.label}
				</button>
			}
		})
		.collect_view();

	view! { <div class="filter-buttons">{buttons}</div> }
}
