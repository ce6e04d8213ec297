use super::model::{TopicGraph, TopicIdx};
use super::selection::Selection;

pub const NO_RATIONALES: &str = "No specific rationales available for this topic.";

#[derive(Clone, Debug, PartialEq)]
pub struct RationaleEntry {
	pub topic: String,
	pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RationaleGroup {
	pub category: String,
	pub items: Vec<RationaleEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelBody {
	Groups(Vec<RationaleGroup>),
	Empty,
}

/// What the side panel shows: instructions while idle, rationales once a node is selected.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PanelView {
	#[default]
	Instructions,
	Rationale {
		title: String,
		level_label: String,
		body: PanelBody,
	},
}

impl PanelView {
	pub fn for_topic(graph: &TopicGraph, idx: TopicIdx) -> Self {
		let Some(topic) = graph.topic(idx) else {
			return PanelView::Instructions;
		};

		let body = if topic.rationales.is_empty() {
			PanelBody::Empty
		} else {
			PanelBody::Groups(
				topic
					.rationales
					.iter()
					.map(|(category, items)| RationaleGroup {
						category: category.clone(),
						items: items
							.iter()
							.map(|item| RationaleEntry {
								topic: item.cs_topic.clone(),
								text: item.text.clone(),
							})
							.collect(),
					})
					.collect(),
			)
		};

		PanelView::Rationale {
			title: topic.label.clone(),
			level_label: topic.level.label().to_owned(),
			body,
		}
	}

	pub fn for_selection(graph: &TopicGraph, selection: &Selection) -> Self {
		selection
			.selected()
			.map(|idx| Self::for_topic(graph, idx))
			.unwrap_or_default()
	}

	pub fn shows_instructions(&self) -> bool {
		matches!(self, PanelView::Instructions)
	}
}
