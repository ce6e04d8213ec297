//! Fade decisions as a pure function of selection and filter.
//!
//! Nothing here is cached between state changes; callers recompute an
//! [`Emphasis`] after every transition.

use super::filter::Filter;
use super::model::{TopicGraph, TopicIdx};
use super::selection::Selection;

pub fn node_faded(
	graph: &TopicGraph,
	selection: &Selection,
	filter: &Filter,
	idx: TopicIdx,
) -> bool {
	let by_selection = !selection.admits(idx);
	let by_filter = filter.is_active()
		&& graph
			.topic(idx)
			.is_some_and(|topic| !filter.admits(topic));
	by_selection || by_filter
}

pub fn edge_faded(
	graph: &TopicGraph,
	selection: &Selection,
	filter: &Filter,
	(source, target): (TopicIdx, TopicIdx),
) -> bool {
	node_faded(graph, selection, filter, source)
		|| node_faded(graph, selection, filter, target)
		|| selection
			.neighborhood()
			.is_some_and(|hood| !(hood.contains(&source) && hood.contains(&target)))
}

/// Per-element visual flags for one state of the explorer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Emphasis {
	pub nodes: Vec<bool>,
	pub edges: Vec<bool>,
	pub selected: Option<TopicIdx>,
}

impl Emphasis {
	pub fn compute(graph: &TopicGraph, selection: &Selection, filter: &Filter) -> Self {
		Self {
			nodes: (0..graph.len())
				.map(|idx| node_faded(graph, selection, filter, idx))
				.collect(),
			edges: graph
				.edges()
				.iter()
				.map(|&edge| edge_faded(graph, selection, filter, edge))
				.collect(),
			selected: selection.selected(),
		}
	}

	pub fn node_faded(&self, idx: TopicIdx) -> bool {
		self.nodes.get(idx).copied().unwrap_or(false)
	}

	pub fn edge_faded(&self, edge: usize) -> bool {
		self.edges.get(edge).copied().unwrap_or(false)
	}

	pub fn is_selected(&self, idx: TopicIdx) -> bool {
		self.selected == Some(idx)
	}

	pub fn faded_node_count(&self) -> usize {
		self.nodes.iter().filter(|faded| **faded).count()
	}
}
