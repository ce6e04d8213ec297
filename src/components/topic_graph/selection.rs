use std::collections::HashSet;

use super::model::{TopicGraph, TopicIdx};

/// Which node the user clicked, together with its highlighted neighborhood.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Selection {
	#[default]
	Idle,
	NodeSelected {
		node: TopicIdx,
		neighborhood: HashSet<TopicIdx>,
	},
}

impl Selection {
	/// Replaces any previous selection in one step.
	pub fn select(&mut self, graph: &TopicGraph, node: TopicIdx) {
		*self = Selection::NodeSelected {
			node,
			neighborhood: graph.neighborhood(node),
		};
	}

	pub fn clear(&mut self) {
		*self = Selection::Idle;
	}

	pub fn is_active(&self) -> bool {
		matches!(self, Selection::NodeSelected { .. })
	}

	pub fn selected(&self) -> Option<TopicIdx> {
		match self {
			Selection::Idle => None,
			Selection::NodeSelected { node, .. } => Some(*node),
		}
	}

	pub fn neighborhood(&self) -> Option<&HashSet<TopicIdx>> {
		match self {
			Selection::Idle => None,
			Selection::NodeSelected { neighborhood, .. } => Some(neighborhood),
		}
	}

	/// `true` when idle, otherwise whether `idx` is in the highlighted neighborhood.
	pub fn admits(&self, idx: TopicIdx) -> bool {
		self.neighborhood().is_none_or(|hood| hood.contains(&idx))
	}
}

#[cfg(test)]
mod tests {
	use super::super::model::tests::sample_graph;
	use super::*;

	#[test]
	fn test_select_from_idle() {
		let graph = sample_graph();
		let limits = graph.index_of("limits").unwrap();
		let mut selection = Selection::default();
		assert!(!selection.is_active());

		selection.select(&graph, limits);
		assert_eq!(selection.selected(), Some(limits));
		let hood = selection.neighborhood().unwrap();
		assert!(hood.contains(&limits));
		for &n in graph.neighbors_of(limits) {
			assert!(hood.contains(&n));
		}
		assert_eq!(hood.len(), graph.neighbors_of(limits).len() + 1);
	}

	#[test]
	fn test_reselect_replaces_neighborhood() {
		let graph = sample_graph();
		let series = graph.index_of("series").unwrap();
		let integrals = graph.index_of("integrals").unwrap();
		let mut selection = Selection::default();

		selection.select(&graph, series);
		selection.select(&graph, integrals);
		assert_eq!(selection.selected(), Some(integrals));
		assert_eq!(selection.neighborhood(), Some(&graph.neighborhood(integrals)));
		assert!(!selection.admits(series));
	}

	#[test]
	fn test_clear_returns_to_idle() {
		let graph = sample_graph();
		let mut selection = Selection::default();
		selection.select(&graph, 0);
		selection.clear();
		assert_eq!(selection, Selection::Idle);
		assert!(selection.neighborhood().is_none());
		assert!((0..graph.len()).all(|idx| selection.admits(idx)));
	}
}
