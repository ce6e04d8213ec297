use std::collections::{HashMap, HashSet};

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use super::error::DataShapeError;
use super::types::{CalcLevel, GraphData, RationaleRecord};

/// Dense index of a topic inside [`TopicGraph`]. Layout bodies share it.
pub type TopicIdx = usize;

#[derive(Clone, Debug, PartialEq)]
pub struct Rationale {
	pub cs_topic: String,
	pub text: String,
}

impl From<RationaleRecord> for Rationale {
	fn from(record: RationaleRecord) -> Self {
		Self {
			cs_topic: record.cs_topic,
			text: record.rationale,
		}
	}
}

/// Immutable domain half of a node. Positions live in the layout engine.
#[derive(Clone, Debug)]
pub struct Topic {
	pub id: String,
	pub label: String,
	pub level: CalcLevel,
	pub categories: IndexSet<String>,
	pub rationales: IndexMap<String, Vec<Rationale>>,
}

impl Topic {
	pub fn in_category(&self, category: &str) -> bool {
		self.categories.contains(category)
	}
}

#[derive(Clone, Debug, Default)]
pub struct TopicGraph {
	topics: Vec<Topic>,
	edges: Vec<(TopicIdx, TopicIdx)>,
	adjacency: Vec<Vec<TopicIdx>>,
}

impl TopicGraph {
	pub fn from_value(value: serde_json::Value) -> Result<Self, DataShapeError> {
		let data = GraphData::deserialize(value).map_err(DataShapeError::Malformed)?;
		Self::load(data)
	}

	/// Resolves string endpoints into indices and precomputes adjacency.
	pub fn load(data: GraphData) -> Result<Self, DataShapeError> {
		let mut index_by_id = HashMap::with_capacity(data.nodes.len());
		let mut topics = Vec::with_capacity(data.nodes.len());

		for record in data.nodes {
			if index_by_id.contains_key(&record.id) {
				return Err(DataShapeError::DuplicateNode { id: record.id });
			}
			index_by_id.insert(record.id.clone(), topics.len());
			topics.push(Topic {
				id: record.id,
				label: record.label,
				level: record.calc_level,
				categories: record.cs_categories.into_iter().collect(),
				rationales: record
					.rationales
					.unwrap_or_default()
					.into_iter()
					.map(|(category, items)| {
						(category, items.into_iter().map(Rationale::from).collect())
					})
					.collect(),
			});
		}

		let resolve = |edge: usize, id: &str| {
			index_by_id
				.get(id)
				.copied()
				.ok_or_else(|| DataShapeError::UnknownEndpoint {
					edge,
					id: id.to_owned(),
				})
		};

		let mut edges = Vec::with_capacity(data.edges.len());
		let mut adjacency = vec![Vec::new(); topics.len()];
		for (edge, record) in data.edges.iter().enumerate() {
			let source = resolve(edge, &record.source)?;
			let target = resolve(edge, &record.target)?;
			edges.push((source, target));

			if source != target {
				adjacency[source].push(target);
				adjacency[target].push(source);
			}
		}
		for neighbors in &mut adjacency {
			neighbors.sort_unstable();
			neighbors.dedup();
		}

		Ok(Self {
			topics,
			edges,
			adjacency,
		})
	}

	pub fn len(&self) -> usize {
		self.topics.len()
	}

	pub fn is_empty(&self) -> bool {
		self.topics.is_empty()
	}

	pub fn topics(&self) -> &[Topic] {
		&self.topics
	}

	pub fn topic(&self, idx: TopicIdx) -> Option<&Topic> {
		self.topics.get(idx)
	}

	pub fn edges(&self) -> &[(TopicIdx, TopicIdx)] {
		&self.edges
	}

	#[cfg(test)]
	pub fn index_of(&self, id: &str) -> Option<TopicIdx> {
		self.topics.iter().position(|topic| topic.id == id)
	}

	pub fn neighbors_of(&self, idx: TopicIdx) -> &[TopicIdx] {
		self.adjacency.get(idx).map(Vec::as_slice).unwrap_or_default()
	}

	/// The topic itself plus everything one edge away.
	pub fn neighborhood(&self, idx: TopicIdx) -> HashSet<TopicIdx> {
		let mut set = HashSet::with_capacity(self.neighbors_of(idx).len() + 1);
		set.insert(idx);
		set.extend(self.neighbors_of(idx).iter().copied());
		set
	}

	/// Distinct CS categories in first-seen order.
	pub fn categories(&self) -> Vec<&str> {
		let mut seen = IndexSet::new();
		for topic in &self.topics {
			seen.extend(topic.categories.iter().map(String::as_str));
		}
		seen.into_iter().collect()
	}

	pub fn levels(&self) -> Vec<CalcLevel> {
		CalcLevel::ALL
			.into_iter()
			.filter(|level| self.topics.iter().any(|topic| topic.level == *level))
			.collect()
	}
}
