use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

/// Calculus course a topic belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum CalcLevel {
	#[serde(rename = "Calculus I")]
	CalculusI,
	#[serde(rename = "Calculus II")]
	CalculusII,
}

impl CalcLevel {
	pub const ALL: [CalcLevel; 2] = [CalcLevel::CalculusI, CalcLevel::CalculusII];

	pub fn label(self) -> &'static str {
		match self {
			CalcLevel::CalculusI => "Calculus I",
			CalcLevel::CalculusII => "Calculus II",
		}
	}
}

impl fmt::Display for CalcLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for CalcLevel {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		CalcLevel::ALL
			.into_iter()
			.find(|level| level.label() == s)
			.ok_or_else(|| format!("unknown calculus level `{s}`"))
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RationaleRecord {
	pub cs_topic: String,
	pub rationale: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TopicRecord {
	pub id: String,
	pub label: String,
	pub calc_level: CalcLevel,
	#[serde(default)]
	pub cs_categories: Vec<String>,
	#[serde(default)]
	pub rationales: Option<IndexMap<String, Vec<RationaleRecord>>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EdgeRecord {
	pub source: String,
	pub target: String,
}

/// Graph payload exactly as served by the data file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<TopicRecord>,
	pub edges: Vec<EdgeRecord>,
}
