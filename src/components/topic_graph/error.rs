use thiserror::Error;

/// The payload parsed as JSON but does not describe a usable graph.
#[derive(Debug, Error)]
pub enum DataShapeError {
	#[error("malformed graph payload: {0}")]
	Malformed(#[source] serde_json::Error),
	#[error("duplicate node id `{id}`")]
	DuplicateNode { id: String },
	#[error("edge #{edge} references unknown node `{id}`")]
	UnknownEndpoint { edge: usize, id: String },
}

/// The initial fetch failed before a graph could be built.
#[derive(Debug, Error)]
pub enum DataLoadError {
	#[error("failed to fetch graph data: {0}")]
	Fetch(String),
	#[error("fetching {url} returned HTTP {status}")]
	Status { url: String, status: u16 },
	#[error("graph data is not valid JSON: {0}")]
	Parse(#[source] serde_json::Error),
	#[error(transparent)]
	Shape(#[from] DataShapeError),
}
