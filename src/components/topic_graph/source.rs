use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::error::DataLoadError;
use super::model::TopicGraph;

fn js_error(value: JsValue) -> DataLoadError {
	DataLoadError::Fetch(format!("{value:?}"))
}

/// Body text -> graph. Invalid JSON and a malformed graph are reported separately.
pub fn parse_graph(text: &str) -> Result<TopicGraph, DataLoadError> {
	let value = serde_json::from_str::<serde_json::Value>(text).map_err(DataLoadError::Parse)?;
	Ok(TopicGraph::from_value(value)?)
}

/// One-shot fetch of the graph file. Never retried.
pub async fn fetch_graph(url: &str) -> Result<TopicGraph, DataLoadError> {
	let window = web_sys::window().ok_or_else(|| DataLoadError::Fetch("no window".to_owned()))?;
	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(js_error)?
		.dyn_into()
		.map_err(js_error)?;

	if !response.ok() {
		return Err(DataLoadError::Status {
			url: url.to_owned(),
			status: response.status(),
		});
	}

	let body = JsFuture::from(response.text().map_err(js_error)?)
		.await
		.map_err(js_error)?;
	let text = body
		.as_string()
		.ok_or_else(|| DataLoadError::Fetch("response body is not text".to_owned()))?;
	parse_graph(&text)
}

#[cfg(test)]
mod tests {
	use super::super::error::DataShapeError;
	use super::super::model::tests::sample_json;
	use super::*;

	#[test]
	fn test_parse_sample() {
		let graph = parse_graph(sample_json()).unwrap();
		assert_eq!(graph.len(), 4);
	}

	#[test]
	fn test_invalid_json_is_load_error() {
		let result = parse_graph("{\"nodes\": [");
		assert!(matches!(result, Err(DataLoadError::Parse(_))));
	}

	#[test]
	fn test_malformed_graph_is_shape_error() {
		let result = parse_graph(r#"{"edges": []}"#);
		assert!(matches!(
			result,
			Err(DataLoadError::Shape(DataShapeError::Malformed(_)))
		));

		let result = parse_graph(
			r#"{"nodes": [], "edges": [{"source": "x", "target": "y"}]}"#,
		);
		assert!(matches!(
			result,
			Err(DataLoadError::Shape(DataShapeError::UnknownEndpoint { .. }))
		));
	}
}
