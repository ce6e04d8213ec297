use super::layout::SimulationParameters;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipConfig {
	pub opacity: f64,
	pub show_secs: f64,
	pub hide_secs: f64,
	/// Added to the pointer's page position.
	pub offset: (f64, f64),
}

impl Default for TooltipConfig {
	fn default() -> Self {
		Self {
			opacity: 0.9,
			show_secs: 0.2,
			hide_secs: 0.5,
			offset: (10.0, -28.0),
		}
	}
}

/// Everything tunable about the explorer, with the stock values as defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplorerConfig {
	pub data_url: String,
	pub node_radius: f64,
	pub hit_radius: f64,
	pub label_offset: (f64, f64),
	/// Pointer travel (px) below which a press on a node counts as a click.
	pub click_slop: f64,
	/// Ticks run before the first frame is drawn.
	pub warmup_ticks: usize,
	pub tooltip: TooltipConfig,
	pub simulation: SimulationParameters,
}

impl Default for ExplorerConfig {
	fn default() -> Self {
		Self {
			data_url: "graph_data.json".to_owned(),
			node_radius: 8.0,
			hit_radius: 10.0,
			label_offset: (12.0, 3.0),
			click_slop: 3.0,
			warmup_ticks: 0,
			tooltip: TooltipConfig::default(),
			simulation: SimulationParameters::default(),
		}
	}
}

impl ExplorerConfig {
	pub fn with_data_url(mut self, url: impl Into<String>) -> Self {
		self.data_url = url.into();
		self
	}
}
