use super::config::ExplorerConfig;
use super::emphasis::Emphasis;
use super::filter::Filter;
use super::layout::Simulation;
use super::model::{TopicGraph, TopicIdx};
use super::panel::PanelView;
use super::render::Frame;
use super::selection::Selection;
use super::tooltip::Tooltip;

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node: Option<TopicIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
}

/// Everything the explorer knows at one moment. Transitions are synchronous and total.
pub struct ExplorerState {
	pub graph: TopicGraph,
	pub simulation: Simulation,
	pub selection: Selection,
	pub filter: Filter,
	pub tooltip: Tooltip,
	pub drag: DragState,
	pub hover: Option<TopicIdx>,
	config: ExplorerConfig,
	emphasis: Emphasis,
}

impl ExplorerState {
	pub fn new(graph: TopicGraph, config: ExplorerConfig, width: f64, height: f64) -> Self {
		let mut simulation = Simulation::new(
			graph.len(),
			graph.edges(),
			config.simulation,
			(width / 2.0, height / 2.0),
		);
		simulation.run(config.warmup_ticks);
		let emphasis = Emphasis::compute(&graph, &Selection::Idle, &Filter::All);

		Self {
			graph,
			simulation,
			selection: Selection::Idle,
			filter: Filter::All,
			tooltip: Tooltip::new(config.tooltip),
			drag: DragState::default(),
			hover: None,
			config,
			emphasis,
		}
	}

	pub fn config(&self) -> &ExplorerConfig {
		&self.config
	}

	#[cfg(test)]
	pub fn emphasis(&self) -> &Emphasis {
		&self.emphasis
	}

	fn refresh_emphasis(&mut self) {
		self.emphasis = Emphasis::compute(&self.graph, &self.selection, &self.filter);
	}

	/// Topmost node under a canvas position, if any.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<TopicIdx> {
		let hit_sq = self.config.hit_radius * self.config.hit_radius;
		self.simulation
			.bodies()
			.iter()
			.enumerate()
			.rev()
			.find(|(_, body)| {
				let (dx, dy) = (body.x - x, body.y - y);
				dx * dx + dy * dy <= hit_sq
			})
			.map(|(idx, _)| idx)
	}

	pub fn select_node(&mut self, idx: TopicIdx) {
		if idx >= self.graph.len() {
			return;
		}
		self.selection.select(&self.graph, idx);
		self.refresh_emphasis();
		if let Some(topic) = self.graph.topic(idx) {
			log::debug!("selected `{}`", topic.id);
		}
	}

	pub fn clear_selection(&mut self) {
		if self.selection.is_active() {
			log::debug!("selection cleared");
		}
		self.selection.clear();
		self.refresh_emphasis();
	}

	/// Clears the selection first, then switches the filter.
	pub fn apply_filter(&mut self, filter: Filter) {
		self.selection.clear();
		self.filter = filter;
		self.refresh_emphasis();
		log::info!(
			"filter `{}` fades {} of {} topics",
			self.filter,
			self.emphasis.faded_node_count(),
			self.graph.len()
		);
	}

	pub fn hover_in(&mut self, idx: TopicIdx, page_x: f64, page_y: f64) {
		let Some(topic) = self.graph.topic(idx) else {
			return;
		};
		self.hover = Some(idx);
		self.tooltip.show(&topic.label, page_x, page_y);
	}

	pub fn hover_out(&mut self) {
		if self.hover.take().is_some() {
			self.tooltip.hide();
		}
	}

	pub fn begin_drag(&mut self, idx: TopicIdx, x: f64, y: f64) {
		let Some((node_x, node_y)) = self.simulation.position(idx) else {
			return;
		};
		self.drag = DragState {
			node: Some(idx),
			start_x: x,
			start_y: y,
			node_start_x: node_x,
			node_start_y: node_y,
		};
		self.simulation.pin(idx, node_x, node_y);
		self.simulation.reheat();
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		let Some(idx) = self.drag.node else {
			return;
		};
		let pin_x = self.drag.node_start_x + (x - self.drag.start_x);
		let pin_y = self.drag.node_start_y + (y - self.drag.start_y);
		self.simulation.pin(idx, pin_x, pin_y);
	}

	pub fn end_drag(&mut self) {
		if let Some(idx) = self.drag.node.take() {
			self.simulation.unpin(idx);
			self.simulation.cool();
		}
	}

	pub fn is_dragging(&self) -> bool {
		self.drag.node.is_some()
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.simulation.resize(width, height);
	}

	pub fn frame(&self) -> Frame {
		Frame::build(&self.graph, &self.simulation, &self.emphasis)
	}

	pub fn panel(&self) -> PanelView {
		PanelView::for_selection(&self.graph, &self.selection)
	}
}

#[cfg(test)]
mod tests {
	use super::super::model::tests::{pair_graph, sample_graph};
	use super::*;

	fn state() -> ExplorerState {
		ExplorerState::new(sample_graph(), ExplorerConfig::default(), 800.0, 600.0)
	}

	#[test]
	fn test_hit_test_finds_node_under_pointer() {
		let state = state();
		let (x, y) = state.simulation.position(2).unwrap();
		assert_eq!(state.node_at_position(x + 3.0, y - 3.0), Some(2));
		assert_eq!(state.node_at_position(-500.0, -500.0), None);
	}

	#[test]
	fn test_filter_clears_selection_first() {
		let mut state = state();
		state.select_node(0);
		assert!(!state.panel().shows_instructions());

		state.apply_filter(Filter::Category("Graphics".into()));
		assert_eq!(state.selection, Selection::Idle);
		assert!(state.panel().shows_instructions());
		let integrals = state.graph.index_of("integrals").unwrap();
		for idx in 0..state.graph.len() {
			assert_eq!(state.emphasis().node_faded(idx), idx != integrals);
		}
	}

	#[test]
	fn test_all_filter_fades_nothing() {
		let mut state = state();
		state.apply_filter(Filter::Category("Graphics".into()));
		state.apply_filter(Filter::All);
		assert_eq!(state.emphasis().faded_node_count(), 0);
		assert!(state.emphasis().edges.iter().all(|faded| !faded));
	}

	#[test]
	fn test_select_keeps_filter() {
		let mut state = ExplorerState::new(pair_graph(), ExplorerConfig::default(), 800.0, 600.0);
		state.apply_filter(Filter::Category("CS1".into()));
		state.select_node(0);
		assert_eq!(state.filter, Filter::Category("CS1".into()));
		assert!(state.emphasis().node_faded(1));
	}

	#[test]
	fn test_drag_pins_then_releases() {
		let mut state = state();
		let (x, y) = state.simulation.position(1).unwrap();
		state.begin_drag(1, x + 2.0, y + 2.0);
		assert!(state.is_dragging());
		assert_eq!(state.simulation.body(1).unwrap().pin, Some((x, y)));
		assert!(state.simulation.alpha_target() > 0.0);

		state.drag_to(x + 52.0, y - 18.0);
		let (pin_x, pin_y) = state.simulation.body(1).unwrap().pin.unwrap();
		assert!((pin_x - (x + 50.0)).abs() < 1e-9);
		assert!((pin_y - (y - 20.0)).abs() < 1e-9);
		state.simulation.tick();
		assert_eq!(state.simulation.position(1), Some((pin_x, pin_y)));

		state.end_drag();
		assert!(!state.is_dragging());
		assert!(!state.simulation.body(1).unwrap().is_pinned());
		assert_eq!(state.simulation.alpha_target(), 0.0);
		state.simulation.tick();
		assert_ne!(state.simulation.position(1), Some((pin_x, pin_y)));
	}

	#[test]
	fn test_hover_shows_label_tooltip() {
		let mut state = state();
		let limits = state.graph.index_of("limits").unwrap();
		state.hover_in(limits, 40.0, 50.0);
		assert_eq!(state.tooltip.view().text, "Limits");
		assert!(state.tooltip.is_animating());

		state.tooltip.tick(1.0);
		state.hover_out();
		assert_eq!(state.hover, None);
		assert!(state.tooltip.is_animating());
	}
}
