use super::filter::Filter;
use super::model::TopicIdx;
use super::render::Renderer;
use super::state::ExplorerState;

/// A user gesture, already resolved against the canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum Gesture {
	HoverIn {
		node: TopicIdx,
		page_x: f64,
		page_y: f64,
	},
	HoverOut,
	ClickNode(TopicIdx),
	ClickBackground,
	DragStart {
		node: TopicIdx,
		x: f64,
		y: f64,
	},
	DragMove {
		x: f64,
		y: f64,
	},
	DragEnd,
	ApplyFilter(Filter),
}

impl Gesture {
	/// Fired per pointer sample rather than once per user action.
	pub fn is_continuous(&self) -> bool {
		matches!(
			self,
			Gesture::HoverIn { .. } | Gesture::HoverOut | Gesture::DragMove { .. }
		)
	}
}

/// Pointer sample: canvas-relative position plus page position for the tooltip.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
	pub page_x: f64,
	pub page_y: f64,
}

#[derive(Clone, Copy, Debug)]
struct Press {
	node: Option<TopicIdx>,
	origin: (f64, f64),
	moved: bool,
}

/// Routes gestures into the state machines and calls the renderer after each change.
pub struct Controller<R: Renderer> {
	state: ExplorerState,
	renderer: R,
	press: Option<Press>,
}

impl<R: Renderer> Controller<R> {
	pub fn new(state: ExplorerState, mut renderer: R) -> Self {
		renderer.show_panel(&state.panel());
		renderer.draw(&state.frame());
		Self {
			state,
			renderer,
			press: None,
		}
	}

	#[cfg(test)]
	pub fn state(&self) -> &ExplorerState {
		&self.state
	}

	pub fn renderer_mut(&mut self) -> &mut R {
		&mut self.renderer
	}

	pub fn handle(&mut self, gesture: Gesture) {
		if gesture.is_continuous() {
			log::trace!("gesture {gesture:?}");
		} else {
			log::debug!("gesture {gesture:?}");
		}
		match gesture {
			Gesture::HoverIn {
				node,
				page_x,
				page_y,
			} => {
				self.state.hover_in(node, page_x, page_y);
				self.renderer.show_tooltip(self.state.tooltip.view());
				return;
			}
			Gesture::HoverOut => {
				self.state.hover_out();
				return;
			}
			Gesture::ClickNode(node) => {
				self.state.select_node(node);
				self.renderer.show_panel(&self.state.panel());
			}
			Gesture::ClickBackground => {
				self.state.clear_selection();
				self.renderer.show_panel(&self.state.panel());
			}
			Gesture::DragStart { node, x, y } => self.state.begin_drag(node, x, y),
			Gesture::DragMove { x, y } => self.state.drag_to(x, y),
			Gesture::DragEnd => self.state.end_drag(),
			Gesture::ApplyFilter(filter) => {
				self.state.apply_filter(filter);
				self.renderer.show_panel(&self.state.panel());
			}
		}
		self.renderer.draw(&self.state.frame());
	}

	pub fn pointer_down(&mut self, pointer: Pointer) {
		let node = self.state.node_at_position(pointer.x, pointer.y);
		self.press = Some(Press {
			node,
			origin: (pointer.x, pointer.y),
			moved: false,
		});
		if let Some(node) = node {
			self.handle(Gesture::DragStart {
				node,
				x: pointer.x,
				y: pointer.y,
			});
		}
	}

	pub fn pointer_move(&mut self, pointer: Pointer) {
		if let Some(press) = self.press.as_mut() {
			let (dx, dy) = (pointer.x - press.origin.0, pointer.y - press.origin.1);
			let slop = self.state.config().click_slop;
			if dx * dx + dy * dy > slop * slop {
				press.moved = true;
			}
			if press.node.is_some() {
				self.handle(Gesture::DragMove {
					x: pointer.x,
					y: pointer.y,
				});
				return;
			}
		}

		let hovered = self.state.node_at_position(pointer.x, pointer.y);
		if hovered == self.state.hover {
			return;
		}
		if self.state.hover.is_some() {
			self.handle(Gesture::HoverOut);
		}
		if let Some(node) = hovered {
			self.handle(Gesture::HoverIn {
				node,
				page_x: pointer.page_x,
				page_y: pointer.page_y,
			});
		}
	}

	/// A press on a node that did not travel is a click on that node and never
	/// also a background click.
	pub fn pointer_up(&mut self) {
		let Some(press) = self.press.take() else {
			return;
		};
		match press.node {
			Some(node) => {
				self.handle(Gesture::DragEnd);
				if !press.moved {
					self.handle(Gesture::ClickNode(node));
				}
			}
			None => self.handle(Gesture::ClickBackground),
		}
	}

	pub fn pointer_leave(&mut self) {
		self.press = None;
		if self.state.is_dragging() {
			self.handle(Gesture::DragEnd);
		}
		if self.state.hover.is_some() {
			self.handle(Gesture::HoverOut);
		}
	}

	/// One animation frame: advance physics and tooltip, redraw what moved.
	pub fn tick(&mut self, dt: f64) {
		if self.state.simulation.tick() {
			self.renderer.draw(&self.state.frame());
		}
		if self.state.tooltip.tick(dt) {
			self.renderer.show_tooltip(self.state.tooltip.view());
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.state.resize(width, height);
		self.renderer.draw(&self.state.frame());
	}
}

#[cfg(test)]
mod tests {
	use super::super::config::ExplorerConfig;
	use super::super::model::tests::sample_graph;
	use super::super::panel::PanelView;
	use super::super::render::Frame;
	use super::super::selection::Selection;
	use super::super::tooltip::TooltipView;
	use super::*;

	#[derive(Default)]
	struct Recorder {
		frames: Vec<Frame>,
		panels: Vec<PanelView>,
		tooltips: Vec<TooltipView>,
	}

	impl Renderer for Recorder {
		fn draw(&mut self, frame: &Frame) {
			self.frames.push(frame.clone());
		}

		fn show_panel(&mut self, panel: &PanelView) {
			self.panels.push(panel.clone());
		}

		fn show_tooltip(&mut self, tooltip: &TooltipView) {
			self.tooltips.push(tooltip.clone());
		}
	}

	fn controller() -> Controller<Recorder> {
		let state = ExplorerState::new(sample_graph(), ExplorerConfig::default(), 800.0, 600.0);
		Controller::new(state, Recorder::default())
	}

	fn at_node(controller: &Controller<Recorder>, idx: TopicIdx) -> Pointer {
		let (x, y) = controller.state().simulation.position(idx).unwrap();
		Pointer {
			x,
			y,
			page_x: x + 100.0,
			page_y: y + 50.0,
		}
	}

	fn far_away() -> Pointer {
		Pointer {
			x: -1_000.0,
			y: -1_000.0,
			..Pointer::default()
		}
	}

	#[test]
	fn test_pointer_samples_are_continuous() {
		assert!(Gesture::DragMove { x: 1.0, y: 2.0 }.is_continuous());
		assert!(Gesture::HoverOut.is_continuous());
		assert!(
			Gesture::HoverIn {
				node: 0,
				page_x: 0.0,
				page_y: 0.0,
			}
			.is_continuous()
		);
		assert!(!Gesture::ClickNode(0).is_continuous());
		assert!(!Gesture::DragStart { node: 0, x: 0.0, y: 0.0 }.is_continuous());
		assert!(!Gesture::DragEnd.is_continuous());
		assert!(!Gesture::ApplyFilter(Filter::All).is_continuous());
	}

	#[test]
	fn test_initial_render_shows_instructions() {
		let mut controller = controller();
		let recorder = controller.renderer_mut();
		assert_eq!(recorder.panels, [PanelView::Instructions]);
		assert_eq!(recorder.frames.len(), 1);
	}

	#[test]
	fn test_click_node_selects_without_background_reset() {
		let mut controller = controller();
		let limits = controller.state().graph.index_of("limits").unwrap();
		let pointer = at_node(&controller, limits);

		controller.pointer_down(pointer);
		controller.pointer_up();

		assert_eq!(controller.state().selection.selected(), Some(limits));
		assert!(!controller.state().simulation.body(limits).unwrap().is_pinned());
		let last_panel = controller.renderer_mut().panels.last().cloned().unwrap();
		assert!(matches!(last_panel, PanelView::Rationale { ref title, .. } if title == "Limits"));
		let frame = controller.renderer_mut().frames.last().cloned().unwrap();
		assert!(frame.nodes[limits].style.selected);
	}

	#[test]
	fn test_background_click_returns_to_idle() {
		let mut controller = controller();
		controller.handle(Gesture::ClickNode(1));
		controller.pointer_down(far_away());
		controller.pointer_up();

		assert_eq!(controller.state().selection, Selection::Idle);
		assert_eq!(controller.state().emphasis().faded_node_count(), 0);
		let recorder = controller.renderer_mut();
		assert_eq!(recorder.panels.last(), Some(&PanelView::Instructions));
		let frame = recorder.frames.last().unwrap();
		assert!(frame.nodes.iter().all(|n| !n.style.faded && !n.style.selected));
		assert!(frame.edges.iter().all(|e| !e.faded));
	}

	#[test]
	fn test_filter_while_selected_hides_panel_first() {
		let mut controller = controller();
		controller.handle(Gesture::ClickNode(0));
		controller.handle(Gesture::ApplyFilter(Filter::Category("Machine Learning".into())));

		assert_eq!(controller.state().selection, Selection::Idle);
		let derivatives = controller.state().graph.index_of("derivatives").unwrap();
		let recorder = controller.renderer_mut();
		assert_eq!(recorder.panels.last(), Some(&PanelView::Instructions));
		let frame = recorder.frames.last().unwrap();
		for (idx, node) in frame.nodes.iter().enumerate() {
			assert_eq!(node.style.faded, idx != derivatives);
			assert!(!node.style.selected);
		}
	}

	#[test]
	fn test_drag_moves_pin_and_suppresses_click() {
		let mut controller = controller();
		let pointer = at_node(&controller, 2);
		controller.pointer_down(pointer);
		assert!(controller.state().simulation.body(2).unwrap().is_pinned());
		assert!(controller.state().simulation.is_running());

		let moved = Pointer {
			x: pointer.x + 40.0,
			..pointer
		};
		controller.pointer_move(moved);
		let (pin_x, _) = controller.state().simulation.body(2).unwrap().pin.unwrap();
		assert!((pin_x - moved.x).abs() < 1e-9);

		controller.pointer_up();
		assert!(!controller.state().simulation.body(2).unwrap().is_pinned());
		assert_eq!(controller.state().selection, Selection::Idle);
	}

	#[test]
	fn test_hover_in_and_out() {
		let mut controller = controller();
		let series = controller.state().graph.index_of("series").unwrap();
		let pointer = at_node(&controller, series);
		controller.pointer_move(pointer);
		assert_eq!(controller.state().hover, Some(series));
		let shown = controller.renderer_mut().tooltips.last().cloned().unwrap();
		assert_eq!(shown.text, "Series");
		assert_eq!((shown.x, shown.y), (pointer.page_x + 10.0, pointer.page_y - 28.0));
		for _ in 0..20 {
			controller.tick(0.016);
		}
		let visible = controller.renderer_mut().tooltips.last().cloned().unwrap();
		assert_eq!(visible.opacity, 0.9);

		controller.pointer_move(far_away());
		assert_eq!(controller.state().hover, None);
		for _ in 0..60 {
			controller.tick(0.016);
		}
		let faded = controller.renderer_mut().tooltips.last().cloned().unwrap();
		assert_eq!(faded.opacity, 0.0);
	}

	#[test]
	fn test_ticks_render_until_settled() {
		let mut controller = controller();
		let before = controller.renderer_mut().frames.len();
		for _ in 0..1_000 {
			controller.tick(0.016);
		}
		let drawn = controller.renderer_mut().frames.len() - before;
		assert!(drawn > 0 && drawn < 1_000);
		assert!(!controller.state().simulation.is_running());
	}

	#[test]
	fn test_pointer_leave_ends_drag() {
		let mut controller = controller();
		controller.pointer_down(at_node(&controller, 3));
		controller.pointer_leave();
		assert!(!controller.state().is_dragging());
		assert!(!controller.state().simulation.body(3).unwrap().is_pinned());
		assert_eq!(controller.state().selection, Selection::Idle);
	}

	#[test]
	fn test_pointer_leave_discards_background_press() {
		let mut controller = controller();
		controller.handle(Gesture::ClickNode(1));
		controller.pointer_down(far_away());
		let drawn = controller.renderer_mut().frames.len();

		controller.pointer_leave();
		assert_eq!(controller.renderer_mut().frames.len(), drawn);
		controller.pointer_up();
		assert_eq!(controller.state().selection.selected(), Some(1));
	}
}
