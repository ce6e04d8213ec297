use std::f64::consts::PI;

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::config::ExplorerConfig;
use super::emphasis::Emphasis;
use super::layout::Simulation;
use super::model::TopicGraph;
use super::panel::PanelView;
use super::tooltip::TooltipView;
use super::types::CalcLevel;

const CALC_I_COLOR: &str = "#4e79a7";
const CALC_II_COLOR: &str = "#f28e2b";
const FADED_ALPHA: f64 = 0.15;
const SELECTED_STROKE: &str = "#222";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub level: CalcLevel,
	pub faded: bool,
	pub selected: bool,
}

/// Canvas paint for one node: level picks the fill, flags pick alpha and outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodePaint {
	pub fill: &'static str,
	pub alpha: f64,
	pub stroke: &'static str,
	pub line_width: f64,
}

impl NodeStyle {
	pub fn paint(&self) -> NodePaint {
		let fill = match self.level {
			CalcLevel::CalculusI => CALC_I_COLOR,
			CalcLevel::CalculusII => CALC_II_COLOR,
		};
		let (stroke, line_width) = if self.selected {
			(SELECTED_STROKE, 3.0)
		} else {
			("#fff", 1.5)
		};
		NodePaint {
			fill,
			alpha: if self.faded { FADED_ALPHA } else { 1.0 },
			stroke,
			line_width,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeDraw {
	pub x: f64,
	pub y: f64,
	pub caption: String,
	pub style: NodeStyle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeDraw {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub faded: bool,
}

/// Draw instructions for one moment of the explorer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
	pub nodes: Vec<NodeDraw>,
	pub edges: Vec<EdgeDraw>,
}

impl Frame {
	pub fn build(graph: &TopicGraph, simulation: &Simulation, emphasis: &Emphasis) -> Self {
		let nodes = graph
			.topics()
			.iter()
			.zip(simulation.bodies())
			.enumerate()
			.map(|(idx, (topic, body))| NodeDraw {
				x: body.x,
				y: body.y,
				caption: topic.id.clone(),
				style: NodeStyle {
					level: topic.level,
					faded: emphasis.node_faded(idx),
					selected: emphasis.is_selected(idx),
				},
			})
			.collect();

		let edges = graph
			.edges()
			.iter()
			.enumerate()
			.filter_map(|(edge, &(source, target))| {
				let (x1, y1) = simulation.position(source)?;
				let (x2, y2) = simulation.position(target)?;
				Some(EdgeDraw {
					x1,
					y1,
					x2,
					y2,
					faded: emphasis.edge_faded(edge),
				})
			})
			.collect();

		Self { nodes, edges }
	}
}

/// Render callback invoked by the controller after ticks and state changes.
pub trait Renderer {
	fn draw(&mut self, frame: &Frame);

	fn show_panel(&mut self, _panel: &PanelView) {}

	fn show_tooltip(&mut self, _tooltip: &TooltipView) {}
}

/// Draws frames onto a 2d canvas and mirrors panel/tooltip into signals.
pub struct CanvasRenderer {
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
	node_radius: f64,
	label_offset: (f64, f64),
	panel: RwSignal<PanelView>,
	tooltip: RwSignal<TooltipView>,
}

impl CanvasRenderer {
	pub fn new(
		ctx: CanvasRenderingContext2d,
		(width, height): (f64, f64),
		config: &ExplorerConfig,
		panel: RwSignal<PanelView>,
		tooltip: RwSignal<TooltipView>,
	) -> Self {
		Self {
			ctx,
			width,
			height,
			node_radius: config.node_radius,
			label_offset: config.label_offset,
			panel,
			tooltip,
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	fn draw_edges(&self, edges: &[EdgeDraw]) {
		let ctx = &self.ctx;
		ctx.set_line_width(1.5);
		for edge in edges {
			if edge.faded {
				ctx.set_stroke_style_str(&format!("rgba(153, 153, 153, {})", FADED_ALPHA));
				let _ = ctx.set_line_dash(&js_sys::Array::of2(
					&JsValue::from_f64(4.0),
					&JsValue::from_f64(4.0),
				));
			} else {
				ctx.set_stroke_style_str("rgba(153, 153, 153, 0.6)");
				let _ = ctx.set_line_dash(&js_sys::Array::new());
			}
			ctx.begin_path();
			ctx.move_to(edge.x1, edge.y1);
			ctx.line_to(edge.x2, edge.y2);
			ctx.stroke();
		}
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}

	fn draw_nodes(&self, nodes: &[NodeDraw]) {
		let ctx = &self.ctx;
		let (label_dx, label_dy) = self.label_offset;
		ctx.set_font("10px sans-serif");

		for node in nodes {
			let paint = node.style.paint();
			ctx.set_global_alpha(paint.alpha);

			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, self.node_radius, 0.0, 2.0 * PI);
			ctx.set_fill_style_str(paint.fill);
			ctx.fill();
			ctx.set_stroke_style_str(paint.stroke);
			ctx.set_line_width(paint.line_width);
			ctx.stroke();

			ctx.set_fill_style_str("#333");
			let _ = ctx.fill_text(&node.caption, node.x + label_dx, node.y + label_dy);
		}
		ctx.set_global_alpha(1.0);
	}
}

impl Renderer for CanvasRenderer {
	fn draw(&mut self, frame: &Frame) {
		self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
		self.draw_edges(&frame.edges);
		self.draw_nodes(&frame.nodes);
	}

	fn show_panel(&mut self, panel: &PanelView) {
		self.panel.set(panel.clone());
	}

	fn show_tooltip(&mut self, tooltip: &TooltipView) {
		self.tooltip.set(tooltip.clone());
	}
}

#[cfg(test)]
mod tests {
	use super::super::filter::Filter;
	use super::super::layout::SimulationParameters;
	use super::super::model::tests::sample_graph;
	use super::super::selection::Selection;
	use super::*;

	#[test]
	fn test_node_paint_follows_style() {
		let plain = NodeStyle {
			level: CalcLevel::CalculusI,
			faded: false,
			selected: false,
		}
		.paint();
		assert_eq!(plain.fill, CALC_I_COLOR);
		assert_eq!(plain.alpha, 1.0);
		assert_ne!(plain.stroke, SELECTED_STROKE);

		let both = NodeStyle {
			level: CalcLevel::CalculusII,
			faded: true,
			selected: true,
		}
		.paint();
		assert_eq!(both.fill, CALC_II_COLOR);
		assert_eq!(both.alpha, FADED_ALPHA);
		assert_eq!(both.stroke, SELECTED_STROKE);
		assert!(both.line_width > plain.line_width);
	}

	#[test]
	fn test_frame_follows_positions_and_emphasis() {
		let graph = sample_graph();
		let sim = Simulation::new(
			graph.len(),
			graph.edges(),
			SimulationParameters::default(),
			(0.0, 0.0),
		);
		let series = graph.index_of("series").unwrap();
		let mut selection = Selection::default();
		selection.select(&graph, series);
		let emphasis = Emphasis::compute(&graph, &selection, &Filter::All);

		let frame = Frame::build(&graph, &sim, &emphasis);
		assert_eq!(frame.nodes.len(), graph.len());
		assert_eq!(frame.edges.len(), graph.edges().len());

		for (idx, node) in frame.nodes.iter().enumerate() {
			assert_eq!(Some((node.x, node.y)), sim.position(idx));
			assert_eq!(node.style.faded, emphasis.node_faded(idx));
			assert_eq!(node.style.selected, idx == series);
		}
		let (source, target) = graph.edges()[1];
		let edge = frame.edges[1];
		assert_eq!(Some((edge.x1, edge.y1)), sim.position(source));
		assert_eq!(Some((edge.x2, edge.y2)), sim.position(target));
		assert_eq!(edge.faded, emphasis.edge_faded(1));
	}
}
