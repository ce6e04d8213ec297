//! Interactive topic graph: model, layout, highlight/filter state and the canvas that shows them.

mod component;
mod config;
mod controller;
mod emphasis;
mod error;
mod filter;
mod layout;
mod model;
mod panel;
mod render;
mod selection;
mod source;
mod state;
mod tooltip;
mod types;

pub use component::ExplorerCanvas;
pub use config::ExplorerConfig;
pub use filter::Filter;
pub use model::TopicGraph;
pub use panel::{NO_RATIONALES, PanelBody, PanelView};
pub use source::fetch_graph;
pub use tooltip::TooltipView;
