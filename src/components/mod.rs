pub mod filter_bar;
pub mod rationale_panel;
pub mod tooltip_label;
pub mod topic_graph;
