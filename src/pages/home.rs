use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use log::{error, info, warn};

use crate::components::filter_bar::{FilterBar, FilterButton};
use crate::components::rationale_panel::RationalePanel;
use crate::components::tooltip_label::TooltipLabel;
use crate::components::topic_graph::{
	ExplorerCanvas, ExplorerConfig, Filter, PanelView, TooltipView, TopicGraph, fetch_graph,
};

/// Sidebar with filters and rationales beside the graph canvas; loads the data once.
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let config = match query.with_untracked(|q| q.get("data")) {
		Some(url) => ExplorerConfig::default().with_data_url(url),
		None => ExplorerConfig::default(),
	};

	let graph: RwSignal<Option<TopicGraph>> = RwSignal::new(None);
	let filter = RwSignal::new(Filter::All);
	let panel = RwSignal::new(PanelView::Instructions);
	let tooltip = RwSignal::new(TooltipView::default());

	let url = config.data_url.clone();
	spawn_local(async move {
		match fetch_graph(&url).await {
			Ok(loaded) => {
				if loaded.is_empty() {
					warn!("{url} contains no topics");
				}
				info!(
					"loaded {} topics and {} relations from {url}",
					loaded.len(),
					loaded.edges().len()
				);
				graph.set(Some(loaded));
			}
			Err(err) => error!("Error loading graph data: {err}"),
		}
	});

	view! {
		<div class="layout">
			<aside class="sidebar">
				<h1>"Calculus for Computer Science"</h1>
				<p class="subtitle">"How each calculus topic connects to computing."</p>
				{move || {
					graph
						.with(|g| g.as_ref().map(FilterButton::for_graph))
						.map(|buttons| view! { <FilterBar buttons=buttons active=filter /> })
				}}
				<RationalePanel panel=panel />
			</aside>
			<div class="chart-container">
				{move || {
					graph
						.get()
						.map(|g| {
							view! {
								<ExplorerCanvas
									graph=g
									config=config.clone()
									filter=filter
									panel=panel
									tooltip=tooltip
								/>
							}
						})
				}}
				<TooltipLabel tooltip=tooltip />
			</div>
		</div>
	}
}
