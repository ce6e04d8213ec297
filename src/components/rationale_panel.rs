use leptos::prelude::*;

use super::topic_graph::{NO_RATIONALES, PanelBody, PanelView};

fn body_view(body: PanelBody) -> AnyView {
	match body {
		PanelBody::Empty => view! { <p>{NO_RATIONALES}</p> }.into_any(),
		PanelBody::Groups(groups) => groups
			.into_iter()
			.map(|group| {
				let items = group
					.items
					.into_iter()
					.map(|item| {
						view! {
							<div class="rationale-item">
								<strong>{item.topic}":"</strong>
								" "
								{item.text}
							</div>
						}
					})
					.collect_view();
				view! {
					<h5>{group.category}</h5>
					{items}
				}
			})
			.collect_view()
			.into_any(),
	}
}

/// Instructions while idle; the selected topic's rationales otherwise.
#[component]
pub fn RationalePanel(#[prop(into)] panel: Signal<PanelView>) -> impl IntoView {
	let idle = move || panel.with(PanelView::shows_instructions);

	view! {
		<div id="instructions" class="panel" class:hidden=move || !idle()>
			<h4>"How to explore"</h4>
			<p>"Hover a topic to see its name. Click it to see why it matters for computer science."</p>
			<p>"Drag topics around, click the background to reset, or use the filters above."</p>
		</div>
		<div id="rationale-display" class="panel" class:hidden=idle>
			{move || match panel.get() {
				PanelView::Instructions => ().into_any(),
				PanelView::Rationale { title, level_label, body } => {
					view! {
						<h3 id="rationale-title">{title}</h3>
						<p id="rationale-level">{level_label}</p>
						<div id="rationale-content">{body_view(body)}</div>
					}
						.into_any()
				}
			}}
		</div>
	}
}
