use leptos::prelude::*;

use super::topic_graph::TooltipView;

#[component]
pub fn TooltipLabel(#[prop(into)] tooltip: Signal<TooltipView>) -> impl IntoView {
	view! {
		<div
			class="tooltip"
			style:left=move || format!("{}px", tooltip.with(|t| t.x))
			style:top=move || format!("{}px", tooltip.with(|t| t.y))
			style:opacity=move || tooltip.with(|t| t.opacity.to_string())
			style:visibility=move || {
				if tooltip.with(TooltipView::is_visible) { "visible" } else { "hidden" }
			}
		>
			<strong>{move || tooltip.with(|t| t.text.clone())}</strong>
		</div>
	}
}
