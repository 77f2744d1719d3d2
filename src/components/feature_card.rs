use crate::catalog::Feature;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
    /// Whether the detail panel is currently shown. Owned by the landing
    /// view; the card itself holds no state.
    pub expanded: bool,
    pub on_toggle: Callback<MouseEvent>,
}

/// One expandable card in the Key Features list. Summary is always visible;
/// the detail panel opens and closes purely from the `expanded` prop, with
/// the chevron flipping to match.
#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(e);
        })
    };

    html! {
        <div class={classes!("feature-card", if props.expanded { "open" } else { "" })} onclick={onclick}>
            <div class="feature-card-inner">
                <div class="feature-icon">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor"
                        stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d={props.feature.icon.svg_path()} />
                    </svg>
                </div>
                <div class="feature-body">
                    <div class="feature-title-row">
                        <h3>{props.feature.title}</h3>
                        <svg class="feature-chevron" viewBox="0 0 24 24" fill="none"
                            stroke="currentColor" stroke-width="2" stroke-linecap="round"
                            stroke-linejoin="round">
                            <path d="m6 9 6 6 6-6" />
                        </svg>
                    </div>
                    <p class="feature-summary">{props.feature.summary}</p>
                    <div class="feature-detail">
                        <p>{props.feature.detail}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
