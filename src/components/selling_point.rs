use crate::catalog::SellingPoint;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SellingPointProps {
    pub point: SellingPoint,
}

/// Static callout card in the bottom row. No state, no interaction.
#[function_component(SellingPointCard)]
pub fn selling_point_card(props: &SellingPointProps) -> Html {
    html! {
        <div class="selling-point">
            <h3>{props.point.title}</h3>
            <p>{props.point.blurb}</p>
        </div>
    }
}
