use crate::catalog::{feature_catalog, selling_points};
use crate::components::feature_card::FeatureCard;
use crate::components::selling_point::SellingPointCard;
use crate::components::video_preview::VideoPreview;
use crate::expansion::ExpansionState;
use web_sys::MouseEvent;
use yew::prelude::*;

/// The Stats & Score landing page: hero header, phone-frame demo on the
/// left, the expandable Key Features list on the right, selling points and
/// footer below.
///
/// This view owns the one piece of mutable state on the page: which
/// feature cards are expanded. Cards get their data and a toggle callback;
/// nothing is global and nothing is persisted.
#[function_component(Landing)]
pub fn landing() -> Html {
    let expansion = use_state(ExpansionState::new);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let toggle_feature = {
        let expansion = expansion.clone();
        Callback::from(move |index: usize| {
            let mut next = (*expansion).clone();
            next.toggle(index);
            expansion.set(next);
        })
    };

    html! {
        <div class="landing-page">
            <header class="hero">
                <h1>{"Stats and Score Version 2.0"}</h1>
                <p class="hero-subtitle">
                    {"Advanced football analytics platform delivering real-time insights and comprehensive match data"}
                </p>
            </header>

            <main class="main-content">
                <div class="preview-and-features">
                    <div class="preview-column">
                        <VideoPreview />
                    </div>

                    <div class="features-column">
                        <div class="features-heading">
                            <h2>{"Key Features"}</h2>
                            <div class="heading-underline"></div>
                        </div>
                        {
                            for feature_catalog().into_iter().enumerate().map(|(index, feature)| {
                                let on_toggle = {
                                    let toggle_feature = toggle_feature.clone();
                                    Callback::from(move |_: MouseEvent| toggle_feature.emit(index))
                                };
                                html! {
                                    <FeatureCard
                                        feature={feature}
                                        expanded={expansion.is_expanded(index)}
                                        on_toggle={on_toggle}
                                    />
                                }
                            })
                        }
                    </div>
                </div>

                <div class="selling-points">
                    { for selling_points().into_iter().map(|point| html! {
                        <SellingPointCard point={point} />
                    })}
                </div>

                <footer class="page-footer">
                    <p>
                        {"© 2024 DAZN Sports Analytics. Professional sports analytics platform trusted by teams, analysts, and fans worldwide."}
                    </p>
                </footer>
            </main>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #080e12, #1b2326, #242d33);
                    color: #f9fafa;
                    overflow-x: hidden;
                }

                .hero {
                    text-align: center;
                    padding: 3rem 2rem;
                    max-width: 1152px;
                    margin: 0 auto;
                }

                .hero h1 {
                    font-size: 3.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #f9fafa, #1279ff, #fffa00);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #b3b9bb;
                    max-width: 640px;
                    margin: 0 auto;
                }

                .main-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 2rem 4rem;
                }

                .preview-and-features {
                    display: grid;
                    grid-template-columns: 1fr 1.5fr;
                    gap: 3rem;
                    align-items: start;
                }

                .preview-column {
                    display: flex;
                    justify-content: flex-start;
                }

                .features-column {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .features-heading {
                    margin-bottom: 1rem;
                }

                .features-heading h2 {
                    font-size: 2rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .heading-underline {
                    width: 5rem;
                    height: 4px;
                    background: linear-gradient(to right, #1279ff, #fffa00);
                    border-radius: 2px;
                }

                .feature-card {
                    cursor: pointer;
                    padding: 1rem;
                    border-radius: 8px;
                    background: linear-gradient(to right, rgba(36, 45, 51, 0.5), rgba(27, 35, 38, 0.5));
                    border: 1px solid rgba(61, 69, 73, 0.5);
                    transition: all 0.3s ease;
                }

                .feature-card:hover {
                    border-color: rgba(18, 121, 255, 0.5);
                }

                .feature-card-inner {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                }

                .feature-icon {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    background: linear-gradient(135deg, #1279ff, #fffa00);
                    border-radius: 8px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.3);
                }

                .feature-icon svg {
                    width: 1.5rem;
                    height: 1.5rem;
                    color: #080e12;
                }

                .feature-body {
                    flex: 1;
                }

                .feature-title-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .feature-title-row h3 {
                    color: #f9fafa;
                    font-weight: 500;
                    margin-bottom: 0.25rem;
                }

                .feature-chevron {
                    width: 1.25rem;
                    height: 1.25rem;
                    color: #b3b9bb;
                    transition: transform 0.3s ease;
                }

                .feature-card.open .feature-chevron {
                    transform: rotate(180deg);
                }

                .feature-summary {
                    color: #b3b9bb;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }

                .feature-detail {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.5s ease-in-out;
                }

                .feature-card.open .feature-detail {
                    max-height: 24rem;
                    opacity: 1;
                    margin-top: 0.75rem;
                }

                .feature-detail p {
                    padding-top: 0.75rem;
                    border-top: 1px solid rgba(61, 69, 73, 0.3);
                    color: #9ea2a4;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }

                .selling-points {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-top: 5rem;
                    margin-bottom: 3rem;
                }

                .selling-point {
                    text-align: center;
                    padding: 1.5rem;
                    border-radius: 8px;
                    background: linear-gradient(to bottom, rgba(36, 45, 51, 0.3), rgba(27, 35, 38, 0.3));
                    border: 1px solid rgba(61, 69, 73, 0.3);
                }

                .selling-point h3 {
                    color: #fffa00;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }

                .selling-point p {
                    color: #b3b9bb;
                    font-size: 0.875rem;
                }

                .page-footer {
                    text-align: center;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(61, 69, 73, 0.5);
                }

                .page-footer p {
                    color: #b3b9bb;
                    font-size: 0.875rem;
                }

                @media (max-width: 1024px) {
                    .preview-and-features {
                        grid-template-columns: 1fr;
                    }

                    .preview-column {
                        justify-content: center;
                    }
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.5rem;
                    }

                    .main-content {
                        padding: 0 1rem 3rem;
                    }

                    .selling-points {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
