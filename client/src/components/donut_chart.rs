//! SVG donut chart with a legend.
//!
//! DESIGN
//! ======
//! Geometry lives in `util::donut_math`; this component only maps segments
//! onto `<circle>` strokes so the math stays testable without a DOM.

use leptos::prelude::*;

use checkins::ChartSlice;

use crate::util::donut_math::{DONUT_CENTER, DONUT_RADIUS, DONUT_STROKE_WIDTH, donut_segments, format_value};

/// Donut chart for one dashboard metric. `center` is the figure shown inside
/// the ring; slices are not summed because some metrics (averages) do not add.
#[component]
pub fn DonutChart(
    #[prop(into)] title: String,
    slices: Signal<Vec<ChartSlice>>,
    center: Signal<Option<f64>>,
) -> impl IntoView {
    let segments = Memo::new(move |_| donut_segments(&slices.get()));
    let total = move || center.get().map(format_value).unwrap_or_default();
    let stroke_width = DONUT_STROKE_WIDTH.to_string();
    let center = DONUT_CENTER.to_string();
    let radius = DONUT_RADIUS.to_string();

    view! {
        <section class="donut-chart">
            <h3 class="donut-chart__title">{title}</h3>
            <Show
                when=move || !segments.get().is_empty()
                fallback=|| view! { <p class="donut-chart__empty">"No data"</p> }
            >
                <div class="donut-chart__body">
                    <svg class="donut-chart__ring" viewBox="0 0 42 42" role="img">
                        <circle
                            class="donut-chart__track"
                            cx=center.clone()
                            cy=center.clone()
                            r=radius.clone()
                            fill="transparent"
                            stroke="#e6e6e6"
                            stroke-width=stroke_width.clone()
                        ></circle>
                        {
                            let stroke_width = stroke_width.clone();
                            let center = center.clone();
                            let radius = radius.clone();
                            move || {
                                segments
                                    .get()
                                    .into_iter()
                                    .map(|segment| {
                                        view! {
                                            <circle
                                                class="donut-chart__segment"
                                                cx=center.clone()
                                                cy=center.clone()
                                                r=radius.clone()
                                                fill="transparent"
                                                stroke=segment.color
                                                stroke-width=stroke_width.clone()
                                                stroke-dasharray=segment.dasharray
                                                stroke-dashoffset=segment.dashoffset.to_string()
                                            ></circle>
                                        }
                                    })
                                    .collect_view()
                            }
                        }
                        <text class="donut-chart__total" x="50%" y="50%" text-anchor="middle" dominant-baseline="middle">
                            {total}
                        </text>
                    </svg>
                    <ul class="donut-chart__legend">
                        {move || {
                            segments
                                .get()
                                .into_iter()
                                .map(|segment| {
                                    let swatch = format!("background-color: {}", segment.color);
                                    view! {
                                        <li class="donut-chart__legend-item">
                                            <span class="donut-chart__swatch" style=swatch></span>
                                            <span class="donut-chart__label">{segment.label}</span>
                                            <span class="donut-chart__value">{format_value(segment.value)}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </Show>
        </section>
    }
}
