//! Compact radar glyph summarising every metric of a record.

use leptos::prelude::*;

use crate::util::grade::GradeTone;
use crate::util::radar::{radar_vertices, svg_points};

const VIEWBOX_CENTER: f64 = 50.0;
const VIEWBOX_RADIUS: f64 = 44.0;

/// Radar polygon with one spoke per metric, tinted by `tone`.
///
/// `levels` are fractions of the full radius (see `util::radar::grade_level`).
#[component]
pub fn MetricsVisualizer(levels: Vec<f64>, tone: GradeTone, #[prop(into)] label: String) -> impl IntoView {
    let outline = svg_points(&radar_vertices(&vec![1.0; levels.len()], VIEWBOX_CENTER, VIEWBOX_RADIUS));
    let shape = svg_points(&radar_vertices(&levels, VIEWBOX_CENTER, VIEWBOX_RADIUS));
    let color = tone.color();

    view! {
        <svg class="metrics-visualizer" viewBox="0 0 100 100" role="img" aria-label=label>
            <polygon class="metrics-visualizer__grid" points=outline fill="none"></polygon>
            <polygon
                class="metrics-visualizer__shape"
                points=shape
                fill=color
                fill-opacity="0.35"
                stroke=color
                stroke-width="2"
            ></polygon>
        </svg>
    }
}
