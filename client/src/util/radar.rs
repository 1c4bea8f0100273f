//! Geometry for the compact per-record metrics glyph.

#[cfg(test)]
#[path = "radar_test.rs"]
mod radar_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::net::types::Grade;

/// Fraction of the full radius assigned to each grade tier.
pub fn grade_level(grade: &Grade) -> f64 {
    match grade {
        Grade::Excellent => 1.0,
        Grade::Good => 2.0 / 3.0,
        Grade::Other(_) => 1.0 / 3.0,
    }
}

/// Vertices of a regular radar polygon with one spoke per level.
///
/// Spokes start at 12 o'clock and run clockwise. Levels are clamped to
/// `0.0..=1.0`.
pub fn radar_vertices(levels: &[f64], center: f64, radius: f64) -> Vec<(f64, f64)> {
    if levels.is_empty() {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let step = TAU / levels.len() as f64;
    levels
        .iter()
        .enumerate()
        .map(|(i, level)| {
            #[allow(clippy::cast_precision_loss)]
            let angle = step * i as f64 - FRAC_PI_2;
            let r = radius * level.clamp(0.0, 1.0);
            (center + r * angle.cos(), center + r * angle.sin())
        })
        .collect()
}

/// Format vertices for an SVG `points` attribute.
pub fn svg_points(vertices: &[(f64, f64)]) -> String {
    vertices
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}
