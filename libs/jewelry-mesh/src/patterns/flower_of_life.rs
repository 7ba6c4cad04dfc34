//! # Flower of Life
//!
//! A central circle surrounded by hexagonal rings of circles. Ring `g` holds
//! `6g` circles at distance `2·r·g`. Each circle is its own closed disk; no
//! faces join neighbouring circles.

use super::add_prism;
use crate::mesh::MeshBuilder;
use crate::point::{circle_points, fraction_of_turn, polar_to_cartesian, Point2D};
use config::constants::FLOWER_CIRCLE_POINTS;
use glam::DVec2;
use jewelry_params::GeometryParameters;

/// Number of rings around the central circle, `1..=4`.
pub fn generation_count(complexity: f64) -> u32 {
    (complexity * 3.0).floor() as u32 + 1
}

/// Centers of every circle, the central one first.
pub fn circle_centers(circle_radius: f64, generations: u32) -> Vec<Point2D> {
    let mut centers = vec![DVec2::ZERO];
    for generation in 1..=generations {
        let distance = circle_radius * 2.0 * f64::from(generation);
        let count = generation * 6;
        centers.extend(
            (0..count).map(|i| polar_to_cartesian(distance, fraction_of_turn(i, count))),
        );
    }
    centers
}

/// Appends a Flower of Life to `builder`.
pub fn build(params: &GeometryParameters, builder: &mut MeshBuilder) {
    let circle_radius = params.size * 0.15;
    let generations = generation_count(params.complexity);

    for center in circle_centers(circle_radius, generations) {
        let rim = circle_points(center, circle_radius, FLOWER_CIRCLE_POINTS);
        add_prism(builder, &rim, None, params.thickness);
    }
}
