//! Utility functions for geometry and color names.
//!
//! This module provides:
//! - Pointer coordinates ([`Point`]) and drag-rectangle normalization
//! - Star vertex generation
//! - Color name lookup for config files and scripts

use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

// ============================================================================
// Geometry Utilities
// ============================================================================

/// A position on the surface in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Axis-aligned rectangle with non-negative extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Normalizes a drag from `a` to `b` in any direction.
    ///
    /// The result is `{min(x), min(y), |dx|, |dy|}`, so swapping the corners yields the
    /// same rectangle. A zero-length drag gives a zero-area rectangle.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// Corners clockwise from the top-left.
    pub fn corners(&self) -> [Point; 4] {
        let right = self.x + self.width;
        let bottom = self.y + self.height;
        [
            Point::new(self.x, self.y),
            Point::new(right, self.y),
            Point::new(right, bottom),
            Point::new(self.x, bottom),
        ]
    }
}

/// Calculates the vertices of a star polygon.
///
/// Produces `2 * spikes` points alternating between `outer` and `inner` radius, stepping
/// `PI / spikes` radians per vertex and starting at `-PI / 2` (straight up), so the first
/// vertex is the top spike tip.
pub fn star_vertices(center: Point, spikes: usize, outer: f64, inner: f64) -> Vec<Point> {
    let step = PI / spikes as f64;
    let mut rot = -PI / 2.0;
    let mut vertices = Vec::with_capacity(spikes * 2);

    for _ in 0..spikes {
        vertices.push(Point::new(
            center.x + rot.cos() * outer,
            center.y + rot.sin() * outer,
        ));
        rot += step;
        vertices.push(Point::new(
            center.x + rot.cos() * inner,
            center.y + rot.sin() * inner,
        ));
        rot += step;
    }

    vertices
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and gesture scripts to parse color names.
///
/// # Supported Names (case-insensitive)
/// - "black", "white", "rose", "purple", "indigo", "amber", "pink", "teal", "slate"
/// - "transparent"
///
/// # Returns
/// - `Some(Color)` if the name matches a palette color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "rose" => Some(ROSE),
        "purple" => Some(PURPLE),
        "indigo" => Some(INDIGO),
        "amber" => Some(AMBER),
        "pink" => Some(PINK),
        "teal" => Some(TEAL),
        "slate" => Some(SLATE),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

/// Parses a color given either as a palette name or a hex code.
pub fn parse_color(spec: &str) -> Option<Color> {
    name_to_color(spec).or_else(|| Color::from_hex(spec))
}
