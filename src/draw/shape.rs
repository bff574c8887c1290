//! Outline definitions for the shape tools.
//!
//! Shapes are rasterized the moment they are drawn; an [`Outline`] only lives for the
//! duration of one preview or final stroke.

use super::error::SurfaceError;
use super::surface::PixelSurface;
use crate::util::{self, Point, Rect};

/// Number of spikes on the star tool.
pub const STAR_SPIKES: usize = 5;

/// Inner radius of the star as a fraction of its outer radius.
pub const STAR_INNER_RATIO: f64 = 0.5;

/// Stroke geometry produced by a shape tool for a (start, current) pointer pair.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    /// Open or closed polyline through the given vertices
    Polyline {
        /// Vertices in drawing order
        points: Vec<Point>,
        /// Whether to close the path back to the first vertex
        closed: bool,
    },
    /// Full circle
    Circle {
        /// Circle center
        center: Point,
        /// Radius in pixels (zero allowed)
        radius: f64,
    },
}

impl Outline {
    /// Straight segment from `start` to `end`.
    pub fn line(start: Point, end: Point) -> Self {
        Outline::Polyline {
            points: vec![start, end],
            closed: false,
        }
    }

    /// Axis-aligned rectangle spanning the two corners, dragged in any direction.
    pub fn rectangle(start: Point, end: Point) -> Self {
        Outline::Polyline {
            points: Rect::from_corners(start, end).corners().to_vec(),
            closed: true,
        }
    }

    /// Circle centered at `start` passing through `end`.
    pub fn circle(start: Point, end: Point) -> Self {
        Outline::Circle {
            center: start,
            radius: start.distance_to(end),
        }
    }

    /// Five-spike star centered at `start`; `end` sets the outer radius.
    pub fn star(start: Point, end: Point) -> Self {
        let outer = start.distance_to(end);
        Outline::Polyline {
            points: util::star_vertices(start, STAR_SPIKES, outer, outer * STAR_INNER_RATIO),
            closed: true,
        }
    }

    /// Strokes this outline onto the surface with its current paint state.
    pub fn stroke(&self, surface: &mut PixelSurface) -> Result<(), SurfaceError> {
        match self {
            Outline::Polyline { points, closed } => surface.stroke_path(points, *closed),
            Outline::Circle { center, radius } => surface.stroke_circle(*center, *radius),
        }
    }
}
