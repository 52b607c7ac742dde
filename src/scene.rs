//! In-memory drawing: a square canvas plus an ordered list of stroked
//! primitives. Later primitives are painted on top of earlier ones.

use crate::errors::RenderError;
use crate::float_types::Real;
use crate::geometry::Line;
use crate::io::svg::ToSVG;
use crate::style::{Color, Fill, Stroke};
use geo::{Coord, LineString};
use std::path::Path;

/// Something drawn on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// An independent segment.
    Line { line: Line, fill: Fill, stroke: Stroke },
    /// Connected segments. Each polyline is one unbroken run of the submitted
    /// lines; a new one starts wherever a line does not begin at the
    /// previous line's end.
    Path { polylines: Vec<LineString<Real>>, fill: Fill, stroke: Stroke },
}

#[derive(Debug, Clone)]
pub struct Scene {
    width: i32,
    height: i32,
    background: Color,
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: i32, height: i32, background: Color) -> Self {
        Self { width, height, background, primitives: Vec::new() }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn background(&self) -> Color {
        self.background
    }

    /// Primitives in submission (and paint) order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn add_line(&mut self, line: Line, fill: Fill, stroke: Stroke) {
        self.primitives.push(Primitive::Line { line, fill, stroke });
    }

    /// Adds `lines` as a single path primitive. An empty slice adds nothing.
    pub fn add_path(&mut self, lines: &[Line], fill: Fill, stroke: Stroke) {
        let polylines = connect(lines);
        if polylines.is_empty() {
            return;
        }
        self.primitives.push(Primitive::Path { polylines, fill, stroke });
    }

    /// Iterates over the line primitives only.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line { line, .. } => Some(line),
            Primitive::Path { .. } => None,
        })
    }

    /// Iterates over the polylines of each path primitive.
    pub fn paths(&self) -> impl Iterator<Item = &[LineString<Real>]> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Path { polylines, .. } => Some(polylines.as_slice()),
            Primitive::Line { .. } => None,
        })
    }

    /// Serializes the scene as SVG and writes it to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        ::svg::save(path, &self.to_svg_document()).map_err(|source| RenderError::Save {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn to_coord(p: &crate::geometry::Point) -> Coord<Real> {
    Coord { x: p.x, y: p.y }
}

/// Groups consecutive lines into polylines, splitting on gaps.
fn connect(lines: &[Line]) -> Vec<LineString<Real>> {
    let mut polylines: Vec<Vec<Coord<Real>>> = Vec::new();

    for line in lines {
        let (start, end) = (to_coord(&line.start), to_coord(&line.end));
        match polylines.last_mut() {
            Some(current) if current.last() == Some(&start) => current.push(end),
            _ => polylines.push(vec![start, end]),
        }
    }

    polylines.into_iter().map(LineString::new).collect()
}
