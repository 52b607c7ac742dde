//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use maurer_rose::float_types::Real;
use std::collections::HashMap;
use svg::node::element::path::{Command, Data};
use svg::node::element::tag;
use svg::parser::Event;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// What an SVG file contains, as far as the tests care.
#[derive(Debug, Default)]
pub struct SvgSummary {
    /// Attributes of the root `<svg>` element.
    pub root: HashMap<String, String>,
    /// Attributes of every `<rect>`, in document order.
    pub rects: Vec<HashMap<String, String>>,
    /// Attributes of every `<line>`, in document order.
    pub lines: Vec<HashMap<String, String>>,
    /// Attributes of every `<path>`, in document order.
    pub paths: Vec<HashMap<String, String>>,
}

fn attributes_of(attributes: svg::node::Attributes) -> HashMap<String, String> {
    attributes
        .into_iter()
        .map(|(name, value)| (name, value.to_string()))
        .collect()
}

/// Parses SVG markup with the `svg` crate's reader.
pub fn summarize(content: &str) -> SvgSummary {
    let mut summary = SvgSummary::default();
    for event in svg::read(content).expect("readable svg") {
        match event {
            Event::Tag(tag::SVG, tag::Type::Start, attributes) => summary.root = attributes_of(attributes),
            Event::Tag(tag::Rectangle, _, attributes) => summary.rects.push(attributes_of(attributes)),
            Event::Tag(tag::Line, _, attributes) => summary.lines.push(attributes_of(attributes)),
            Event::Tag(tag::Path, _, attributes) => summary.paths.push(attributes_of(attributes)),
            _ => {},
        }
    }
    summary
}

/// Counts (move-to, line-to) commands in a path's `d` attribute.
pub fn path_commands(d: &str) -> (usize, usize) {
    let data = Data::parse(d).expect("valid path data");
    let moves = data.iter().filter(|c| matches!(c, Command::Move(..))).count();
    let lines = data.iter().filter(|c| matches!(c, Command::Line(..))).count();
    (moves, lines)
}
