use crate::float_types::Real;
use crate::geometry::Line;
use crate::scene::{Primitive, Scene};
use crate::style::{Fill, Stroke};
use geo::LineString;
use ::svg::Document;
use ::svg::node::element::path::Data;
use ::svg::node::element::{Line as SvgLine, Path as SvgPath, Rectangle};

/// Conversion into an [`svg::Document`].
pub trait ToSVG {
    fn to_svg_document(&self) -> Document;

    /// Serialized SVG markup.
    ///
    /// ```
    /// # use maurer_rose::io::svg::ToSVG;
    /// # use maurer_rose::scene::Scene;
    /// # use maurer_rose::style::Color;
    /// let svg = Scene::new(64, 64, Color::BLACK).to_svg();
    /// assert!(svg.contains("<rect"));
    /// assert!(svg.contains("fill=\"#000000\""));
    /// ```
    fn to_svg(&self) -> String {
        self.to_svg_document().to_string()
    }
}

impl ToSVG for Scene {
    fn to_svg_document(&self) -> Document {
        let (width, height) = (self.width(), self.height());

        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", self.background().to_string());

        let mut document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", format!("0 0 {width} {height}"))
            .add(background);

        for primitive in self.primitives() {
            document = match primitive {
                Primitive::Line { line, fill, stroke } => document.add(line_element(line, fill, stroke)),
                Primitive::Path { polylines, fill, stroke } => {
                    document.add(path_element(polylines, fill, stroke))
                },
            };
        }

        document
    }
}

fn line_element(line: &Line, fill: &Fill, stroke: &Stroke) -> SvgLine {
    let element = SvgLine::new()
        .set("x1", line.start.x)
        .set("y1", line.start.y)
        .set("x2", line.end.x)
        .set("y2", line.end.y);

    paint_attributes(fill, stroke)
        .into_iter()
        .fold(element, |element, (name, value)| element.set(name, value))
}

fn path_element(polylines: &[LineString<Real>], fill: &Fill, stroke: &Stroke) -> SvgPath {
    let mut data = Data::new();
    for polyline in polylines {
        let mut coords = polyline.coords();
        let Some(first) = coords.next() else {
            continue;
        };
        #[allow(clippy::unnecessary_cast)]
        {
            data = data.move_to((first.x as f32, first.y as f32));
            for c in coords {
                data = data.line_to((c.x as f32, c.y as f32));
            }
        }
    }

    paint_attributes(fill, stroke)
        .into_iter()
        .fold(SvgPath::new().set("d", data), |element, (name, value)| element.set(name, value))
}

/// `fill` / `stroke*` attributes shared by every drawn element.
fn paint_attributes(fill: &Fill, stroke: &Stroke) -> Vec<(&'static str, String)> {
    let mut attributes = match fill {
        Fill::None => vec![("fill", "none".to_string())],
        Fill::Solid { color, opacity } => vec![
            ("fill", color.to_string()),
            ("fill-opacity", opacity.to_string()),
        ],
    };
    attributes.extend([
        ("stroke", stroke.color.to_string()),
        ("stroke-opacity", stroke.opacity.to_string()),
        ("stroke-width", stroke.width.to_string()),
    ]);
    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::style::Color;

    #[test]
    fn paint_for_open_stroke() {
        let attributes = paint_attributes(&Fill::None, &Stroke::new(Color::WHITE, 0.5, 2.0));
        assert_eq!(
            attributes,
            vec![
                ("fill", "none".to_string()),
                ("stroke", "#ffffff".to_string()),
                ("stroke-opacity", "0.5".to_string()),
                ("stroke-width", "2".to_string()),
            ]
        );
    }

    #[test]
    fn solid_fill_carries_opacity() {
        let fill = Fill::Solid { color: Color::rgb(255, 0, 0), opacity: 0.25 };
        let attributes = paint_attributes(&fill, &Stroke::new(Color::BLACK, 1.0, 1.0));
        assert!(attributes.contains(&("fill", "#ff0000".to_string())));
        assert!(attributes.contains(&("fill-opacity", "0.25".to_string())));
    }

    #[test]
    fn elements_follow_primitive_order() {
        let mut scene = Scene::new(100, 100, Color::BLACK);
        let stroke = Stroke::new(Color::WHITE, 1.0, 1.0);
        scene.add_path(
            &[Line::new(Point::new(1.0, 1.0), Point::new(2.0, 2.0))],
            Fill::None,
            stroke,
        );
        scene.add_line(Line::new(Point::new(3.0, 3.0), Point::new(4.0, 4.0)), Fill::None, stroke);

        let svg = scene.to_svg();
        let rect = svg.find("<rect").expect("background");
        let path = svg.find("<path").expect("path");
        let line = svg.find("<line").expect("line");
        assert!(rect < path && path < line);
        assert!(svg.contains("viewBox=\"0 0 100 100\""));
    }
}
