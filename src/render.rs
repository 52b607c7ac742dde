//! Turns a [`RoseConfig`] into a drawing and writes it out.

use crate::config::RoseConfig;
use crate::errors::RenderError;
use crate::float_types::Real;
use crate::geometry::Line;
use crate::rose::{ANGLE_STEPS, ROSE_SCALE, maurer_segment, rose_segment};
use crate::scene::Scene;
use crate::style::{Color, Fill, Stroke};
use nalgebra::Vector2;

/// Paint for each Maurer chord.
pub fn chord_stroke() -> Stroke {
    Stroke::new(Color::WHITE, 0.5, 2.0)
}

/// Paint for the rose curve overlay.
pub fn curve_stroke() -> Stroke {
    Stroke::new(Color::WHITE, 1.0, 3.0)
}

/// Builds the drawing for `config` without touching the filesystem.
///
/// One chord per angle step is added as it is generated; with
/// `show_curve` the rose pieces are collected and added last as a single
/// path, so the curve sits on top of the chords.
pub fn build_scene(config: &RoseConfig) -> Scene {
    let size = config.canvas_size;
    let mut scene = Scene::new(size, size, Color::BLACK);
    let center = Vector2::new(size as Real / 2.0, size as Real / 2.0);
    let mut curve: Vec<Line> = Vec::new();

    for theta in 0..ANGLE_STEPS {
        let chord = maurer_segment(theta, config.n, config.d, ROSE_SCALE).translate(&center);
        scene.add_line(chord, Fill::None, chord_stroke());

        if config.show_curve {
            curve.push(rose_segment(theta, config.n, ROSE_SCALE).translate(&center));
        }
    }

    if config.show_curve {
        scene.add_path(&curve, Fill::None, curve_stroke());
    }

    scene
}

/// Builds the drawing for `config` and saves it to `config.output`.
pub fn render(config: &RoseConfig) -> Result<Scene, RenderError> {
    log::debug!(
        "rendering Maurer rose n={} d={} on a {}px canvas (curve: {})",
        config.n,
        config.d,
        config.canvas_size,
        config.show_curve
    );

    let scene = build_scene(config);
    log::debug!("{} primitives generated", scene.primitives().len());

    scene.save(&config.output)?;
    log::info!("wrote {}", config.output.display());
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Primitive;

    #[test]
    fn chords_only_by_default() {
        let scene = build_scene(&RoseConfig::new("unused.svg", 4, 67));
        assert_eq!(scene.lines().count(), 360);
        assert_eq!(scene.paths().count(), 0);
        assert_eq!((scene.width(), scene.height()), (2000, 2000));
        assert_eq!(scene.background(), Color::BLACK);
    }

    #[test]
    fn chords_are_centered_on_canvas() {
        let scene = build_scene(&RoseConfig::new("unused.svg", 4, 67).with_canvas_size(800));
        let first = scene.lines().next().expect("first chord");
        assert_eq!(first.start.x, 400.0);
        assert_eq!(first.start.y, 400.0);
    }

    #[test]
    fn curve_is_added_last_with_its_own_stroke() {
        let scene = build_scene(&RoseConfig::new("unused.svg", 3, 47).with_curve(true));
        assert_eq!(scene.primitives().len(), 361);

        match scene.primitives().last() {
            Some(Primitive::Path { polylines, fill, stroke }) => {
                assert_eq!(polylines.len(), 1);
                assert_eq!(polylines[0].0.len(), 361);
                assert_eq!(*fill, Fill::None);
                assert_eq!(*stroke, curve_stroke());
            },
            other => panic!("expected the rose path last, got {other:?}"),
        }

        for primitive in &scene.primitives()[..360] {
            assert!(matches!(primitive, Primitive::Line { stroke, .. } if *stroke == chord_stroke()));
        }
    }
}
