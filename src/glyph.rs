// ============================================================================
// GLYPH RENDERING
// ============================================================================
//
// Every routine here leaves the pen where it found it.

use crate::config::ScopeConfig;
use crate::error::Result;
use crate::pen::{Align, Pen, Point, Surface};
use crate::placement::Parity;
use crate::scenario::Aircraft;

const HEXAGON_HEADINGS: [f64; 6] = [120.0, 180.0, 240.0, 300.0, 360.0, 60.0];
const TRIANGLE_HEADINGS: [f64; 3] = [150.0, 270.0, 30.0];

/// Outer ring of the scope, centred on the pen.
pub fn draw_boundary_circle<S: Surface>(pen: &mut Pen<S>, scope: &ScopeConfig) -> Result<()> {
    let mut saved = pen.checkpoint();
    let start = saved.position();
    {
        let mut up = saved.pen_up();
        up.goto(Point::new(start.x + scope.radius, start.y))?;
    }
    // heading north puts the centre on the pen's left, back at `start`
    saved.set_heading(0.0);
    saved.circle(scope.radius)
}

/// Diameter through the pen position along `heading`.
pub fn draw_heading_line<S: Surface>(pen: &mut Pen<S>, heading: f64, scope: &ScopeConfig) -> Result<()> {
    pen.with_checkpoint(|pen| {
        let centre = pen.position();
        pen.set_heading(heading);
        pen.forward(scope.radius)?;
        pen.with_pen_up(|pen| pen.goto(centre))?;
        pen.backward(scope.radius)
    })
}

/// Correlated track symbol: a hexagon around the pen with a triangle inscribed
/// in it.
pub fn draw_target_glyph<S: Surface>(pen: &mut Pen<S>, scope: &ScopeConfig) -> Result<()> {
    let side = scope.pps_side;
    let triangle_side = side * 3f64.sqrt();

    pen.with_checkpoint(|pen| {
        pen.with_pen_up(|pen| {
            pen.set_heading(0.0);
            pen.forward(side)
        })?;

        for heading in HEXAGON_HEADINGS {
            pen.set_heading(heading);
            pen.forward(side)?;
        }
        for heading in TRIANGLE_HEADINGS {
            pen.set_heading(heading);
            pen.forward(triangle_side)?;
        }
        Ok(())
    })
}

/// One mile bracket in the top left corner with its label.
pub fn draw_scale_bracket<S: Surface>(pen: &mut Pen<S>, scope: &ScopeConfig) -> Result<()> {
    let (ax, ay) = scope.scale_anchor();

    let mut saved = pen.checkpoint();
    {
        let mut up = saved.pen_up();
        up.goto(Point::new(ax, ay))?;
    }

    saved.set_heading(0.0);
    saved.forward(scope.scale_tick_length)?;
    saved.set_heading(90.0);
    saved.forward(scope.mile_length)?;
    saved.set_heading(180.0);
    saved.forward(scope.scale_tick_length)?;

    {
        let mut up = saved.pen_up();
        up.goto(Point::new(ax + scope.mile_length / 2.0, ay + scope.scale_label_rise))?;
    }
    saved.write(&scope.scale_label, Align::Center)
}

/// Writes `text` a fixed distance further out along the current heading,
/// on the side given by `parity`.
pub fn place_tag<S: Surface>(pen: &mut Pen<S>, text: &str, parity: Parity, scope: &ScopeConfig) -> Result<()> {
    pen.with_checkpoint(|pen| {
        pen.with_pen_up(|pen| pen.forward(parity.sign() * scope.tag_offset()))?;
        pen.write(text, Align::Left)
    })
}

/// Target glyph and data tag for `aircraft`, `offset` units from the pen along
/// the aircraft's heading line.
pub fn draw_aircraft<S: Surface>(
    pen: &mut Pen<S>,
    aircraft: &Aircraft,
    offset: f64,
    parity: Parity,
    scope: &ScopeConfig,
) -> Result<()> {
    pen.with_checkpoint(|pen| {
        pen.with_pen_up(|pen| {
            pen.set_heading(aircraft.heading);
            pen.forward(offset)
        })?;
        draw_target_glyph(pen, scope)?;
        place_tag(pen, &aircraft.tag_text(), parity, scope)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{DisplayList, DrawCommand};

    #[test]
    fn target_glyph_is_nine_strokes_around_the_anchor() {
        let scope = ScopeConfig::default();
        let mut pen = Pen::new(DisplayList::new());
        draw_target_glyph(&mut pen, &scope).unwrap();

        let lines: Vec<_> = pen.surface().lines().collect();
        assert_eq!(lines.len(), 9);
        for (from, to) in lines {
            // every vertex of the hexagon and triangle lies on the hexagon's circumcircle
            assert!((from.distance_to(Point::ORIGIN) - scope.pps_side).abs() < 1e-9);
            assert!((to.distance_to(Point::ORIGIN) - scope.pps_side).abs() < 1e-9);
        }
    }

    #[test]
    fn heading_line_spans_the_diameter() {
        let scope = ScopeConfig::default();
        let mut pen = Pen::new(DisplayList::new());
        draw_heading_line(&mut pen, 90.0, &scope).unwrap();

        let ends: Vec<Point> = pen.surface().lines().map(|(_, to)| *to).collect();
        assert_eq!(ends.len(), 2);
        assert!(ends[0].distance_to(Point::new(scope.radius, 0.0)) < 1e-9);
        assert!(ends[1].distance_to(Point::new(-scope.radius, 0.0)) < 1e-9);
    }

    #[test]
    fn boundary_circle_is_centred_on_the_pen() {
        let scope = ScopeConfig::default();
        let mut pen = Pen::new(DisplayList::new());
        draw_boundary_circle(&mut pen, &scope).unwrap();

        match pen.surface().commands() {
            [DrawCommand::Circle { center, radius }] => {
                assert!(center.distance_to(Point::ORIGIN) < 1e-9);
                assert_eq!(*radius, scope.radius);
            }
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn scale_label_sits_above_the_bracket() {
        let scope = ScopeConfig::default();
        let mut pen = Pen::new(DisplayList::new());
        draw_scale_bracket(&mut pen, &scope).unwrap();

        assert_eq!(pen.surface().lines().count(), 3);
        let (at, text) = pen.surface().texts().next().unwrap();
        assert_eq!(text, "1 MILE");
        assert_eq!(*at, Point::new(-250.0, 280.0));
    }

    #[test]
    fn tag_is_pushed_away_from_the_centre() {
        let scope = ScopeConfig::default();
        let mut pen = Pen::new(DisplayList::new());
        pen.set_heading(0.0);
        place_tag(&mut pen, "X", Parity::Negative, &scope).unwrap();

        let (at, _) = pen.surface().texts().next().unwrap();
        assert!(at.distance_to(Point::new(0.0, -scope.tag_offset())) < 1e-9);
    }
}
