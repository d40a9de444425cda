//! Drawing cursor ("pen") with logo-style headings and the scoped guards that
//! keep its state consistent across nested drawing routines.
//!
//! Headings are compass bearings in degrees: 0 points up the scope, angles grow
//! clockwise. Scope coordinates have their origin at the scope centre with y
//! pointing up.

use std::ops::{Deref, DerefMut};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// the point `distance` units away along compass `heading`
    pub fn advanced(&self, heading: f64, distance: f64) -> Point {
        let rad = heading.to_radians();
        Point::new(self.x + distance * rad.sin(), self.y + distance * rad.cos())
    }
}

/// Position and heading of the pen, the part of its state checkpoints capture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenState {
    pub position: Point,
    pub heading: f64,
}

impl PenState {
    pub const HOME: PenState = PenState { position: Point::ORIGIN, heading: 0.0 };
}

impl Default for PenState {
    fn default() -> Self {
        Self::HOME
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// The drawing primitives the pen needs from whatever owns the visible output.
pub trait Surface {
    fn clear(&mut self) -> Result<()>;
    fn line(&mut self, from: Point, to: Point) -> Result<()>;
    fn circle(&mut self, center: Point, radius: f64) -> Result<()>;
    fn text(&mut self, at: Point, text: &str, align: Align) -> Result<()>;
}

pub struct Pen<S: Surface> {
    surface: S,
    state: PenState,
    down: bool,
}

impl<S: Surface> Pen<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: PenState::HOME,
            down: true,
        }
    }

    pub fn state(&self) -> PenState {
        self.state
    }

    pub fn position(&self) -> Point {
        self.state.position
    }

    pub fn heading(&self) -> f64 {
        self.state.heading
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Suppress marking until the returned guard is dropped.
    pub fn pen_up(&mut self) -> PenUp<'_, S> {
        PenUp::new(self)
    }

    /// Snapshot position and heading, restored when the returned guard is dropped.
    pub fn checkpoint(&mut self) -> Checkpoint<'_, S> {
        Checkpoint::new(self)
    }

    pub fn with_pen_up<T>(&mut self, f: impl FnOnce(&mut Pen<S>) -> Result<T>) -> Result<T> {
        let mut up = self.pen_up();
        f(&mut *up)
    }

    pub fn with_checkpoint<T>(&mut self, f: impl FnOnce(&mut Pen<S>) -> Result<T>) -> Result<T> {
        let mut saved = self.checkpoint();
        f(&mut *saved)
    }

    pub fn set_heading(&mut self, degrees: f64) {
        self.state.heading = degrees.rem_euclid(360.0);
    }

    pub fn goto(&mut self, target: Point) -> Result<()> {
        let from = self.state.position;
        self.state.position = target;
        if self.down {
            self.surface.line(from, target)?;
        }
        Ok(())
    }

    pub fn forward(&mut self, distance: f64) -> Result<()> {
        let target = self.state.position.advanced(self.state.heading, distance);
        self.goto(target)
    }

    pub fn backward(&mut self, distance: f64) -> Result<()> {
        self.forward(-distance)
    }

    /// Circle whose centre lies `radius` units to the pen's left. The pen does
    /// not move.
    pub fn circle(&mut self, radius: f64) -> Result<()> {
        if !self.down {
            return Ok(());
        }
        let center = self.state.position.advanced(self.state.heading - 90.0, radius);
        self.surface.circle(center, radius)
    }

    /// Text is written whether or not the pen is down.
    pub fn write(&mut self, text: &str, align: Align) -> Result<()> {
        self.surface.text(self.state.position, text, align)
    }

    /// Wipe the surface and put the pen back home, marking.
    pub fn reset(&mut self) -> Result<()> {
        self.surface.clear()?;
        self.state = PenState::HOME;
        self.down = true;
        Ok(())
    }

    // never touches the surface, so it cannot fail
    fn jump(&mut self, state: PenState) {
        self.state = state;
    }
}

/// Marking is off while this guard lives. On drop the previous marking mode is
/// restored, so nested guards leave an enclosing `PenUp` in effect.
pub struct PenUp<'a, S: Surface> {
    pen: &'a mut Pen<S>,
    was_down: bool,
}

impl<'a, S: Surface> PenUp<'a, S> {
    fn new(pen: &'a mut Pen<S>) -> Self {
        let was_down = pen.down;
        pen.down = false;
        Self { pen, was_down }
    }
}

impl<S: Surface> Deref for PenUp<'_, S> {
    type Target = Pen<S>;

    fn deref(&self) -> &Pen<S> {
        self.pen
    }
}

impl<S: Surface> DerefMut for PenUp<'_, S> {
    fn deref_mut(&mut self) -> &mut Pen<S> {
        self.pen
    }
}

impl<S: Surface> Drop for PenUp<'_, S> {
    fn drop(&mut self) {
        self.pen.down = self.was_down;
    }
}

/// Restores the captured position and heading on drop, without leaving a mark.
/// Marking mode itself is left as the scope found it.
pub struct Checkpoint<'a, S: Surface> {
    pen: &'a mut Pen<S>,
    saved: PenState,
}

impl<'a, S: Surface> Checkpoint<'a, S> {
    fn new(pen: &'a mut Pen<S>) -> Self {
        let saved = pen.state;
        Self { pen, saved }
    }
}

impl<S: Surface> Deref for Checkpoint<'_, S> {
    type Target = Pen<S>;

    fn deref(&self) -> &Pen<S> {
        self.pen
    }
}

impl<S: Surface> DerefMut for Checkpoint<'_, S> {
    fn deref_mut(&mut self) -> &mut Pen<S> {
        self.pen
    }
}

impl<S: Surface> Drop for Checkpoint<'_, S> {
    fn drop(&mut self) {
        let saved = self.saved;
        let mut up = self.pen.pen_up();
        up.jump(saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{DisplayList, DrawCommand};

    fn close(a: Point, b: Point) -> bool {
        a.distance_to(b) < 1e-9
    }

    #[test]
    fn forward_follows_compass_headings() {
        let mut pen = Pen::new(DisplayList::new());
        pen.set_heading(90.0);
        pen.forward(10.0).unwrap();
        assert!(close(pen.position(), Point::new(10.0, 0.0)));

        pen.set_heading(180.0);
        pen.forward(10.0).unwrap();
        assert!(close(pen.position(), Point::new(10.0, -10.0)));
    }

    #[test]
    fn set_heading_wraps_full_turns() {
        let mut pen = Pen::new(DisplayList::new());
        pen.set_heading(360.0);
        assert_eq!(pen.heading(), 0.0);
        pen.set_heading(-90.0);
        assert_eq!(pen.heading(), 270.0);
    }

    #[test]
    fn circle_center_is_on_the_left() {
        let mut pen = Pen::new(DisplayList::new());
        pen.goto(Point::new(5.0, 0.0)).unwrap();
        pen.circle(5.0).unwrap();

        match pen.surface().commands().last() {
            Some(DrawCommand::Circle { center, radius }) => {
                assert!(close(*center, Point::ORIGIN));
                assert_eq!(*radius, 5.0);
            }
            other => panic!("expected a circle, got {:?}", other),
        }
    }

    #[test]
    fn nested_pen_up_keeps_outer_suppression() {
        let mut pen = Pen::new(DisplayList::new());
        {
            let mut outer = pen.pen_up();
            {
                let mut inner = outer.pen_up();
                inner.forward(5.0).unwrap();
            }
            assert!(!outer.is_down());
            outer.forward(5.0).unwrap();
        }
        assert!(pen.is_down());
        assert!(pen.surface().commands().is_empty());
    }
}
