// ============================================================================
// RETAINED DISPLAY LIST
// ============================================================================

use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::config::Palette;
use crate::error::Result;
use crate::pen::{Align, Point, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
    },
    Circle {
        center: Point,
        radius: f64,
    },
    Text {
        at: Point,
        text: String,
        align: Align,
    },
}

/// Everything drawn since the last clear, in scope coordinates.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// number of times the list has been wiped
    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn texts(&self) -> impl Iterator<Item = (&Point, &str)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { at, text, .. } => Some((at, text.as_str())),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Point, &Point)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to } => Some((from, to)),
            _ => None,
        })
    }

    fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn render(&self, canvas: &mut Canvas, palette: &Palette, font: Option<&Font>, font_size: f32) {
        canvas.clear(palette.background.as_tuple());
        let ink = palette.ink.as_tuple();

        for command in &self.commands {
            match command {
                DrawCommand::Line { from, to } => {
                    let (x0, y0) = canvas.to_pixel(*from);
                    let (x1, y1) = canvas.to_pixel(*to);
                    draw_thick_line_aa(canvas, x0, y0, x1, y1, palette.line_thickness, ink);
                }
                DrawCommand::Circle { center, radius } => {
                    let (cx, cy) = canvas.to_pixel(*center);
                    let r = radius * canvas.scale;
                    draw_ring_aa(canvas, cx, cy, r, palette.line_thickness as f64, ink);
                }
                DrawCommand::Text { at, text, align } => {
                    if let Some(font) = font {
                        let (x, y) = canvas.to_pixel(*at);
                        let scale = Scale::uniform(font_size * canvas.scale as f32);
                        draw_text(canvas, x, y, text, *align, font, scale, ink);
                    }
                }
            }
        }
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) -> Result<()> {
        self.commands.clear();
        self.clears += 1;
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point) -> Result<()> {
        self.add_command(DrawCommand::Line { from, to });
        Ok(())
    }

    fn circle(&mut self, center: Point, radius: f64) -> Result<()> {
        self.add_command(DrawCommand::Circle { center, radius });
        Ok(())
    }

    fn text(&mut self, at: Point, text: &str, align: Align) -> Result<()> {
        self.add_command(DrawCommand::Text {
            at,
            text: text.to_string(),
            align,
        });
        Ok(())
    }
}

// ============================================================================
// CANVAS
// ============================================================================

/// RGBA frame with the scope origin at its centre.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
    /// frame pixels per scope unit
    scale: f64,
}

impl<'a> Canvas<'a> {
    /// `height` is clamped to the rows `frame` actually holds at `width`.
    pub fn new(frame: &'a mut [u8], width: usize, height: usize, scale: f64) -> Self {
        let rows = if width == 0 { 0 } else { frame.len() / (width * 4) };
        Self {
            frame,
            width,
            height: height.min(rows),
            scale,
        }
    }

    pub fn clear(&mut self, color: (u8, u8, u8)) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.0, color.1, color.2, 0xff]);
        }
    }

    /// scope coordinates (y up) to frame pixels (y down)
    pub fn to_pixel(&self, p: Point) -> (f64, f64) {
        (
            self.width as f64 / 2.0 + p.x * self.scale,
            self.height as f64 / 2.0 - p.y * self.scale,
        )
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<(u8, u8, u8)> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            Some((self.frame[idx], self.frame[idx + 1], self.frame[idx + 2]))
        } else {
            None
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: (u8, u8, u8), alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let a = alpha.clamp(0.0, 1.0);
        let src = [color.0 as f32, color.1 as f32, color.2 as f32];
        for (i, s) in src.iter().enumerate() {
            let d = self.frame[idx + i] as f32;
            self.frame[idx + i] = (s * a + d * (1.0 - a)).round() as u8;
        }
        self.frame[idx + 3] = 0xff;
    }
}

// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

fn draw_thick_line_aa(
    canvas: &mut Canvas,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    thickness: f32,
    color: (u8, u8, u8),
) {
    let half = thickness as f64 / 2.0;
    let min_x = (x0.min(x1) - half).floor() as i32 - 1;
    let max_x = (x0.max(x1) + half).ceil() as i32 + 1;
    let min_y = (y0.min(y1) - half).floor() as i32 - 1;
    let max_y = (y0.max(y1) + half).ceil() as i32 + 1;
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len_sq = dx * dx + dy * dy;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let px = x as f64 - x0;
            let py = y as f64 - y0;
            let t = if len_sq > 0.0 {
                ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let lx = x0 + t * dx;
            let ly = y0 + t * dy;
            let dist = ((lx - x as f64).powi(2) + (ly - y as f64).powi(2)).sqrt();
            let aa = (1.0 - (dist - half).clamp(0.0, 1.0)) as f32;
            if aa > 0.01 {
                canvas.set_pixel(x, y, color, aa);
            }
        }
    }
}

fn draw_ring_aa(canvas: &mut Canvas, cx: f64, cy: f64, r: f64, thickness: f64, color: (u8, u8, u8)) {
    let half = thickness / 2.0;
    let reach = (r + half).ceil() as i32 + 1;
    let (icx, icy) = (cx.round() as i32, cy.round() as i32);
    for y in icy - reach..=icy + reach {
        for x in icx - reach..=icx + reach {
            let dist = ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt();
            let off = (dist - r).abs();
            let aa = (1.0 - (off - half).clamp(0.0, 1.0)) as f32;
            if aa > 0.01 {
                canvas.set_pixel(x, y, color, aa);
            }
        }
    }
}

fn calculate_text_width(text: &str, font: &Font, scale: Scale) -> f64 {
    let glyphs: Vec<PositionedGlyph> = font.layout(text, scale, point(0.0, 0.0)).collect();
    match glyphs.last() {
        Some(last) => (last.position().x + last.unpositioned().h_metrics().advance_width) as f64,
        None => 0.0,
    }
}

/// Multi-line text whose last baseline sits on the anchor; earlier lines stack
/// upwards.
#[allow(clippy::too_many_arguments)]
fn draw_text(
    canvas: &mut Canvas,
    x: f64,
    y: f64,
    text: &str,
    align: Align,
    font: &Font,
    scale: Scale,
    color: (u8, u8, u8),
) {
    let v_metrics = font.v_metrics(scale);
    let line_height = (v_metrics.ascent - v_metrics.descent + v_metrics.line_gap) as f64;
    let lines: Vec<&str> = text.lines().collect();
    let count = lines.len();

    for (i, line) in lines.into_iter().enumerate() {
        let baseline = y - (count - 1 - i) as f64 * line_height;
        let left = match align {
            Align::Left => x,
            Align::Center => x - calculate_text_width(line, font, scale) / 2.0,
        };
        for glyph in font.layout(line, scale, point(left as f32, baseline as f32)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let px = bb.min.x + gx as i32;
                    let py = bb.min.y + gy as i32;
                    canvas.set_pixel(px, py, color, v);
                });
            }
        }
    }
}
