/// Color representation for scope elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Colors used when rasterising the display list
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Color,
    pub ink: Color,
    pub line_thickness: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::new(0xff, 0xff, 0xff),
            ink: Color::new(0x00, 0x00, 0x00),
            line_thickness: 1.5,
        }
    }
}

/// Fixed geometry of the scope and the glyphs drawn on it, in scope units
#[derive(Debug, Clone)]
pub struct ScopeConfig {
    /// radius of the boundary ring, also the half length of each heading line
    pub radius: f64,
    /// side length of the target hexagon
    pub pps_side: f64,
    /// length of the one mile scale run
    pub mile_length: f64,
    pub scale_tick_length: f64,
    /// gap between the scale anchor and its label
    pub scale_label_rise: f64,
    pub scale_label: String,
}

impl ScopeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// distance from a target glyph to the anchor of its data tag
    pub fn tag_offset(&self) -> f64 {
        self.radius / 4.0
    }

    /// top left corner of the scope square, where the scale is anchored
    pub fn scale_anchor(&self) -> (f64, f64) {
        (-self.radius, self.radius)
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            radius: 270.0,
            pps_side: 10.0,
            mile_length: 40.0,
            scale_tick_length: 10.0,
            scale_label_rise: 10.0,
            scale_label: "1 MILE".to_string(),
        }
    }
}

/// Random draw ranges and the fixed sets scenarios are drawn from
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    pub callsigns: Vec<String>,
    pub aircraft_types: Vec<String>,
    /// lowest altitude, highest altitude (exclusive upper bound for the lower band);
    /// a range narrower than one step pins the lower band to the lowest altitude
    pub altitude_range: (u32, u32),
    pub altitude_step: u32,
    pub four_digit_probability: f64,
    pub speed: u32,
    /// upper bound is exclusive; an empty range always yields the lower bound
    pub heading_range: (f64, f64),
    /// inclusive bounds, in either order
    pub distance_range: (u32, u32),
    /// heading gaps strictly below this force opposite parities
    pub same_heading_threshold: f64,
}

impl ScenarioConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let callsigns = [
            "ACA", "BAW", "GGN", "NCB", "NWT", "CFC", "JZA", "WJA", "UAL", "CRQ", "DAL", "GLR",
        ];
        let aircraft_types = ["A320", "B190", "B747", "CRJ9", "B737"];

        Self {
            callsigns: callsigns.iter().map(|s| s.to_string()).collect(),
            aircraft_types: aircraft_types.iter().map(|s| s.to_string()).collect(),
            altitude_range: (90, 290),
            altitude_step: 10,
            four_digit_probability: 0.1,
            speed: 25,
            heading_range: (0.0, 180.0),
            distance_range: (40, 170),
            same_heading_threshold: 30.0,
        }
    }
}
