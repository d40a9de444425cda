use rand::Rng;

use crate::config::{ScenarioConfig, ScopeConfig};
use crate::error::Result;
use crate::glyph::{draw_aircraft, draw_boundary_circle, draw_heading_line, draw_scale_bracket};
use crate::pen::{Pen, Surface};
use crate::placement::place;
use crate::scenario::{generate_pair, random_headings, Scenario};

/// One complete redraw: wipes the surface, then ring, heading lines, both
/// aircraft with their tags, and the scale. The headings drawn here are the
/// ones the aircraft are generated and placed on.
pub fn draw_scenario<S: Surface, R: Rng + ?Sized>(
    pen: &mut Pen<S>,
    rng: &mut R,
    scope: &ScopeConfig,
    scenario_config: &ScenarioConfig,
) -> Result<Scenario> {
    pen.reset()?;
    draw_boundary_circle(pen, scope)?;

    let headings = random_headings(rng, scenario_config);
    draw_heading_line(pen, headings.0, scope)?;
    draw_heading_line(pen, headings.1, scope)?;

    let (first, second) = generate_pair(rng, scenario_config, headings.0, headings.1);
    let placement = place(rng, scenario_config, &first, &second);
    let (offset_0, offset_1) = placement.offsets();
    draw_aircraft(pen, &first, offset_0, placement.parities.0, scope)?;
    draw_aircraft(pen, &second, offset_1, placement.parities.1, scope)?;

    draw_scale_bracket(pen, scope)?;

    Ok(Scenario {
        headings,
        aircraft: (first, second),
        placement,
    })
}
