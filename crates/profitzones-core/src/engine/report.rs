use crate::core::models::ids::{ResidueSpecifier, StructureSlot};
use crate::core::models::zone::{Zone, ZoneList};
use std::fmt::Write;

fn id_or_empty(id: Option<&ResidueSpecifier>) -> String {
    id.map(ResidueSpecifier::to_string).unwrap_or_default()
}

fn zone_line(zone: &Zone, with_positions: bool) -> String {
    let [a, b] = StructureSlot::ALL.map(|slot| {
        let start = id_or_empty(zone.start_id(slot));
        let stop = id_or_empty(zone.stop_id(slot));
        if with_positions {
            format!(
                "{} ({}) to {} ({})",
                start,
                zone.start(slot),
                stop,
                zone.stop(slot)
            )
        } else {
            format!("{} to {}", start, stop)
        }
    });
    format!("{} with {}", a, b)
}

fn render_lines(zones: &ZoneList, with_positions: bool) -> String {
    zones.iter().fold(String::new(), |mut out, zone| {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", zone_line(zone, with_positions));
        out
    })
}

/// Renders one line per zone: `<start> to <stop> with <start> to <stop>`.
///
/// Identifiers use their canonical form, so a blank insertion code shows up as
/// a trailing space (`A112  to A145  with H9  to H42 `). Unmapped identifiers
/// render as empty strings.
pub fn render(zones: &ZoneList) -> String {
    render_lines(zones, false)
}

/// Same as [`render`] but with the original ProFit positions in parentheses.
pub fn render_with_positions(zones: &ZoneList) -> String {
    render_lines(zones, true)
}
