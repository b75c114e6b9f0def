//! Reads the zone listing printed by ProFit's `STATUS` command.
//!
//! A significant line carries four integers separated by three placeholder
//! tokens, e.g. `   12  to   45  with    8  to   41`. Lines of any other shape
//! (headers, blank lines, RMS reports) are skipped without error.

use crate::core::models::zone::{Zone, ZoneList};
use std::io::{self, BufRead};
use std::str::SplitWhitespace;
use tracing::{debug, trace};

fn next_int(fields: &mut SplitWhitespace<'_>) -> Option<isize> {
    fields.next()?.parse().ok()
}

/// Parses one line into a zone, or returns `None` if it is not a zone line.
///
/// The first seven whitespace-separated fields must read
/// `INT TOKEN INT TOKEN INT TOKEN INT`; anything after the seventh field is
/// ignored.
pub fn parse_zone_line(line: &str) -> Option<Zone> {
    let mut fields = line.split_whitespace();

    let start1 = next_int(&mut fields)?;
    fields.next()?;
    let stop1 = next_int(&mut fields)?;
    fields.next()?;
    let start2 = next_int(&mut fields)?;
    fields.next()?;
    let stop2 = next_int(&mut fields)?;

    Some(Zone::new((start1, stop1), (start2, stop2)))
}

/// Parses every zone line of `text`, preserving their order.
pub fn parse_zones(text: &str) -> ZoneList {
    text.lines().filter_map(parse_zone_line).collect()
}

pub struct ZoneFile;

impl ZoneFile {
    /// Reads zones from a buffered reader.
    ///
    /// # Errors
    ///
    /// Only I/O failures are reported; non-zone lines are dropped silently and an
    /// input without any zone line yields an empty list.
    pub fn read_from(reader: &mut impl BufRead) -> Result<ZoneList, io::Error> {
        let mut zones = ZoneList::new();
        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            match parse_zone_line(&line) {
                Some(zone) => zones.push(zone),
                None => trace!(line = line_num + 1, "Skipping non-zone line."),
            }
        }
        debug!(count = zones.len(), "Read zones.");
        Ok(zones)
    }
}
