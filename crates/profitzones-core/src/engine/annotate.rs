use crate::core::models::ids::StructureSlot;
use crate::core::models::structure::Structure;
use crate::core::models::zone::ZoneList;
use crate::engine::config::AnnotationValues;
use crate::engine::error::EngineError;
use std::ops::Range;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnnotationSummary {
    /// Zones that marked at least one atom.
    pub zones_applied: usize,
    /// Distinct atoms carrying the core value afterwards.
    pub atoms_marked: usize,
}

/// Locates the atom range covered by each zone of `slot`.
///
/// A range starts at the first atom of the zone's start residue and ends just
/// past the last atom of its stop residue.
fn locate_ranges(
    structure: &Structure,
    zones: &ZoneList,
    slot: StructureSlot,
) -> Result<Vec<Range<usize>>, EngineError> {
    zones
        .iter()
        .enumerate()
        .map(|(i, zone)| {
            let (Some(start_id), Some(stop_id)) = (zone.start_id(slot), zone.stop_id(slot)) else {
                return Err(EngineError::UnmappedZone { slot, zone: i + 1 });
            };
            let start = structure
                .find_residue(start_id)
                .ok_or(EngineError::ResidueNotFound {
                    slot,
                    spec: *start_id,
                })?;
            let stop = structure
                .find_residue(stop_id)
                .ok_or(EngineError::ResidueNotFound {
                    slot,
                    spec: *stop_id,
                })?;
            let end = structure.next_residue(stop);

            if start >= end {
                warn!(
                    zone = i + 1,
                    %start_id,
                    %stop_id,
                    "Zone starts after its stop residue; no atoms marked."
                );
            }
            Ok(start..end)
        })
        .collect()
}

/// Flags every atom of `structure` that lies inside a zone of `slot`.
///
/// All B-values are first reset to `values.background`; atoms from the first
/// atom of each zone's start residue through the last atom of its stop residue
/// then receive `values.core`. Zones are located before anything is written,
/// so on error the structure is left exactly as it was.
///
/// # Errors
///
/// Returns [`EngineError::UnmappedZone`] if the slot has not been mapped, or
/// [`EngineError::ResidueNotFound`] if a mapped identifier is absent from the
/// structure.
#[instrument(skip_all, fields(%slot))]
pub fn annotate(
    structure: &mut Structure,
    zones: &ZoneList,
    slot: StructureSlot,
    values: &AnnotationValues,
) -> Result<AnnotationSummary, EngineError> {
    let ranges = locate_ranges(structure, zones, slot)?;

    structure.fill_b_factors(values.background);

    let mut in_core = vec![false; structure.len()];
    let atoms = structure.atoms_mut();
    let mut zones_applied = 0;
    for range in ranges.into_iter().filter(|r| !r.is_empty()) {
        for (atom, flag) in atoms[range.clone()].iter_mut().zip(&mut in_core[range]) {
            atom.b_factor = values.core;
            *flag = true;
        }
        zones_applied += 1;
    }

    let summary = AnnotationSummary {
        zones_applied,
        atoms_marked: in_core.iter().filter(|&&f| f).count(),
    };
    info!(
        zones = summary.zones_applied,
        atoms = summary.atoms_marked,
        "Annotated core atoms."
    );
    Ok(summary)
}
