use crate::core::models::ids::{ResidueSpecifier, StructureSlot};
use crate::core::models::zone::ZoneList;
use crate::engine::error::EngineError;
use crate::engine::index::ReferenceIndex;
use tracing::{debug, instrument};

type ResolvedZones = Vec<(ResidueSpecifier, ResidueSpecifier)>;

/// Resolves the start/stop positions of every zone for the index's slot.
///
/// Nothing is written to `zones`; either every zone resolves or the first
/// out-of-range position is returned.
pub fn resolve_zones(
    zones: &ZoneList,
    index: &ReferenceIndex,
) -> Result<ResolvedZones, EngineError> {
    let slot = index.slot();
    zones
        .iter()
        .enumerate()
        .map(|(i, zone)| {
            let start = index.resolve(zone.start(slot), i + 1)?;
            let stop = index.resolve(zone.stop(slot), i + 1)?;
            Ok((start, stop))
        })
        .collect()
}

fn commit(zones: &mut ZoneList, slot: StructureSlot, resolved: ResolvedZones) {
    for (zone, (start, stop)) in zones.iter_mut().zip(resolved) {
        zone.set_identifiers(slot, start, stop);
    }
}

/// Fills in the residue identifiers of one structure slot.
///
/// The slot is taken from `index`. Mapping is all-or-nothing: if any position
/// falls outside the index, the error is returned and no zone is modified.
/// Mapping the same slot again with the same index yields identical results.
///
/// # Errors
///
/// Returns [`EngineError::PositionOutOfRange`] for the first zone whose start or
/// stop position cannot be resolved.
#[instrument(skip_all, fields(slot = %index.slot()))]
pub fn map_zones(zones: &mut ZoneList, index: &ReferenceIndex) -> Result<(), EngineError> {
    let resolved = resolve_zones(zones, index)?;
    commit(zones, index.slot(), resolved);
    debug!(zones = zones.len(), "Mapped zones onto residue identifiers.");
    Ok(())
}

/// Maps both structure slots, resolving them concurrently.
///
/// The two slots share no data, so they are resolved on rayon's pool and then
/// committed together. If either slot fails, neither slot is modified.
///
/// # Errors
///
/// Returns the first slot's error if it failed, otherwise the second slot's.
#[instrument(skip_all)]
pub fn map_both(
    zones: &mut ZoneList,
    first: &ReferenceIndex,
    second: &ReferenceIndex,
) -> Result<(), EngineError> {
    let (first_resolved, second_resolved) = {
        let shared: &ZoneList = zones;
        rayon::join(
            || resolve_zones(shared, first),
            || resolve_zones(shared, second),
        )
    };
    let first_resolved = first_resolved?;
    let second_resolved = second_resolved?;

    commit(zones, first.slot(), first_resolved);
    commit(zones, second.slot(), second_resolved);
    debug!(zones = zones.len(), "Mapped zones onto both structures.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::structure::Structure;
    use crate::core::models::zone::Zone;
    use nalgebra::Point3;

    fn structure(chain: char, numbers: impl IntoIterator<Item = isize>) -> Structure {
        Structure::from_atoms(
            numbers
                .into_iter()
                .flat_map(|n| {
                    ["N", "CA", "C"].map(|name| {
                        Atom::new(
                            name,
                            ResidueSpecifier::new(chain, n, ' '),
                            "GLY",
                            Point3::origin(),
                        )
                    })
                })
                .collect(),
        )
    }

    fn index(slot: StructureSlot, chain: char, offset: isize, len: isize) -> ReferenceIndex {
        let s = structure(chain, (1..=len).map(|k| k + offset));
        ReferenceIndex::build(&s, slot, "CA").unwrap()
    }

    fn spec(chain: char, number: isize) -> ResidueSpecifier {
        ResidueSpecifier::new(chain, number, ' ')
    }

    #[test]
    fn map_zones_fills_identifiers_for_one_slot() {
        let mut zones = ZoneList::from(vec![Zone::new((12, 45), (8, 41))]);
        let idx = index(StructureSlot::First, 'A', 100, 60);

        map_zones(&mut zones, &idx).unwrap();

        let zone = zones.get(0).unwrap();
        assert_eq!(zone.start_id(StructureSlot::First), Some(&spec('A', 112)));
        assert_eq!(zone.stop_id(StructureSlot::First), Some(&spec('A', 145)));
        assert!(!zone.is_mapped(StructureSlot::Second));
    }

    #[test]
    fn mapped_identifier_matches_indexed_residue_for_every_position() {
        let idx = index(StructureSlot::Second, 'H', 0, 25);
        let mut zones: ZoneList = (1..=25).map(|k| Zone::new((1, 1), (k, k))).collect();

        map_zones(&mut zones, &idx).unwrap();

        for (k, zone) in zones.iter().enumerate() {
            let expected = *idx.get(k).unwrap();
            assert_eq!(zone.start_id(StructureSlot::Second), Some(&expected));
            assert_eq!(zone.stop_id(StructureSlot::Second), Some(&expected));
        }
    }

    #[test]
    fn map_zones_is_idempotent() {
        let idx = index(StructureSlot::First, 'A', 0, 10);
        let mut zones = ZoneList::from(vec![Zone::new((1, 4), (1, 1)), Zone::new((6, 10), (1, 1))]);

        map_zones(&mut zones, &idx).unwrap();
        let once = zones.clone();
        map_zones(&mut zones, &idx).unwrap();
        assert_eq!(zones, once);
    }

    #[test]
    fn map_zones_rejects_out_of_range_positions_without_partial_update() {
        let idx = index(StructureSlot::First, 'A', 0, 10);
        for bad in [0, 11, -4] {
            let mut zones = ZoneList::from(vec![
                Zone::new((1, 5), (1, 1)),
                Zone::new((bad, 8), (1, 1)),
                Zone::new((2, 3), (1, 1)),
            ]);
            let err = map_zones(&mut zones, &idx).unwrap_err();
            assert_eq!(
                err,
                EngineError::PositionOutOfRange {
                    slot: StructureSlot::First,
                    zone: 2,
                    position: bad,
                    len: 10,
                }
            );
            assert!(zones.iter().all(|z| !z.is_mapped(StructureSlot::First)));
        }
    }

    #[test]
    fn map_zones_checks_stop_positions_too() {
        let idx = index(StructureSlot::Second, 'B', 0, 10);
        let mut zones = ZoneList::from(vec![Zone::new((1, 1), (3, 12))]);
        assert!(matches!(
            map_zones(&mut zones, &idx),
            Err(EngineError::PositionOutOfRange { position: 12, zone: 1, .. })
        ));
    }

    #[test]
    fn map_both_fills_both_slots() {
        let first = index(StructureSlot::First, 'A', 100, 60);
        let second = index(StructureSlot::Second, 'H', 1, 60);
        let mut zones = ZoneList::from(vec![Zone::new((12, 45), (8, 41))]);

        map_both(&mut zones, &first, &second).unwrap();

        let zone = zones.get(0).unwrap();
        assert_eq!(zone.start_id(StructureSlot::First), Some(&spec('A', 112)));
        assert_eq!(zone.stop_id(StructureSlot::First), Some(&spec('A', 145)));
        assert_eq!(zone.start_id(StructureSlot::Second), Some(&spec('H', 9)));
        assert_eq!(zone.stop_id(StructureSlot::Second), Some(&spec('H', 42)));
    }

    #[test]
    fn map_both_leaves_zones_untouched_when_one_slot_fails() {
        let first = index(StructureSlot::First, 'A', 0, 60);
        let second = index(StructureSlot::Second, 'H', 0, 5);
        let mut zones = ZoneList::from(vec![Zone::new((12, 45), (8, 41))]);

        let err = map_both(&mut zones, &first, &second).unwrap_err();
        assert!(matches!(
            err,
            EngineError::PositionOutOfRange {
                slot: StructureSlot::Second,
                ..
            }
        ));
        assert!(!zones.get(0).unwrap().is_mapped(StructureSlot::First));
    }
}
