use super::ids::{ResidueSpecifier, StructureSlot};

/// One aligned residue-range correspondence between two structures.
///
/// A zone is created from sequential C-alpha positions (1-based, one pair per
/// structure) and later gains stable residue identifiers once each structure
/// slot has been mapped. Until then the identifiers are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Zone {
    pub start: [isize; 2],
    pub stop: [isize; 2],
    pub start_id: [Option<ResidueSpecifier>; 2],
    pub stop_id: [Option<ResidueSpecifier>; 2],
}

impl Zone {
    /// Creates an unmapped zone from the positions of both structures.
    pub fn new(first: (isize, isize), second: (isize, isize)) -> Self {
        Self {
            start: [first.0, second.0],
            stop: [first.1, second.1],
            start_id: [None, None],
            stop_id: [None, None],
        }
    }

    #[inline]
    pub fn start(&self, slot: StructureSlot) -> isize {
        self.start[slot.index()]
    }

    #[inline]
    pub fn stop(&self, slot: StructureSlot) -> isize {
        self.stop[slot.index()]
    }

    #[inline]
    pub fn start_id(&self, slot: StructureSlot) -> Option<&ResidueSpecifier> {
        self.start_id[slot.index()].as_ref()
    }

    #[inline]
    pub fn stop_id(&self, slot: StructureSlot) -> Option<&ResidueSpecifier> {
        self.stop_id[slot.index()].as_ref()
    }

    /// Returns `true` once both identifiers for `slot` have been resolved.
    pub fn is_mapped(&self, slot: StructureSlot) -> bool {
        self.start_id(slot).is_some() && self.stop_id(slot).is_some()
    }

    pub fn set_identifiers(
        &mut self,
        slot: StructureSlot,
        start: ResidueSpecifier,
        stop: ResidueSpecifier,
    ) {
        self.start_id[slot.index()] = Some(start);
        self.stop_id[slot.index()] = Some(stop);
    }
}

/// An ordered list of zones in zone-file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneList {
    zones: Vec<Zone>,
}

impl ZoneList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, zone: Zone) {
        self.zones.push(zone);
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Zone> {
        self.zones.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Zone> {
        self.zones.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Zone> {
        self.zones.iter_mut()
    }
}

impl From<Vec<Zone>> for ZoneList {
    fn from(zones: Vec<Zone>) -> Self {
        Self { zones }
    }
}

impl FromIterator<Zone> for ZoneList {
    fn from_iter<I: IntoIterator<Item = Zone>>(iter: I) -> Self {
        Self {
            zones: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ZoneList {
    type Item = &'a Zone;
    type IntoIter = std::slice::Iter<'a, Zone>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.iter()
    }
}

/// Zone lists for several structure-pair groups (multi-file mode).
///
/// Only the container exists; no batch processing is built on top of it yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneSet {
    groups: Vec<ZoneList>,
}

impl ZoneSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, zones: ZoneList) {
        self.groups.push(zones);
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ZoneList> {
        self.groups.iter()
    }
}
