use crate::core::models::ids::StructureSlot;
use crate::core::models::structure::Structure;
use crate::core::models::zone::ZoneList;
use crate::engine::annotate::{AnnotationSummary, annotate};
use crate::engine::config::ZoneMappingConfig;
use crate::engine::error::EngineError;
use crate::engine::index::ReferenceIndex;
use crate::engine::mapper::map_both;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneMappingResult {
    /// Zones with identifiers filled in for both structures.
    pub zones: ZoneList,
    /// Per-structure annotation summaries, present when annotation was enabled.
    pub annotations: Option<[AnnotationSummary; 2]>,
}

/// Maps a zone list onto two structures and optionally annotates them.
///
/// 1. An empty zone list is rejected.
/// 2. A reference-atom index is built for each structure.
/// 3. Both slots are mapped (concurrently); a failure leaves every zone unmapped.
/// 4. If `config.annotate` is set, the B-values of both structures are rewritten.
///
/// # Errors
///
/// Returns the first [`EngineError`] encountered. The structures may already
/// carry new B-values when annotation of the second structure fails, so callers
/// must not write either structure after an error.
#[instrument(skip_all, name = "zone_mapping_workflow")]
pub fn run(
    mut zones: ZoneList,
    first: &mut Structure,
    second: &mut Structure,
    config: &ZoneMappingConfig,
) -> Result<ZoneMappingResult, EngineError> {
    if zones.is_empty() {
        return Err(EngineError::EmptyZoneList);
    }
    info!(zones = zones.len(), "Starting zone mapping.");

    let first_index = ReferenceIndex::build(first, StructureSlot::First, &config.reference_atom)?;
    let second_index =
        ReferenceIndex::build(second, StructureSlot::Second, &config.reference_atom)?;

    map_both(&mut zones, &first_index, &second_index)?;

    let annotations = if config.annotate {
        let first_summary = annotate(first, &zones, StructureSlot::First, &config.values)?;
        let second_summary = annotate(second, &zones, StructureSlot::Second, &config.values)?;
        Some([first_summary, second_summary])
    } else {
        None
    };

    info!("Zone mapping complete.");
    Ok(ZoneMappingResult { zones, annotations })
}
