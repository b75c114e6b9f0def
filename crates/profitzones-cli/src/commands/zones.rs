use crate::cli::Cli;
use crate::config::{PartialZonesConfig, ResolvedSettings};
use crate::error::{CliError, Result};
use profitzones::{
    core::io::{
        pdb::{PdbFile, PdbMetadata},
        traits::StructureFile,
        zones::ZoneFile,
    },
    core::models::{structure::Structure, zone::ZoneList},
    engine::report,
    workflows,
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

pub fn run(cli: &Cli) -> Result<()> {
    let settings = PartialZonesConfig::load(cli.config.as_deref())?.merge_with_cli(cli)?;
    let listing = execute(cli, &settings)?;
    print!("{}", listing);
    Ok(())
}

/// Runs the whole conversion and returns the zone listing for stdout.
pub fn execute(cli: &Cli, settings: &ResolvedSettings) -> Result<String> {
    if cli.multi_file.is_some() {
        return Err(CliError::Unsupported("Multi-file mode (-m)"));
    }

    info!("Reading zones from {:?}", &cli.zone_file);
    let zones = read_zones(&cli.zone_file)?;

    let (mut first, first_metadata) = read_structure(&cli.pdb_file1)?;
    let (mut second, second_metadata) = read_structure(&cli.pdb_file2)?;

    let result = workflows::zones::run(zones, &mut first, &mut second, &settings.mapping)?;
    info!("Mapped {} zone(s).", result.zones.len());

    for (output, structure, metadata) in [
        (&cli.output1, &first, &first_metadata),
        (&cli.output2, &second, &second_metadata),
    ] {
        if let Some(path) = output {
            write_structure(path, structure, metadata)?;
        }
    }

    Ok(if settings.show_positions {
        report::render_with_positions(&result.zones)
    } else {
        report::render(&result.zones)
    })
}

fn read_zones(path: &Path) -> Result<ZoneList> {
    let file = File::open(path).map_err(|e| zone_error(path, e))?;
    ZoneFile::read_from(&mut BufReader::new(file)).map_err(|e| zone_error(path, e))
}

fn zone_error(path: &Path, e: std::io::Error) -> CliError {
    CliError::FileParsing {
        kind: "zone file",
        path: path.to_path_buf(),
        source: e.into(),
    }
}

fn read_structure(path: &Path) -> Result<(Structure, PdbMetadata)> {
    info!("Loading structure from {:?}", path);
    PdbFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        kind: "PDB file",
        path: path.to_path_buf(),
        source: e.into(),
    })
}

fn write_structure(path: &Path, structure: &Structure, metadata: &PdbMetadata) -> Result<()> {
    info!("Writing annotated structure to {:?}", path);
    PdbFile::write_to_path(structure, metadata, path).map_err(|e| CliError::FileWriting {
        kind: "annotated structure",
        path: path.to_path_buf(),
        source: e.into(),
    })
}
