// SPDX-License-Identifier: MPL-2.0
//! Command-line flags and report rendering for the `photo_extent` binary.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;

use crate::application::survey::{SurveyOptions, SurveyReport};
use crate::config::Config;
use crate::domain::error::GeoError;
use crate::domain::geo::Point;
use crate::error::{Error, Result};

pub const HELP: &str = "\
Usage: photo_extent --source-folder <DIR> [OPTIONS]

Finds the bounding box of a folder of geotagged photographs and prints its
size in meters and its east-west / north-south aspect ratio.

Options:
  --source-folder <DIR>    Folder with the photographs
  --filtered-folder <DIR>  Folder receiving photographs without a position
  --config <FILE>          Read settings from FILE instead of the default
  --json                   Print the report as JSON
  -h, --help               Print this help
";

/// Raw command-line flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    pub source_folder: Option<PathBuf>,
    pub filtered_folder: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub help: bool,
}

/// Parses flags, rejecting anything left over.
pub fn parse(mut args: pico_args::Arguments) -> Result<Flags> {
    let flags = Flags {
        help: args.contains(["-h", "--help"]),
        json: args.contains("--json"),
        source_folder: args.opt_value_from_str("--source-folder")?,
        filtered_folder: args.opt_value_from_str("--filtered-folder")?,
        config: args.opt_value_from_str("--config")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::Usage(format!(
            "unexpected arguments: {}",
            remaining
                .iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        )));
    }

    Ok(flags)
}

/// Everything a run needs, after flags have been layered over the config.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub source_folder: PathBuf,
    pub survey: SurveyOptions,
}

/// Merges flags over `config`.
///
/// The source folder is always required; the filtered folder is required
/// unless quarantining is switched off in the config.
pub fn resolve(flags: &Flags, config: &Config) -> Result<Settings> {
    let source_folder = flags
        .source_folder
        .clone()
        .or_else(|| config.source_folder.clone());
    let filtered_folder = flags
        .filtered_folder
        .clone()
        .or_else(|| config.filtered_folder.clone());

    let Some(source_folder) = source_folder else {
        return Err(Error::Usage(
            "all flags must be set: --source-folder is missing".into(),
        ));
    };

    let filtered_folder = if config.quarantine {
        let Some(folder) = filtered_folder else {
            return Err(Error::Usage(
                "all flags must be set: --filtered-folder is missing".into(),
            ));
        };
        Some(folder)
    } else {
        None
    };

    Ok(Settings {
        source_folder,
        survey: SurveyOptions {
            extensions: config.extensions.clone(),
            filtered_folder,
        },
    })
}

fn describe(point: &Point) -> String {
    format!(
        "{}  lat {}  lon {}",
        point.id(),
        point.latitude(),
        point.longitude()
    )
}

/// Renders the report for a terminal.
pub fn render_text(report: &SurveyReport, ratio: &std::result::Result<f64, GeoError>) -> String {
    let mut out = String::new();

    for point in &report.points {
        let _ = writeln!(out, "{}", describe(point));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "north: {}", describe(&report.north));
    let _ = writeln!(out, "south: {}", describe(&report.south));
    let _ = writeln!(out, "west:  {}", describe(&report.west));
    let _ = writeln!(out, "east:  {}", describe(&report.east));

    let measurement = &report.measurement;
    let _ = writeln!(out, "latitude span:  {}", measurement.latitude_delta);
    let _ = writeln!(
        out,
        "longitude span: {} (at {})",
        measurement.longitude_delta, measurement.reference_latitude
    );
    let _ = writeln!(out, "width:  {:.1} m", measurement.width_m);
    let _ = writeln!(out, "length: {:.1} m", measurement.length_m);

    match ratio {
        Ok(ratio) => {
            let _ = writeln!(out, "aspect ratio: {ratio:.4}");
        }
        Err(err) => {
            let _ = writeln!(out, "aspect ratio: undefined ({err})");
        }
    }

    for skipped in &report.skipped_comparisons {
        let _ = writeln!(
            out,
            "skipped {:?} of {}: {}",
            skipped.axis, skipped.point_id, skipped.reason
        );
    }
    for rejected in &report.rejected {
        let _ = match &rejected.moved_to {
            Some(path) => writeln!(
                out,
                "filtered {}: {} -> {}",
                rejected.file,
                rejected.reason,
                path.display()
            ),
            None => writeln!(out, "filtered {}: {}", rejected.file, rejected.reason),
        };
    }

    out
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    report: &'a SurveyReport,
    aspect_ratio: Option<f64>,
    error: Option<String>,
}

/// Renders the report as pretty JSON.
pub fn render_json(
    report: &SurveyReport,
    ratio: &std::result::Result<f64, GeoError>,
) -> Result<String> {
    let output = JsonOutput {
        report,
        aspect_ratio: ratio.as_ref().ok().copied(),
        error: ratio.as_ref().err().map(ToString::to_string),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
