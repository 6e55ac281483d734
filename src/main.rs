// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;

use photo_extent::application::survey::survey_folder;
use photo_extent::cli;
use photo_extent::config::{self, DEFAULT_LOG_FILTER};
use photo_extent::error::Result;
use photo_extent::infrastructure::ExifPointReader;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let flags = cli::parse(pico_args::Arguments::from_env())?;
    if flags.help {
        print!("{}", cli::HELP);
        return Ok(ExitCode::SUCCESS);
    }

    let config = match &flags.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    let settings = cli::resolve(&flags, &config)?;

    let report = survey_folder(
        &settings.source_folder,
        &settings.survey,
        &ExifPointReader::new(),
    )?;
    let ratio = report.aspect_ratio();

    if flags.json {
        println!("{}", cli::render_json(&report, &ratio)?);
    } else {
        print!("{}", cli::render_text(&report, &ratio));
    }

    Ok(match ratio {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    })
}
