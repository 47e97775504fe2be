use crate::analyzers::DifficultyAnalyzer;
use crate::cli::args::{Cli, Commands, SourceArgs};
use crate::processors::DifficultyPipeline;
use crate::readers::{SourceTables, TableLoader};
use crate::settings::Settings;
use crate::utils::progress::ProgressReporter;
use crate::writers::{write_scored_table, OutputFormat, ParquetWriter};
use anyhow::{Context, Result};
use tracing::info;
use validator::Validate;

/// Execute a parsed command line. Logging must already be initialised.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            sources,
            output,
            format,
            compression,
            summary_json,
            quiet,
        } => {
            let mut settings = load_settings(&sources)?;
            if output.is_some() {
                settings.output = output;
            }
            if format.is_some() {
                settings.format = format;
            }
            if let Some(compression) = compression {
                settings.compression = compression;
            }
            settings.validate().context("Invalid settings")?;

            let output_path = settings.output_path();
            let output_format = settings.output_format();

            let progress = ProgressReporter::new_spinner("Loading source tables...", quiet);
            let tables = load_tables(&settings)?;

            let result = DifficultyPipeline::new().run(&tables, Some(&progress));
            let summary = DifficultyAnalyzer::new().summarize(&result);

            // a bad summary path must fail before the scored table is written
            let staged_summary = summary_json
                .as_deref()
                .map(|path| {
                    summary
                        .stage_json(path)
                        .with_context(|| format!("Failed to write summary {}", path.display()))
                })
                .transpose()?;

            progress.set_message("Writing scored table...");
            write_scored_table(
                &result.table,
                &output_path,
                output_format,
                &settings.compression,
            )
            .with_context(|| format!("Failed to write {}", output_path.display()))?;

            progress.finish_with_message(&format!(
                "Scored {} flights -> {}",
                result.table.len(),
                output_path.display()
            ));

            if let (Some(path), Some(staged)) = (summary_json, staged_summary) {
                staged
                    .persist(&path)
                    .with_context(|| format!("Failed to write summary {}", path.display()))?;
                info!(path = %path.display(), "Summary written");
            }

            if !quiet {
                println!("\n{}", summary.detailed_summary());

                if output_format == OutputFormat::Parquet {
                    let file_info = ParquetWriter::new().get_file_info(&output_path)?;
                    println!("{}", file_info.summary());
                }
            }
        }

        Commands::Validate { sources } => {
            let settings = load_settings(&sources)?;
            let tables = load_tables(&settings)?;

            let join_stats = DifficultyPipeline::new().join_only(&tables);

            println!("=== Source Validation ===");
            println!("{}", tables.summary());
            println!(
                "Flights with unparseable departure times: {}",
                tables.flights.unparsed_timestamp_count()
            );
            println!("{}", join_stats.summary());
            println!("All required columns present - no output file written");
        }
    }

    Ok(())
}

fn load_settings(sources: &SourceArgs) -> Result<Settings> {
    let mut settings = Settings::load(sources.config.as_deref()).context("Failed to load settings")?;
    sources.apply(&mut settings);
    settings.validate().context("Invalid settings")?;
    Ok(settings)
}

fn load_tables(settings: &Settings) -> Result<SourceTables> {
    TableLoader::new(settings.source_paths())
        .load()
        .with_context(|| format!("Failed to load source tables from {}", settings.data_dir.display()))
}
