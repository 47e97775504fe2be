use crate::settings::Settings;
use crate::writers::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flight-difficulty")]
#[command(about = "Score, rank and classify daily flight departures by operational difficulty")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

/// Where the five source tables come from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    #[arg(long, help = "Settings file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Directory holding the source CSV files [default: data]")]
    pub data_dir: Option<PathBuf>,

    #[arg(long)]
    pub flights_file: Option<String>,

    #[arg(long)]
    pub pnr_file: Option<String>,

    #[arg(long)]
    pub remarks_file: Option<String>,

    #[arg(long)]
    pub bags_file: Option<String>,

    #[arg(long)]
    pub airports_file: Option<String>,
}

impl SourceArgs {
    /// Overlay the flags that were given onto loaded settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(ref dir) = self.data_dir {
            settings.data_dir = dir.clone();
        }
        let files = [
            (&self.flights_file, &mut settings.flights_file),
            (&self.pnr_file, &mut settings.pnr_file),
            (&self.remarks_file, &mut settings.remarks_file),
            (&self.bags_file, &mut settings.bags_file),
            (&self.airports_file, &mut settings.airports_file),
        ];
        for (flag, setting) in files {
            if let Some(name) = flag {
                *setting = name.clone();
            }
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline and write the scored flight table
    Score {
        #[command(flatten)]
        sources: SourceArgs,

        #[arg(
            short,
            long,
            help = "Output file path [default: output/flight_difficulty_scores.{csv|parquet}]"
        )]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, help = "Output format [default: from extension, else csv]")]
        format: Option<OutputFormat>,

        #[arg(short, long, help = "Parquet compression: snappy, gzip, lz4, zstd or none")]
        compression: Option<String>,

        #[arg(long, help = "Also write the per-day summary as JSON")]
        summary_json: Option<PathBuf>,

        #[arg(short, long, default_value = "false", help = "No progress spinner or summary")]
        quiet: bool,
    },

    /// Load and join the source tables without writing anything
    Validate {
        #[command(flatten)]
        sources: SourceArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score_flags() {
        let cli = Cli::parse_from([
            "flight-difficulty",
            "score",
            "--data-dir",
            "/tmp/ops",
            "--bags-file",
            "bags.csv",
            "-o",
            "out.parquet",
            "--quiet",
        ]);

        match cli.command {
            Commands::Score {
                sources,
                output,
                format,
                quiet,
                ..
            } => {
                let mut settings = Settings::default();
                sources.apply(&mut settings);

                assert_eq!(settings.data_dir, PathBuf::from("/tmp/ops"));
                assert_eq!(settings.bags_file, "bags.csv");
                assert_eq!(settings.pnr_file, crate::utils::constants::PNR_FILE);
                assert_eq!(output, Some(PathBuf::from("out.parquet")));
                assert_eq!(format, None);
                assert!(quiet);
            }
            Commands::Validate { .. } => panic!("expected score"),
        }
    }
}
