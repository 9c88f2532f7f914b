use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Daily CTC factory records with recovery and fuel metrics.
#[derive(Parser, Debug)]
#[command(name = "ctc-tracker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Data directory holding the SQLite database
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the local HTTP API
    Serve(ServeArgs),

    /// Record one day of production
    Add(AddArgs),

    /// List stored records in entry order
    List(OwnerArg),

    /// Print the report table for a time window
    Report(ReportArgs),

    /// Show or change the week start used by weekly reports
    Settings(SettingsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the configured port for this run only
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct OwnerArg {
    /// Owner whose records are used
    #[arg(long)]
    pub owner: String,
}

/// Form values as typed; validation happens when the record is saved.
#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub owner: String,
    /// Production day, YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    #[arg(long)]
    pub input_kg: String,
    #[arg(long)]
    pub tea_made_gl: String,
    #[arg(long)]
    pub tea_made_ors: String,
    #[arg(long)]
    pub ctc_hours: String,
    #[arg(long)]
    pub dryer_hours: String,
    #[arg(long)]
    pub heater_hours: String,
    #[arg(long)]
    pub coal_kg: String,
    #[arg(long)]
    pub electricity_units: String,
    #[arg(long)]
    pub mandays: String,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[arg(long)]
    pub owner: String,
    /// all, today, week or month
    #[arg(long, default_value = "all")]
    pub window: String,
    /// Reference time (RFC 3339 or YYYY-MM-DD); defaults to the local clock
    #[arg(long)]
    pub now: Option<String>,
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// New first day of the week, e.g. monday or sun
    #[arg(long)]
    pub week_start: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_report_with_defaults() {
        let cli = Cli::try_parse_from(["ctc-tracker", "report", "--owner", "estate-1"])
            .expect("parse");
        let Commands::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.owner, "estate-1");
        assert_eq!(args.window, "all");
        assert!(args.now.is_none());
        assert!(!args.json);
    }

    #[test]
    fn data_dir_is_global() {
        let cli = Cli::try_parse_from([
            "ctc-tracker",
            "serve",
            "--port",
            "0",
            "--data-dir",
            "/tmp/ctc",
        ])
        .expect("parse");
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/ctc")));
        assert!(matches!(cli.command, Commands::Serve(ServeArgs { port: Some(0) })));
    }

    #[test]
    fn add_requires_every_field() {
        assert!(
            Cli::try_parse_from(["ctc-tracker", "add", "--owner", "o", "--date", "2024-06-10"])
                .is_err()
        );
    }
}
