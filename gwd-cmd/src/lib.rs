//! Command implementations for GWD CLI.
//!
//! Provides subcommands for querying India-WRIS groundwater data,
//! both for a single district and as an all-India station sweep.

use clap::Subcommand;

pub mod query;
pub mod sweep;

#[derive(Subcommand)]
pub enum Command {
    /// Query WRIS for one district's groundwater levels
    Query {
        /// State name, e.g. "Maharashtra"
        #[arg(short, long)]
        state: String,

        /// District name, e.g. "Pune"
        #[arg(short, long)]
        district: String,

        /// Window start (YYYY-MM-DD); defaults to one year back
        #[arg(long)]
        start: Option<String>,

        /// Window end (YYYY-MM-DD); defaults to today
        #[arg(long)]
        end: Option<String>,

        /// Optional output path for the raw observations CSV
        #[arg(short = 'o', long)]
        observations_csv: Option<String>,
    },

    /// Walk every district in the location directory and record the newest
    /// reading per station
    Sweep {
        /// Output path for the per-station latest readings CSV
        #[arg(short = 't', long)]
        stations_csv: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Query {
            state,
            district,
            start,
            end,
            observations_csv,
        } => {
            query::run_query(
                &state,
                &district,
                start.as_deref(),
                end.as_deref(),
                observations_csv.as_deref(),
            )
            .await
        }
        Command::Sweep {
            stations_csv,
        } => {
            sweep::run_sweep(&stations_csv).await
        }
    }
}
