use clap::Parser;
use mkt_solver::analyze;
use std::path::PathBuf;

mod io;
pub use io::*;

mod commands;
pub use commands::*;

mod config;
pub use config::AppConfig;

mod report;
pub use report::write_report;

// The top-level arguments: an optional config file and the subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "MKT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let AppConfig { analysis } = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::Analyze { io, format } => {
                let market = io.market()?;
                let result = analyze(&market.buyers, &market.sellers, &analysis)?;

                // An unrecognized extension just means a plain report
                let format = format.unwrap_or_else(|| {
                    io.extension()
                        .and_then(|ext| ext.parse().ok())
                        .unwrap_or(OutputFormat::Text)
                });

                let mut output = io.write()?;
                format.render(&result, &analysis.display, &mut output)?;
            }
            Commands::ProfitCurve { io, resolution } => {
                let mut analysis = analysis;
                if let Some(resolution) = resolution {
                    analysis.resolution = resolution;
                }
                if analysis.resolution == 0 {
                    return Err(CliError::EmptyProfitCurve)?;
                }

                let market = io.market()?;
                let result = analyze(&market.buyers, &market.sellers, &analysis)?;

                let output = io.write()?;
                serde_json::to_writer_pretty(output, &result.profit_curve)?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Profit curve resolution must be positive")]
    EmptyProfitCurve,
}
