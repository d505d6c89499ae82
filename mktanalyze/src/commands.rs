use super::IOArgs;
use clap::Subcommand;

mod analyze;
pub use analyze::OutputFormat;

#[derive(Subcommand)]
pub enum Commands {
    /// Fit the market curves and report equilibrium, profit, and elasticity
    Analyze {
        #[command(flatten)]
        io: IOArgs,

        /// How to render the results (if omitted, will infer based on filename)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Sample the profit curve across the total supply and write it as JSON
    ProfitCurve {
        #[command(flatten)]
        io: IOArgs,

        /// The number of samples (overrides the configured resolution)
        #[arg(short, long)]
        resolution: Option<usize>,
    },
}
