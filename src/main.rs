use anyhow::Result;
use diamond::cli::{self, Commands};
use diamond::commands::{self, ExpandConfig, InspectConfig};

fn main() -> Result<()> {
    let cli = cli::parse_args();

    match cli.command {
        Commands::Expand {
            network,
            seeds,
            num,
            alpha,
            score_threshold,
            format,
            output,
            verbosity,
        } => {
            init_logging(verbosity);
            commands::handle_expand(ExpandConfig {
                network,
                seeds,
                num,
                alpha,
                score_threshold,
                format: format.into(),
                output,
            })
        }
        Commands::Inspect {
            network,
            seeds,
            score_threshold,
            verbosity,
        } => {
            init_logging(verbosity);
            commands::handle_inspect(InspectConfig {
                network,
                seeds,
                score_threshold,
            })
        }
    }
}

// Progress is logged at info level by default, like the reference tool;
// -v adds per-candidate scoring detail. RUST_LOG still wins when set.
fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
