use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::expand::{expand, ExpansionParams};
use crate::io::output::{create_writer, ExpansionReport, OutputFormat};
use crate::io::{network, seeds};

pub struct ExpandConfig {
    pub network: PathBuf,
    pub seeds: PathBuf,
    pub num: usize,
    pub alpha: u64,
    pub score_threshold: f64,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_expand(config: ExpandConfig) -> Result<()> {
    let net = network::read_network(&config.network, config.score_threshold)?;
    let seed_set = seeds::read_seeds(&config.seeds)?;
    let params = ExpansionParams::new(config.num, config.alpha);

    let run = expand(&net, &seed_set, &params)?;
    log::info!(
        "expansion finished: {} node(s) added ({:?})",
        run.records.len(),
        run.termination
    );

    let report = ExpansionReport::new(net.node_count(), net.edge_count(), params, run);
    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = create_writer(config.format, sink);
    writer.write_report(&report)?;
    if let Some(path) = &config.output {
        log::info!("results written to {}", path.display());
    }
    Ok(())
}
