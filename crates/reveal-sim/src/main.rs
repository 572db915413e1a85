mod cli;
mod sim;

use anyhow::{Context, Result};
use clap::Parser;
use reveal_core::attach;
use std::time::Duration;

use crate::cli::Cli;
use crate::sim::{simulate, PrintSink, Report, Scenario, SimSection};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let report = run(&cli)?;
    log::info!(
        "[sim] {} frames, {} ticks, {} loops, {} resize recomputes, settled: {}",
        report.frames,
        report.ticks,
        report.loops,
        report.resize_recomputes,
        report.settled
    );
    if !report.settled {
        log::warn!("[sim] still converging after {} frames", cli.max_frames);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<Report> {
    let config = cli.load_config()?;
    let section = SimSection {
        omit: cli.omit.map(Into::into),
    };
    let mut instance = attach(&section, config).context("attaching simulated section")?;

    let scenario = Scenario {
        container_height: cli.container_height,
        viewport_height: cli.viewport_height,
        stops: cli.stops.clone(),
        interval: cli.interval,
        frame: Duration::from_millis(cli.frame_ms),
        resize: cli.resize_frame.map(|f| (f, cli.resized_viewport)),
        max_frames: cli.max_frames,
    };

    let mut sink = PrintSink::new(cli.json);
    simulate(&mut instance.effect, &scenario, &mut sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_part_is_reported_as_an_error() {
        let cli = Cli::parse_from(["reveal-sim", "--omit", "text-overlay"]);
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("missing required element: text overlay"));
    }

    #[test]
    fn default_run_settles() {
        let cli = Cli::parse_from(["reveal-sim", "--json"]);
        let report = run(&cli).unwrap();
        assert!(report.settled);
    }
}
