use anyhow::Context;
use clap::Parser;
use harmonogram::app::{self, FileOutcome};
use harmonogram::config::{AppConfig, Cli, Mode};
use harmonogram::progress::Progress;
use harmonogram::render;
use harmonogram::Vocabulary;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let vocab = Vocabulary::polish();
    let config = AppConfig::from_cli(cli, vocab).context("invalid arguments")?;

    let mut progress = Progress::new(config.quiet, config.json);
    let human = !config.json;
    let report = app::run(&config, vocab, &mut progress, |outcome| {
        if let (true, FileOutcome::Written { file, .. }) = (human, outcome) {
            println!("Wrote {}", file.display());
        }
    })
    .map_err(|err| {
        error!(kind = ?err.kind(), "run aborted");
        err
    })
    .with_context(|| format!("{:?} run failed", config.mode))?;

    if human {
        if config.table {
            render::print_table(&report);
        }
        if let (Mode::Read, Some(total)) = (report.mode, report.total) {
            println!("Total duration: {total}s");
        }
    }
    Ok(())
}
