use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use crate::config::{AppConfig, Mode};
use crate::error::Result;
use crate::generate::{self, GeneratedPath};
use crate::materialize;
use crate::progress::{Progress, ProgressKind, ProgressUpdate};
use crate::record::{self, CsvRecord, ReadOutcome};
use crate::vocab::Vocabulary;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FileOutcome {
    Written {
        path: GeneratedPath,
        file: PathBuf,
        record: CsvRecord,
    },
    Read {
        path: GeneratedPath,
        outcome: ReadOutcome,
    },
}

impl FileOutcome {
    pub fn schedule_path(&self) -> &GeneratedPath {
        match self {
            FileOutcome::Written { path, .. } | FileOutcome::Read { path, .. } => path,
        }
    }

    pub fn file(&self) -> &Path {
        match self {
            FileOutcome::Written { file, .. } => file,
            FileOutcome::Read { outcome, .. } => &outcome.path,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: Mode,
    pub files: Vec<FileOutcome>,
    /// Sum of counted durations; only set in read mode.
    pub total: Option<i64>,
}

/// Generates the schedule paths, creates their directories and then writes
/// or reads one record per path in order. The first failure ends the run;
/// files written before it stay on disk.
///
/// `on_file` sees each outcome as soon as the file has been handled.
pub fn run<F>(
    config: &AppConfig,
    vocab: &Vocabulary,
    progress: &mut Progress,
    mut on_file: F,
) -> Result<RunReport>
where
    F: FnMut(&FileOutcome),
{
    let paths = generate::generate(vocab, &config.months, &config.days, &config.times)?;

    let stage = progress.start(ProgressKind::Materialize { dirs: paths.len() });
    let dirs = materialize::ensure(&config.root, &paths)?;
    progress.finish(stage, None);
    info!(target: "harmonogram::materialize", dirs = dirs.len(), root = ?config.root, "directories ready");

    let mut files = Vec::with_capacity(paths.len());
    let total = match config.mode {
        Mode::Create => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let stage = progress.start(ProgressKind::Create { files: paths.len() });
            for (path, dir) in paths.into_iter().zip(dirs) {
                let (file, record) = record::write_random(&dir, &mut rng)?;
                info!(target: "harmonogram::create", file = ?file, "record written");
                progress.update(
                    &stage,
                    ProgressUpdate::Written {
                        file: file.display().to_string(),
                    },
                );
                let outcome = FileOutcome::Written { path, file, record };
                on_file(&outcome);
                files.push(outcome);
            }
            progress.finish(
                stage,
                Some(ProgressUpdate::Summary {
                    files: files.len(),
                    total: None,
                }),
            );
            None
        }
        Mode::Read => {
            let stage = progress.start(ProgressKind::Read { files: paths.len() });
            let mut total = 0i64;
            for (path, dir) in paths.into_iter().zip(dirs) {
                let outcome = record::read_record(&dir)?;
                total += outcome.seconds;
                progress.update(
                    &stage,
                    ProgressUpdate::Duration {
                        file: outcome.path.display().to_string(),
                        model: outcome.model.clone(),
                        seconds: outcome.seconds,
                        total,
                    },
                );
                let outcome = FileOutcome::Read { path, outcome };
                on_file(&outcome);
                files.push(outcome);
            }
            progress.finish(
                stage,
                Some(ProgressUpdate::Summary {
                    files: files.len(),
                    total: Some(total),
                }),
            );
            info!(target: "harmonogram::read", files = files.len(), total, "durations summed");
            Some(total)
        }
    };

    Ok(RunReport {
        mode: config.mode,
        files,
        total,
    })
}
