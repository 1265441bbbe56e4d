use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;
use tracing::warn;

/// Phase of a run. Phases never overlap: each one is finished before the
/// next is started.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgressKind {
    Materialize { dirs: usize },
    Create { files: usize },
    Read { files: usize },
}

impl ProgressKind {
    fn steps(&self) -> u64 {
        let steps = match self {
            ProgressKind::Materialize { dirs } => *dirs,
            ProgressKind::Create { files } | ProgressKind::Read { files } => *files,
        };
        steps as u64
    }

    fn label(&self) -> &'static str {
        match self {
            ProgressKind::Materialize { .. } => "Creating directories",
            ProgressKind::Create { .. } => "Writing records",
            ProgressKind::Read { .. } => "Reading records",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ProgressUpdate {
    Written {
        file: String,
    },
    Duration {
        file: String,
        model: String,
        seconds: i64,
        total: i64,
    },
    Summary {
        files: usize,
        total: Option<i64>,
    },
}

impl ProgressUpdate {
    fn file(&self) -> Option<&str> {
        match self {
            ProgressUpdate::Written { file } | ProgressUpdate::Duration { file, .. } => {
                Some(file.as_str())
            }
            ProgressUpdate::Summary { .. } => None,
        }
    }
}

/// One JSON line on stdout in `--json` mode.
#[derive(Debug, Serialize)]
pub struct ProgressEvent<'a> {
    pub id: u64,
    pub kind: &'a ProgressKind,
    pub update: Option<&'a ProgressUpdate>,
    pub done: bool,
}

/// A running phase; hand it back to [`Progress::finish`] when done.
pub struct Stage {
    pub id: u64,
    kind: ProgressKind,
    bar: Option<ProgressBar>,
}

/// Bar on stderr unless quiet or JSON output was requested.
pub struct Progress {
    show_bar: bool,
    json: bool,
    next_id: u64,
}

impl Progress {
    pub fn new(quiet: bool, json: bool) -> Self {
        Self {
            show_bar: !quiet && !json,
            json,
            next_id: 1,
        }
    }

    pub fn start(&mut self, kind: ProgressKind) -> Stage {
        let id = self.next_id;
        self.next_id += 1;

        let bar = self.show_bar.then(|| {
            let bar = ProgressBar::with_draw_target(Some(kind.steps()), ProgressDrawTarget::stderr());
            let style = ProgressStyle::with_template("{spinner} {msg} [{pos}/{len}]")
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            bar.set_style(style);
            bar.set_message(kind.label());
            bar
        });

        let stage = Stage { id, kind, bar };
        self.emit(&stage, None, false);
        stage
    }

    pub fn update(&mut self, stage: &Stage, update: ProgressUpdate) {
        if let (Some(bar), Some(file)) = (&stage.bar, update.file()) {
            bar.set_message(format!("{} {file}", stage.kind.label()));
            bar.inc(1);
        }
        self.emit(stage, Some(&update), false);
    }

    pub fn finish(&mut self, stage: Stage, summary: Option<ProgressUpdate>) {
        if let Some(bar) = &stage.bar {
            bar.finish_and_clear();
        }
        self.emit(&stage, summary.as_ref(), true);
    }

    fn emit(&self, stage: &Stage, update: Option<&ProgressUpdate>, done: bool) {
        if !self.json {
            return;
        }
        let event = ProgressEvent {
            id: stage.id,
            kind: &stage.kind,
            update,
            done,
        };
        match serde_json::to_string(&event) {
            Ok(line) => println!("{line}"),
            Err(err) => warn!(target: "harmonogram::progress", ?err, "progress event not serializable"),
        }
    }
}
