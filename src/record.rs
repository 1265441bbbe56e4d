use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::error::{HarmonogramError, Result};

pub const FILE_NAME: &str = "Dane.csv";
pub const HEADER: [&str; 3] = ["Model", "Wynik", "Czas"];
pub const MODELS: [&str; 3] = ["A", "B", "C"];
/// Only records of this model contribute to the read-mode total.
pub const COUNTED_MODEL: &str = "A";

const DELIMITER: u8 = b';';
const MAX_VALUE: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvRecord {
    #[serde(rename = "Model")]
    pub model: &'static str,
    #[serde(rename = "Wynik")]
    pub score: u32,
    #[serde(rename = "Czas", serialize_with = "serialize_seconds")]
    pub seconds: u32,
}

fn serialize_seconds<S: Serializer>(seconds: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{seconds}s"))
}

impl CsvRecord {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            model: MODELS.choose(rng).copied().unwrap_or(COUNTED_MODEL),
            score: rng.gen_range(0..=MAX_VALUE),
            seconds: rng.gen_range(0..=MAX_VALUE),
        }
    }
}

/// What read mode extracted from one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadOutcome {
    pub path: PathBuf,
    pub model: String,
    pub seconds: i64,
}

/// A directory resolves to the `Dane.csv` inside it; an existing file is
/// used as-is.
pub fn resolve_target(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else if path.is_dir() {
        Ok(path.join(FILE_NAME))
    } else {
        Err(HarmonogramError::InvalidTarget(path.to_path_buf()))
    }
}

/// Writes a freshly generated record, replacing whatever the file held.
pub fn write_random<R: Rng>(path: &Path, rng: &mut R) -> Result<(PathBuf, CsvRecord)> {
    let record = CsvRecord::random(rng);
    let target = write_record(path, &record)?;
    Ok((target, record))
}

pub fn write_record(path: &Path, record: &CsvRecord) -> Result<PathBuf> {
    let target = resolve_target(path)?;
    let file = File::create(&target).map_err(|err| HarmonogramError::io(&target, err))?;

    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(file);
    writer.serialize(record)?;
    writer
        .flush()
        .map_err(|err| HarmonogramError::io(&target, err))?;

    debug!(target: "harmonogram::create", path = ?target, ?record, "record written");
    Ok(target)
}

/// Duration counted for the file at `path`: `Czas` in seconds for model A,
/// zero for every other model.
pub fn read_duration(path: &Path) -> Result<i64> {
    read_record(path).map(|outcome| outcome.seconds)
}

pub fn read_record(path: &Path) -> Result<ReadOutcome> {
    let target = resolve_target(path)?;
    if !target.is_file() {
        return Err(HarmonogramError::MissingFile(target));
    }
    let file = File::open(&target).map_err(|err| HarmonogramError::io(&target, err))?;

    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    verify_header(&headers)?;

    let rows = reader.records().collect::<Result<Vec<_>, _>>()?;
    let row = match rows.as_slice() {
        [row] => clean_row(&headers, row),
        other => return Err(HarmonogramError::RowCount(other.len())),
    };

    let model = field(&row, "Model")?;
    let seconds = if model == COUNTED_MODEL {
        parse_seconds(field(&row, "Czas")?)?
    } else {
        0
    };

    info!(target: "harmonogram::read", path = ?target, model, seconds, "record read");
    Ok(ReadOutcome {
        path: target,
        model: model.to_string(),
        seconds,
    })
}

/// Header names are compared after trimming, ignoring empty columns.
pub fn verify_header(headers: &StringRecord) -> Result<()> {
    let cleaned: Vec<&str> = headers
        .iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();
    if cleaned != HEADER {
        return Err(HarmonogramError::HeaderMismatch {
            expected: HEADER.iter().map(|s| s.to_string()).collect(),
            actual: cleaned.into_iter().map(str::to_string).collect(),
        });
    }
    Ok(())
}

fn clean_row<'r>(headers: &'r StringRecord, row: &'r StringRecord) -> HashMap<&'r str, &'r str> {
    headers
        .iter()
        .zip(row.iter())
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

fn field<'r>(row: &HashMap<&'r str, &'r str>, name: &'static str) -> Result<&'r str> {
    row.get(name)
        .copied()
        .ok_or(HarmonogramError::MissingField(name))
}

fn parse_seconds(raw: &str) -> Result<i64> {
    raw.strip_suffix('s')
        .unwrap_or(raw)
        .parse::<i64>()
        .map_err(|_| HarmonogramError::InvalidDuration(raw.to_string()))
}
