use comfy_table::{presets::UTF8_BORDERS_ONLY, Cell, CellAlignment, Table};

use crate::app::{FileOutcome, RunReport};

pub fn build_table(report: &RunReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "File", "Model", "Czas (s)"]);

    for outcome in &report.files {
        let (model, seconds) = match outcome {
            FileOutcome::Written { record, .. } => {
                (record.model.to_string(), record.seconds.to_string())
            }
            FileOutcome::Read { outcome: read, .. } => (read.model.clone(), read.seconds.to_string()),
        };
        table.add_row(vec![
            Cell::new(outcome.schedule_path().to_string()),
            Cell::new(outcome.file().display().to_string()),
            Cell::new(model),
            Cell::new(seconds).set_alignment(CellAlignment::Right),
        ]);
    }

    if let Some(total) = report.total {
        table.add_row(vec![
            Cell::new("Total"),
            Cell::new(""),
            Cell::new(""),
            Cell::new(total.to_string()).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn print_table(report: &RunReport) {
    println!("{}", build_table(report));
}
