use std::io::{self, Write};

use algoscope::TraceStats;
use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Write `data` to stdout as pretty JSON with `--json`, otherwise through `human`.
pub fn emit<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    human: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(data, opts.json, &mut out, human)
}

fn write_report<T: Serialize>(
    data: &T,
    json: bool,
    out: &mut dyn Write,
    human: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, data)?;
        writeln!(out)?;
    } else {
        human(data, &mut *out)?;
    }
    out.flush()?;
    Ok(())
}

/// Column alignment.
#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Right,
}

/// Borderless table; columns are separated by two spaces.
pub fn plain_table(columns: &[(&str, Align)]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(columns.iter().map(|(header, _)| *header));

    let last = columns.len().saturating_sub(1);
    for (index, (_, align)) in columns.iter().enumerate() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(match align {
                Align::Left => CellAlignment::Left,
                Align::Right => CellAlignment::Right,
            });
            column.set_padding((u16::from(index > 0), u16::from(index < last)));
        }
    }
    table
}

/// Write `table` without trailing whitespace.
pub fn write_table(table: &Table, out: &mut dyn Write) -> io::Result<()> {
    for line in table.to_string().lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Numbered `#`, `Type`, `Description` rows for a trace.
///
/// With a `limit` below the step count, the first `limit` steps are kept, then one marker row
/// counting the hidden steps, then the final step so the outcome stays visible.
pub fn step_table(summaries: &[(&str, &str)], limit: Option<usize>) -> Table {
    let mut table = plain_table(&[
        ("#", Align::Right),
        ("Type", Align::Left),
        ("Description", Align::Left),
    ]);
    let total = summaries.len();
    let shown = limit.map_or(total, |limit| limit.min(total));

    for (index, (tag, description)) in summaries.iter().enumerate().take(shown) {
        table.add_row(vec![index.to_string(), tag.to_string(), description.to_string()]);
    }
    if shown < total {
        let hidden = total - shown - 1;
        if hidden > 0 {
            table.add_row(vec!["...".to_string(), String::new(), format!("{hidden} more")]);
        }
        if let Some((tag, description)) = summaries.last() {
            table.add_row(vec![(total - 1).to_string(), tag.to_string(), description.to_string()]);
        }
    }
    table
}

/// The statistics block printed after a trace.
pub fn write_stats(out: &mut dyn Write, algorithm: &str, stats: &TraceStats) -> io::Result<()> {
    writeln!(out, "Algorithm:    {algorithm}")?;
    writeln!(out, "Steps:        {}", stats.total_steps)?;
    writeln!(out, "Comparisons:  {}", stats.comparisons)?;
    writeln!(out, "Swaps:        {}", stats.swaps)?;
    writeln!(out, "Updates:      {}", stats.updates)
}
