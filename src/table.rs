use polars::prelude::*;
use tracing::debug;

use crate::error::PedidoError;

/// Parse pasted report text into a DataFrame with all columns as String.
///
/// Fields are separated by runs of spaces or tabs; the scheme assumes no
/// embedded whitespace inside a field. The first non-blank line is the
/// header; every data row must have the same field count as the header.
/// Blank lines anywhere are skipped, matching how hosts tend to paste
/// tables with a trailing newline.
pub fn parse_raw_table(raw: &str) -> Result<DataFrame, PedidoError> {
    let mut lines = raw.lines().filter(|l| !l.trim().is_empty());

    let header: Vec<&str> = match lines.next() {
        Some(line) => line.split_whitespace().collect(),
        None => return Err(PedidoError::EmptyInput),
    };

    if let Some(dup) = first_duplicate(&header) {
        return Err(PedidoError::DuplicateColumn(dup.to_string()));
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); header.len()];
    for (idx, line) in lines.enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != header.len() {
            return Err(PedidoError::MalformedTable {
                row: idx + 1,
                expected: header.len(),
                found: fields.len(),
            });
        }
        for (column, field) in cells.iter_mut().zip(&fields) {
            column.push((*field).to_string());
        }
    }

    let columns: Vec<Column> = header
        .iter()
        .zip(cells)
        .map(|(name, values)| Series::new((*name).into(), values).into())
        .collect();

    let df = DataFrame::new(columns)?;
    debug!(rows = df.height(), columns = df.width(), "parsed raw table");
    Ok(df)
}

fn first_duplicate<'a>(names: &[&'a str]) -> Option<&'a str> {
    names
        .iter()
        .enumerate()
        .find(|(i, name)| names[..*i].contains(name))
        .map(|(_, name)| *name)
}
