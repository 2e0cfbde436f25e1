use polars::prelude::*;
use tracing::debug;

use crate::error::PedidoError;
use crate::schema::{branches, columns};

/// Turn a raw all-String table into typed branch records.
///
/// Header names are trimmed and stripped of literal `.` characters. The
/// first column (in declared order) whose cleaned name starts with `suc`,
/// compared case-insensitively, becomes the branch-id column and is renamed
/// to the canonical `Sucursal`; its values are left-padded with zeros to 4
/// characters. Every other column is coerced to Int64 after cutting the
/// cell at the first `/` or `|` (suffixes like "12/bo" mean "12 units,
/// backordered").
///
/// `Exi_raw` keeps the signed stock value for display; `Exi` itself is
/// clipped to a minimum of 0 before any demand math sees it.
pub fn normalize_table(raw: DataFrame) -> Result<DataFrame, PedidoError> {
    let mut names: Vec<String> = raw
        .get_column_names_str()
        .iter()
        .map(|c| c.trim().replace('.', ""))
        .collect();

    let suc_idx = names
        .iter()
        .position(|name| name.to_lowercase().starts_with(branches::SUC_PREFIX))
        .ok_or_else(|| PedidoError::MissingColumn(format!("{}*", branches::SUC_PREFIX)))?;
    names[suc_idx] = columns::SUCURSAL.to_string();

    // Cleanup can collapse distinct headers ("Exi" and "Exi.") into one name,
    // and Exi_raw, Prom and Pedido are reserved for computed columns.
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) || columns::RESERVED.contains(&name.as_str()) {
            return Err(PedidoError::DuplicateColumn(name.clone()));
        }
    }

    let mut out: Vec<Column> = Vec::with_capacity(raw.width() + 1);
    let mut exi_raw: Option<Vec<i64>> = None;
    for (idx, name) in names.iter().enumerate() {
        let cells = raw.get_columns()[idx].str()?;
        if idx == suc_idx {
            let ids: Vec<String> = cells
                .into_iter()
                .map(|v| pad_branch_id(v.unwrap_or("")))
                .collect();
            out.push(Series::new(columns::SUCURSAL.into(), ids).into());
            continue;
        }

        let mut values = Vec::with_capacity(cells.len());
        for (row, cell) in cells.into_iter().enumerate() {
            let cell = cell.unwrap_or("");
            let value =
                coerce_cell(cell).ok_or_else(|| PedidoError::InvalidNumericCell {
                    column: name.clone(),
                    row: row + 1,
                    value: cell.to_string(),
                })?;
            values.push(value);
        }
        if name == columns::EXI {
            exi_raw = Some(values.clone());
            for v in &mut values {
                *v = (*v).max(0);
            }
        }
        out.push(Series::new(name.as_str().into(), values).into());
    }

    for required in columns::REQUIRED {
        if !names.iter().any(|n| n == required) {
            return Err(PedidoError::MissingColumn(required.to_string()));
        }
    }

    // The required-column check above guarantees Exi was seen.
    if let Some(values) = exi_raw {
        out.push(Series::new(columns::EXI_RAW.into(), values).into());
    }

    let df = DataFrame::new(out)?;
    debug!(rows = df.height(), "normalized branch records");
    Ok(df)
}

/// Left-pad a branch id with zeros to 4 characters; longer ids pass through.
fn pad_branch_id(id: &str) -> String {
    format!("{:0>width$}", id, width = branches::ID_WIDTH)
}

/// Coerce one noisy numeric cell: cut at the first `/` or `|`, trim, treat
/// an empty remainder as 0. `None` means the remainder is not an integer.
fn coerce_cell(cell: &str) -> Option<i64> {
    let cut = match cell.find(['/', '|']) {
        Some(pos) => &cell[..pos],
        None => cell,
    };
    let trimmed = cut.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse::<i64>().ok()
}
