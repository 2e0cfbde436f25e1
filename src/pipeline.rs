use tracing::info;

use crate::error::PedidoError;
use crate::report::OrderReport;
use crate::{demand, normalize, report, table};

/// Compute branch-level order recommendations from pasted report text.
///
/// `days` scales the no-forecast demand regime and must be ≥ 1; the host UI
/// enforces the bound, it is not re-validated here.
///
/// The computation is a pure function of its arguments: no state survives a
/// call, and any error aborts the whole run with no partial report.
pub fn compute_order_report(raw_text: &str, days: u32) -> Result<OrderReport, PedidoError> {
    let raw = table::parse_raw_table(raw_text)?;
    let records = normalize::normalize_table(raw)?;
    let orders = demand::compute_orders(&records, days)?;
    let report = report::build_report(&records, &orders)?;
    info!(
        total_net = report.total_net,
        order_rows = report.orders.len(),
        "order report ready"
    );
    Ok(report)
}
