use polars::prelude::*;
use tracing::debug;

use crate::error::PedidoError;
use crate::schema::{branches, columns};

/// Filter to active branches, estimate demand and derive order quantities.
///
/// Returns the active rows that need ordering (`Pedido > 0`), in original
/// row order, with `Prom` and `Pedido` columns appended.
pub fn compute_orders(df: &DataFrame, days: u32) -> Result<DataFrame, PedidoError> {
    let active_ids = Series::new("active".into(), branches::active_ids());
    let active = df
        .clone()
        .lazy()
        .filter(col(columns::SUCURSAL).is_in(lit(active_ids), false))
        .collect()?;

    let v30 = active.column(columns::V30D)?.i64()?;
    let v60 = active.column(columns::V60D)?.i64()?;
    let vf = active.column(columns::VF)?.i64()?;
    let exi = active.column(columns::EXI)?.i64()?;
    let trailing = columns::TRAILING
        .iter()
        .map(|name| Ok(active.column(name)?.i64()?))
        .collect::<Result<Vec<_>, PedidoError>>()?;

    let mut prom = Vec::with_capacity(active.height());
    let mut pedido = Vec::with_capacity(active.height());
    for i in 0..active.height() {
        let ts_sum: i64 = trailing.iter().map(|t| t.get(i).unwrap_or(0)).sum();
        let estimate = promised_demand(
            v30.get(i).unwrap_or(0),
            v60.get(i).unwrap_or(0),
            vf.get(i).unwrap_or(0),
            ts_sum,
            days,
        );
        prom.push(estimate);
        pedido.push(order_quantity(estimate, exi.get(i).unwrap_or(0)));
    }

    let mut scored: Vec<Column> = active.get_columns().to_vec();
    scored.push(Series::new(columns::PROM.into(), prom).into());
    scored.push(Series::new(columns::PEDIDO.into(), pedido).into());

    let orders = DataFrame::new(scored)?
        .lazy()
        .filter(col(columns::PEDIDO).gt(lit(0)))
        .collect()?;
    debug!(
        active = active.height(),
        orders = orders.height(),
        "computed order quantities"
    );
    Ok(orders)
}

/// Expected demand for one branch, by regime:
///
/// 1. `VF > 0` with no trailing-period sales: a minimal demand of 1.
/// 2. `VF > 0` with trailing sales: mean of the four periods, floored at 1.
///    The `days` multiplier is deliberately not applied here; the trailing
///    periods already cover a comparable window.
/// 3. `VF == 0`: ceil of the 30/60-day average, scaled by `days`.
///
/// A negative `VF` reading (only `Exi` is clipped during normalization)
/// falls in no regime and estimates nothing: the branch never orders.
pub(crate) fn promised_demand(v30: i64, v60: i64, vf: i64, ts_sum: i64, days: u32) -> f64 {
    if vf > 0 {
        if ts_sum == 0 {
            1.0
        } else {
            (ts_sum as f64 / 4.0).max(1.0)
        }
    } else if vf == 0 {
        ((v30 + v60) as f64 / 2.0).ceil() * f64::from(days)
    } else {
        0.0
    }
}

/// Order quantity: demand minus available stock, floored at 0, rounded
/// half-away-from-zero. Quarter-valued demand estimates are exact in f64,
/// so the rounding is reproducible bit for bit.
pub(crate) fn order_quantity(prom: f64, exi: i64) -> i64 {
    (prom - exi as f64).max(0.0).round() as i64
}
