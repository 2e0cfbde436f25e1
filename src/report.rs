use polars::prelude::*;
use tracing::debug;

use crate::error::PedidoError;
use crate::schema::{branches, columns, sign};

/// Tri-state classification of a warehouse stock reading, so the rendering
/// layer can flag negatives without re-deriving the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockSign {
    Positive,
    Zero,
    Negative,
}

impl StockSign {
    pub fn classify(value: i64) -> Self {
        match value.cmp(&0) {
            std::cmp::Ordering::Greater => Self::Positive,
            std::cmp::Ordering::Equal => Self::Zero,
            std::cmp::Ordering::Less => Self::Negative,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => sign::POSITIVE,
            Self::Zero => sign::ZERO,
            Self::Negative => sign::NEGATIVE,
        }
    }
}

/// One branch that needs ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub sucursal: String,
    pub cantidad: i64,
}

/// One warehouse row of the inventory view. `existencias` is the signed
/// stock value as it arrived, before clipping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseStock {
    pub sucursal: String,
    pub existencias: i64,
    pub sign: StockSign,
}

/// Final output of one computation: order rows in original order, the net
/// total after warehouse stock, and the warehouse inventory view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReport {
    pub orders: Vec<OrderLine>,
    pub total_net: i64,
    pub warehouse: Vec<WarehouseStock>,
}

/// Assemble the report from the full normalized table and the order rows.
///
/// `total_net = max(0, Σ Pedido − Σ clipped Exi over warehouses)`.
pub fn build_report(full: &DataFrame, orders: &DataFrame) -> Result<OrderReport, PedidoError> {
    let suc = orders.column(columns::SUCURSAL)?.str()?;
    let qty = orders.column(columns::PEDIDO)?.i64()?;
    let mut order_lines = Vec::with_capacity(orders.height());
    let mut total_orders: i64 = 0;
    for i in 0..orders.height() {
        let cantidad = qty.get(i).unwrap_or(0);
        total_orders += cantidad;
        order_lines.push(OrderLine {
            sucursal: suc.get(i).unwrap_or("").to_string(),
            cantidad,
        });
    }

    let wh_ids = Series::new("warehouses".into(), branches::WAREHOUSES.to_vec());
    let wh = full
        .clone()
        .lazy()
        .filter(col(columns::SUCURSAL).is_in(lit(wh_ids), false))
        .collect()?;

    let stock_wh: i64 = wh.column(columns::EXI)?.i64()?.sum().unwrap_or(0);
    let total_net = (total_orders - stock_wh).max(0);

    let wh_suc = wh.column(columns::SUCURSAL)?.str()?;
    let wh_raw = wh.column(columns::EXI_RAW)?.i64()?;
    let mut warehouse = Vec::with_capacity(wh.height());
    for i in 0..wh.height() {
        let existencias = wh_raw.get(i).unwrap_or(0);
        warehouse.push(WarehouseStock {
            sucursal: wh_suc.get(i).unwrap_or("").to_string(),
            existencias,
            sign: StockSign::classify(existencias),
        });
    }

    debug!(total_orders, stock_wh, total_net, "assembled order report");
    Ok(OrderReport {
        orders: order_lines,
        total_net,
        warehouse,
    })
}
