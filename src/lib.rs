//! Branch-level replenishment recommendations from pasted report text.
//!
//! One linear pipeline: parse the whitespace-delimited table, normalize and
//! coerce its columns, estimate demand per active branch, and net the order
//! total against warehouse stock. The Python host (feature `python`) only
//! supplies raw text plus a days multiplier and renders the result.

pub mod demand;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod schema;
pub mod table;

#[cfg(feature = "python")]
mod py;

pub use error::PedidoError;
pub use pipeline::compute_order_report;
pub use report::{OrderLine, OrderReport, StockSign, WarehouseStock};
