use polars::prelude::*;
use pyo3::prelude::*;
use pyo3::types::PyModule;
use pyo3_polars::PyDataFrame;

use crate::error::PedidoError;
use crate::report::OrderReport;
use crate::schema::{branches, columns, sign};

/// Python view of a finished computation.
///
/// Frames are rebuilt on access; the report itself stays immutable.
#[pyclass(name = "OrderReport")]
pub struct PyOrderReport {
    inner: OrderReport,
}

#[pymethods]
impl PyOrderReport {
    #[getter]
    fn total_net(&self) -> i64 {
        self.inner.total_net
    }

    /// Order rows as a DataFrame: Sucursal, Cantidad.
    #[getter]
    fn orders_df(&self) -> PyResult<PyDataFrame> {
        let sucursal: Vec<&str> = self.inner.orders.iter().map(|o| o.sucursal.as_str()).collect();
        let cantidad: Vec<i64> = self.inner.orders.iter().map(|o| o.cantidad).collect();
        let df = DataFrame::new(vec![
            Series::new(columns::SUCURSAL.into(), sucursal).into(),
            Series::new(columns::CANTIDAD.into(), cantidad).into(),
        ])
        .map_err(PedidoError::from)?;
        Ok(PyDataFrame(df))
    }

    /// Warehouse inventory view: Sucursal, Existencias (signed), Signo.
    #[getter]
    fn warehouse_df(&self) -> PyResult<PyDataFrame> {
        let sucursal: Vec<&str> = self
            .inner
            .warehouse
            .iter()
            .map(|w| w.sucursal.as_str())
            .collect();
        let existencias: Vec<i64> = self.inner.warehouse.iter().map(|w| w.existencias).collect();
        let signo: Vec<&str> = self.inner.warehouse.iter().map(|w| w.sign.as_str()).collect();
        let df = DataFrame::new(vec![
            Series::new(columns::SUCURSAL.into(), sucursal).into(),
            Series::new(columns::EXISTENCIAS.into(), existencias).into(),
            Series::new(columns::SIGNO.into(), signo).into(),
        ])
        .map_err(PedidoError::from)?;
        Ok(PyDataFrame(df))
    }
}

/// Entry point for the host: raw pasted text plus the days multiplier.
#[pyfunction]
#[pyo3(signature = (raw_text, days=3))]
fn compute_order_report(raw_text: &str, days: u32) -> PyResult<PyOrderReport> {
    let inner = crate::pipeline::compute_order_report(raw_text, days)?;
    Ok(PyOrderReport { inner })
}

/// Export schema constants as Python submodules
fn add_schema_exports(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Columns
    let cols = PyModule::new(m.py(), "columns")?;
    cols.add("SUCURSAL", columns::SUCURSAL)?;
    cols.add("V30D", columns::V30D)?;
    cols.add("V60D", columns::V60D)?;
    cols.add("EXI", columns::EXI)?;
    cols.add("EXI_RAW", columns::EXI_RAW)?;
    cols.add("VF", columns::VF)?;
    cols.add("CANTIDAD", columns::CANTIDAD)?;
    cols.add("EXISTENCIAS", columns::EXISTENCIAS)?;
    cols.add("SIGNO", columns::SIGNO)?;
    cols.add("REQUIRED", columns::REQUIRED)?;
    m.add_submodule(&cols)?;

    // Branch sets
    let sets = PyModule::new(m.py(), "branches")?;
    sets.add("WAREHOUSES", branches::WAREHOUSES)?;
    sets.add("ACTIVE", branches::active_ids())?;
    m.add_submodule(&sets)?;

    // Sign values
    let signs = PyModule::new(m.py(), "sign")?;
    signs.add("POSITIVE", sign::POSITIVE)?;
    signs.add("ZERO", sign::ZERO)?;
    signs.add("NEGATIVE", sign::NEGATIVE)?;
    m.add_submodule(&signs)?;

    Ok(())
}

#[pymodule]
#[pyo3(name = "_core")]
fn pedido_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyOrderReport>()?;
    m.add_function(wrap_pyfunction!(compute_order_report, m)?)?;
    add_schema_exports(m)?;
    Ok(())
}
