use thiserror::Error;

/// Everything that can abort an order computation.
///
/// Any variant aborts the whole pipeline: there are no partial reports.
/// Row numbers are 1-based over the data rows (the header is row 0).
#[derive(Error, Debug)]
pub enum PedidoError {
    #[error("no data provided")]
    EmptyInput,

    #[error("row {row}: expected {expected} fields to match the header, found {found}")]
    MalformedTable {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("duplicate column '{0}' after header cleanup")]
    DuplicateColumn(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("column '{column}', row {row}: cannot read '{value}' as an integer")]
    InvalidNumericCell {
        column: String,
        row: usize,
        value: String,
    },

    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

#[cfg(feature = "python")]
impl From<PedidoError> for pyo3::PyErr {
    fn from(err: PedidoError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
