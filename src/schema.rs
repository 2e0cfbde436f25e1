/// Column-name and branch-set constants for pedido-core.
/// Single source of truth - exported to Python via PyO3.

// ── Column names (after header cleanup) ─────────────────────────────────────
pub mod columns {
    /// Canonical name given to the detected branch-id column.
    pub const SUCURSAL: &str = "Sucursal";

    pub const V30D: &str = "V30D";
    pub const V60D: &str = "V60D";
    pub const EXI: &str = "Exi";
    /// Signed stock value as it arrived, kept for display only.
    pub const EXI_RAW: &str = "Exi_raw";
    pub const VF: &str = "VF";
    pub const T1: &str = "1T";
    pub const T2: &str = "2T";
    pub const T3: &str = "3T";
    pub const T4: &str = "4T";

    /// Estimated demand per branch.
    pub const PROM: &str = "Prom";
    /// Order quantity per branch.
    pub const PEDIDO: &str = "Pedido";

    /// Display names used by the report frames handed to the host.
    pub const CANTIDAD: &str = "Cantidad";
    pub const EXISTENCIAS: &str = "Existencias";
    pub const SIGNO: &str = "Signo";

    /// Numeric columns that must survive normalization.
    pub const REQUIRED: [&str; 8] = [V30D, V60D, EXI, VF, T1, T2, T3, T4];

    /// Names the pipeline appends itself; input headers may not claim them.
    pub const RESERVED: [&str; 3] = [EXI_RAW, PROM, PEDIDO];

    /// The four trailing-period sales columns.
    pub const TRAILING: [&str; 4] = [T1, T2, T3, T4];
}

// ── Branch sets ─────────────────────────────────────────────────────────────
pub mod branches {
    /// Case-insensitive prefix that marks the branch-id column.
    pub const SUC_PREFIX: &str = "suc";

    /// Branch ids are zero-padded to this width.
    pub const ID_WIDTH: usize = 4;

    /// Warehouse branches: stock here nets against the order total and is
    /// shown in the inventory view, never ordered for.
    pub const WAREHOUSES: [&str; 3] = ["0100", "0105", "0106"];

    const ACTIVE_RANGE: std::ops::RangeInclusive<u32> = 1..=27;
    const EXCLUDED: [u32; 2] = [10, 20];

    /// Branch ids eligible for ordering: 0001..0027 minus 0010 and 0020.
    pub fn active_ids() -> Vec<String> {
        ACTIVE_RANGE
            .filter(|n| !EXCLUDED.contains(n))
            .map(|n| format!("{n:04}"))
            .collect()
    }
}

// ── Stock sign values ───────────────────────────────────────────────────────
pub mod sign {
    pub const POSITIVE: &str = "positive";
    pub const ZERO: &str = "zero";
    pub const NEGATIVE: &str = "negative";
}
