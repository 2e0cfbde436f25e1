use pedido_core::{compute_order_report, PedidoError, StockSign};
use tracing_subscriber::EnvFilter;

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// A pasted report the way it arrives in production: dotted headers, mixed
/// tabs and spaces, backorder suffixes, unpadded branch ids, excluded
/// branches and warehouses mixed in.
const PASTED_REPORT: &str = "\
Suc.  V30D. V60D  Exi   VF  1T  2T  3T  4T
1     4     6\t   2     0   0   0   0   0
2     0     0     1     5   2   3   1   0
3     10    11    5/bo  0   0   0   0   0
10    9     9     0     0   0   0   0   0
0020  9     9     0     0   0   0   0   0
100   0     0     30    0   0   0   0   0
0105  0     0     -3    0   0   0   0   0
0106  0     0     0|x   0   0   0   0   0
";

#[test]
fn full_report_from_pasted_text() {
    init_logs();
    let report = compute_order_report(PASTED_REPORT, 3).unwrap();

    // 0001: ceil((4+6)/2)*3 = 15, minus stock 2. 0002: mean(2,3,1,0)=1.5,
    // minus stock 1, rounds to 1. 0003: ceil(21/2)*3 = 33, minus stock 5.
    let rows: Vec<(&str, i64)> = report
        .orders
        .iter()
        .map(|o| (o.sucursal.as_str(), o.cantidad))
        .collect();
    assert_eq!(rows, vec![("0001", 13), ("0002", 1), ("0003", 28)]);

    // Σ Pedido = 42; warehouse stock = 30 (the -3 reading counts as 0).
    assert_eq!(report.total_net, 12);

    let wh: Vec<(&str, i64, StockSign)> = report
        .warehouse
        .iter()
        .map(|w| (w.sucursal.as_str(), w.existencias, w.sign))
        .collect();
    assert_eq!(
        wh,
        vec![
            ("0100", 30, StockSign::Positive),
            ("0105", -3, StockSign::Negative),
            ("0106", 0, StockSign::Zero),
        ]
    );
}

#[test]
fn report_is_idempotent() {
    init_logs();
    let first = compute_order_report(PASTED_REPORT, 3).unwrap();
    let second = compute_order_report(PASTED_REPORT, 3).unwrap();
    assert_eq!(first, second);
}

#[test]
fn quantities_and_total_are_never_negative() {
    init_logs();
    // Overstocked branches and heavy warehouse stock push everything toward
    // the clip floors.
    let text = "\
Suc V30D V60D Exi VF 1T 2T 3T 4T
1 1 1 99 0 0 0 0 0
2 0 0 50 9 1 1 1 1
0100 0 0 500 0 0 0 0 0
";
    let report = compute_order_report(text, 5).unwrap();
    assert!(report.orders.iter().all(|o| o.cantidad > 0));
    assert!(report.total_net >= 0);
    assert_eq!(report.total_net, 0);
}

#[test]
fn excluded_branches_never_reach_the_report() {
    init_logs();
    let text = "\
Suc V30D V60D Exi VF 1T 2T 3T 4T
10 40 40 0 0 0 0 0 0
20 40 40 0 0 0 0 0 0
21 40 40 0 0 0 0 0 0
";
    let report = compute_order_report(text, 1).unwrap();
    let ids: Vec<&str> = report.orders.iter().map(|o| o.sucursal.as_str()).collect();
    assert_eq!(ids, vec!["0021"]);
}

#[test]
fn forecast_without_history_ignores_days() {
    init_logs();
    let text = "Suc V30D V60D Exi VF 1T 2T 3T 4T\n7 30 30 0 5 0 0 0 0\n";
    for days in [1, 3, 30] {
        let report = compute_order_report(text, days).unwrap();
        assert_eq!(report.orders[0].cantidad, 1, "days={days}");
    }
}

// ── Error taxonomy end to end ───────────────────────────────────────────────

#[test]
fn empty_input_reports_no_data() {
    init_logs();
    let err = compute_order_report("   \n \t \n", 3).unwrap_err();
    assert!(matches!(err, PedidoError::EmptyInput));
    assert_eq!(err.to_string(), "no data provided");
}

#[test]
fn ragged_rows_are_fatal() {
    init_logs();
    let err = compute_order_report("Suc V30D\n1 2\n3\n", 3).unwrap_err();
    assert!(matches!(
        err,
        PedidoError::MalformedTable {
            row: 2,
            expected: 2,
            found: 1,
        }
    ));
}

#[test]
fn missing_branch_column_is_fatal() {
    init_logs();
    let err = compute_order_report("Store V30D V60D Exi VF 1T 2T 3T 4T\n1 2 3 4 5 6 7 8 9\n", 3)
        .unwrap_err();
    assert!(matches!(err, PedidoError::MissingColumn(name) if name == "suc*"));
}

#[test]
fn missing_numeric_column_is_fatal() {
    init_logs();
    let err =
        compute_order_report("Suc V30D V60D Exi VF 1T 2T 3T\n1 2 3 4 5 6 7 8\n", 3).unwrap_err();
    assert!(matches!(err, PedidoError::MissingColumn(name) if name == "4T"));
}

#[test]
fn unparseable_cell_is_fatal_with_location() {
    init_logs();
    let err = compute_order_report(
        "Suc V30D V60D Exi VF 1T 2T 3T 4T\n1 2 3 4 5 6 7 8 9\n2 2 3 abc 5 6 7 8 9\n",
        3,
    )
    .unwrap_err();
    match err {
        PedidoError::InvalidNumericCell { column, row, value } => {
            assert_eq!(column, "Exi");
            assert_eq!(row, 2);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}
