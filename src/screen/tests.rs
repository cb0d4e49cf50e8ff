use {
    super::*,
    crate::{display::MockSurface, sample::Traffic},
    time::OffsetDateTime,
};

fn sample(cores: &[f64]) -> Sample {
    Sample {
        timestamp: OffsetDateTime::UNIX_EPOCH,
        cores: cores.to_vec(),
        total: cores.iter().sum::<f64>() / cores.len() as f64,
        sent: Traffic {
            total: 10_000,
            delta: 1_500,
        },
        received: Traffic {
            total: 10_000,
            delta: 2_000_000,
        },
    }
}

fn texts_on_row(cells: &[Cell], row: u16) -> Vec<&str> {
    cells
        .iter()
        .filter(|cell| cell.row == row)
        .map(|cell| cell.text.as_str())
        .collect()
}

#[test]
fn one_row_per_core() {
    for count in [1, 2, 8, 12] {
        let cores = vec![50.0; count];
        let cells = layout(&sample(&cores));
        let core_rows = cells
            .iter()
            .filter(|cell| cell.text.starts_with("CORE_"))
            .count();
        assert_eq!(core_rows, count);
    }
}

#[test]
fn row_order() {
    let cells = layout(&sample(&[10.0, 70.0]));
    assert_eq!(texts_on_row(&cells, 1), [TITLE]);
    assert_eq!(texts_on_row(&cells, 2), ["CORE_0: ", "10.00%"]);
    assert_eq!(texts_on_row(&cells, 3), ["CORE_1: ", "70.00%"]);
    assert_eq!(texts_on_row(&cells, 4), ["TOTAL: ", "40.00%"]);
    assert!(texts_on_row(&cells, 5).is_empty());
    assert_eq!(texts_on_row(&cells, 6), ["SEND: 1.50KB"]);
    assert_eq!(texts_on_row(&cells, 7), ["RECV: 2.00MB"]);
    assert!(texts_on_row(&cells, 8).is_empty());
    assert_eq!(texts_on_row(&cells, 9), [FOOTER]);
}

#[test]
fn severities() {
    let cells = layout(&sample(&[10.0, 70.0, 90.0]));
    let severity_of = |text: &str| {
        cells
            .iter()
            .find(|cell| cell.text == text)
            .map(|cell| cell.severity)
            .unwrap()
    };

    assert_eq!(severity_of(TITLE), Severity::Info);
    assert_eq!(severity_of(FOOTER), Severity::Info);
    assert_eq!(severity_of("CORE_0: "), Severity::Neutral);
    assert_eq!(severity_of("10.00%"), Severity::Good);
    assert_eq!(severity_of("70.00%"), Severity::Warning);
    assert_eq!(severity_of("90.00%"), Severity::Critical);
    assert_eq!(severity_of("56.67%"), Severity::Good);
    assert_eq!(severity_of("SEND: 1.50KB"), Severity::Neutral);
    assert_eq!(severity_of("RECV: 2.00MB"), Severity::Neutral);
}

#[test]
fn values_share_a_column() {
    let cells = layout(&sample(&[1.0, 2.0]));
    let columns = cells
        .iter()
        .filter(|cell| cell.text.ends_with('%'))
        .map(|cell| cell.column)
        .collect::<Vec<_>>();
    assert_eq!(columns, [9, 9, 9]);
}

/// double-digit core ids push the value column right instead of overlapping it.
#[test]
fn wide_labels() {
    let cells = layout(&sample(&[1.0; 11]));
    let value = cells.iter().find(|cell| cell.text == "1.00%").unwrap();
    assert_eq!(value.column, 10);
}

#[test]
fn draw_writes_every_cell() {
    let cells = layout(&sample(&[10.0]));
    let (mut surface, screen) = MockSurface::new();
    draw(&mut surface, &cells).unwrap();
    assert_eq!(screen.borrow().pending, cells);
    assert!(screen.borrow().frames.is_empty());
}
