//! lays a [`Sample`] out on screen.

use {
    crate::{
        display::Surface,
        sample::Sample,
        severity::Severity,
        units,
    },
    std::io,
};

#[cfg(test)]
mod tests;

/// one styled write at a screen coordinate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    pub text: String,
    pub column: u16,
    pub row: u16,
    pub severity: Severity,
}

pub const TITLE: &str = "===== Sysmon ====";
pub const FOOTER: &str = "ESC to cancel...";

const LEFT: u16 = 1;

/// returns every write needed to draw one sample, in order.
///
/// rows run top to bottom: the title, one row per core, the total, a gap, sent and received,
/// another gap, and the footer.
pub fn layout(sample: &Sample) -> Vec<Cell> {
    let Sample {
        timestamp: _,
        cores,
        total,
        sent,
        received,
    } = sample;

    let labels = cores
        .iter()
        .enumerate()
        .map(|(i, _)| format!("CORE_{i}: "))
        .collect::<Vec<_>>();
    let value_column = labels
        .iter()
        .map(String::len)
        .chain(std::iter::once("TOTAL: ".len()))
        .max()
        .map_or(LEFT, |width| LEFT + width as u16);

    let mut cells = Vec::with_capacity(cores.len() * 2 + 6);
    let mut row = 1;

    cells.push(Cell::new(TITLE, LEFT, row, Severity::Info));
    row += 1;

    for (label, percent) in labels.into_iter().zip(cores) {
        cells.push(Cell::new(label, LEFT, row, Severity::Neutral));
        cells.push(percentage(*percent, value_column, row));
        row += 1;
    }

    cells.push(Cell::new("TOTAL: ", LEFT, row, Severity::Neutral));
    cells.push(percentage(*total, value_column, row));
    row += 2;

    let sent = format!("SEND: {}", units::scale(sent.delta));
    cells.push(Cell::new(sent, LEFT, row, Severity::Neutral));
    row += 1;

    let received = format!("RECV: {}", units::scale(received.delta));
    cells.push(Cell::new(received, LEFT, row, Severity::Neutral));
    row += 2;

    cells.push(Cell::new(FOOTER, LEFT, row, Severity::Info));

    cells
}

/// writes each cell to the surface. the frame is not visible until the surface is committed.
pub fn draw(surface: &mut impl Surface, cells: &[Cell]) -> io::Result<()> {
    for Cell {
        text,
        column,
        row,
        severity,
    } in cells
    {
        surface.write(text, *column, *row, *severity)?;
    }

    Ok(())
}

fn percentage(percent: f64, column: u16, row: u16) -> Cell {
    Cell::new(format!("{percent:.2}%"), column, row, Severity::classify(percent))
}

// === impl Cell ===

impl Cell {
    fn new(text: impl Into<String>, column: u16, row: u16, severity: Severity) -> Self {
        Self {
            text: text.into(),
            column,
            row,
            severity,
        }
    }
}
