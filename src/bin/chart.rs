//! charts a log written by the monitor.

use {
    anyhow::{Context, Result},
    clap::{Parser, ValueEnum},
    ratatui::{
        DefaultTerminal,
        crossterm::event::{self, Event, KeyEventKind},
        style::{Style, Stylize},
        symbols::Marker,
        text::Line,
        widgets::{Axis, Block, Chart, Dataset, GraphType},
    },
    std::{fs::File, io::BufReader, path::PathBuf},
    sysmon::chart::{self, History},
};

/// draws a line chart of a sysmon log. press any key to exit.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// which values to chart.
    #[arg(value_enum, default_value_t = View::Cpu)]
    view: View,
    /// the log to read.
    #[arg(long, default_value = "sysmon.log")]
    log_file: PathBuf,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum View {
    /// total cpu utilization.
    Cpu,
    /// kilobytes sent and received.
    Net,
}

fn main() -> Result<()> {
    let Args { view, log_file } = Args::parse();

    let file = File::open(&log_file)
        .with_context(|| format!("failed to open {}", log_file.display()))?;
    let history = chart::read(BufReader::new(file))
        .with_context(|| format!("failed to read {}", log_file.display()))?;

    let terminal = ratatui::init();
    let shown = show(terminal, view, &history);
    ratatui::restore();
    shown.context("failed to draw chart")?;

    if view == View::Net {
        println!("Cumulative Sent: {:.2}KB", history.cumulative_sent());
        println!("Cumulative Recv: {:.2}KB", history.cumulative_received());
    }
    if history.skipped > 0 {
        eprintln!("skipped {} malformed lines", history.skipped);
    }

    Ok(())
}

/// draws the chart, then waits for a key press.
fn show(mut terminal: DefaultTerminal, view: View, history: &History) -> std::io::Result<()> {
    let series = match view {
        View::Cpu => vec![("total", history.cpu())],
        View::Net => vec![("sent", history.sent()), ("received", history.received())],
    };

    loop {
        terminal.draw(|frame| frame.render_widget(widget(view, &series), frame.area()))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn widget<'a>(view: View, series: &'a [(&'static str, Vec<(f64, f64)>)]) -> Chart<'a> {
    let styles = [Style::new().cyan(), Style::new().magenta()];

    let datasets = series
        .iter()
        .zip(styles)
        .map(|((name, data), style)| {
            Dataset::default()
                .name(*name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(style)
                .data(data)
        })
        .collect::<Vec<_>>();

    let points = || series.iter().flat_map(|(_, data)| data.iter());
    let seconds = points().map(|(x, _)| *x).fold(0.0, f64::max);
    let (title, y_title, ceiling) = match view {
        View::Cpu => ("CPU Utilization", "percent", 100.0),
        View::Net => (
            "Kilobytes Sent / Received",
            "kilobytes",
            points().map(|(_, y)| *y).fold(0.0, f64::max).max(1.0),
        ),
    };

    Chart::new(datasets)
        .block(Block::bordered().title(title))
        .x_axis(
            Axis::default()
                .title("seconds")
                .bounds([0.0, seconds])
                .labels(labels(seconds)),
        )
        .y_axis(
            Axis::default()
                .title(y_title)
                .bounds([0.0, ceiling])
                .labels(labels(ceiling)),
        )
}

/// labels the start, middle, and end of an axis.
fn labels(max: f64) -> Vec<Line<'static>> {
    [0.0, max / 2.0, max]
        .into_iter()
        .map(|value| Line::from(format!("{value:.0}")))
        .collect()
}
