//! a compact cpu and network monitor.

use {
    anyhow::{Context, Result},
    clap::{Parser, ValueEnum},
    std::{io, panic, path::PathBuf, thread, time::Duration},
    sysmon::{
        Cancel, CounterTracker, Monitor, ProcFs, ProcSource, RecordFile, Sampler, SystemClock,
        Terminal, display, input, logging,
    },
};

/// samples cpu utilization and network traffic every five seconds. press ESC to cancel.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// pass `log` to append a record of each sample to the log file.
    #[arg(value_enum)]
    mode: Option<Mode>,
    /// where records are written.
    #[arg(long, default_value = "sysmon.log")]
    log_file: PathBuf,
    /// where diagnostics are written. diagnostics are discarded if this is omitted.
    #[arg(long, value_name = "FILE")]
    debug_log: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum Mode {
    Log,
}

/// the first cycle compares against a baseline read at startup, so give it something to compare.
const WARM_UP: Duration = Duration::from_millis(200);

fn main() -> Result<()> {
    let Args {
        mode,
        log_file,
        debug_log,
    } = Args::parse();
    let records = mode == Some(Mode::Log);

    // NB: this must happen before any other threads exist.
    let clock = SystemClock::local();

    if let Some(path) = debug_log.as_deref() {
        logging::init(path).context("failed to initialize logging")?;
    }

    let sink = records
        .then(|| RecordFile::create(&log_file))
        .transpose()
        .with_context(|| format!("failed to create {}", log_file.display()))?;

    let source = ProcSource::new(ProcFs).context("failed to read kernel statistics")?;
    thread::sleep(WARM_UP);

    let cancel = Cancel::new();
    ctrlc::set_handler({
        let cancel = cancel.clone();
        move || cancel.cancel()
    })
    .context("failed to set the termination handler")?;

    // leave the terminal usable before the panic message is printed.
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = display::restore(&mut io::stdout());
        default_hook(info);
    }));

    let terminal = Terminal::acquire().context("failed to set up the terminal")?;
    let _input = input::spawn(input::TerminalKeys, cancel.clone())
        .context("failed to spawn the input thread")?;

    let sampler = Sampler::new(source, CounterTracker::new(), clock);
    let cycles = Monitor::new(sampler, terminal, sink)
        .run(&cancel)
        .context("monitor failed")?;

    log::info!("cancelled after {cycles} cycles");
    Ok(())
}
