use {
    std::path::Path,
    time::{OffsetDateTime, macros::format_description},
};


/// installs the logger, writing diagnostics to `path`.
///
/// records are not diagnostics; see [`crate::record::RecordFile`].
pub fn init(path: &Path) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .format(|out, message, record| {
            // local time is only known on the main thread, so diagnostics use utc.
            let timestamp = OffsetDateTime::now_utc()
                .format(format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]"
                ))
                .unwrap_or_default();
            out.finish(format_args!(
                "[{timestamp}][{}][{}] {message}",
                record.target(),
                record.level(),
            ))
        })
        .chain(fern::log_file(path)?)
        .apply()?;

    Ok(())
}
