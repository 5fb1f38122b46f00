//! analysis::logging — terminal drain for the pipeline logger.
use slog::{Drain, Logger, o};

/// Asynchronous terminal logger for [`AnalysisOptions::with_logger`].
///
/// Records are formatted by `slog_term::FullFormat` and written from a
/// background thread; pending records are flushed when the last clone of
/// the returned logger is dropped.
///
/// [`AnalysisOptions::with_logger`]: crate::analysis::AnalysisOptions::with_logger
pub fn term_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    Logger::root(drain, o!("crate" => env!("CARGO_PKG_NAME")))
}
