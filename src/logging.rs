use flexi_logger::{
    opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
};
use std::path::Path;

/// Log to rotating files under `log_dir`; the terminal belongs to the game.
///
/// `RUST_LOG` overrides `default_level`. Keep the returned handle alive for
/// the lifetime of the program.
pub fn setup_logging(log_dir: &Path, default_level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(default_level)?
        .log_to_file(FileSpec::default().directory(log_dir).basename("hangman"))
        .format(opt_format)
        .rotate(
            Criterion::Size(1024 * 1024), // 1 MB per file
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()
}
