//! Sinks: terminal and flat file.
//!
//! Both write one entry per line, in the order the projector produced them.

mod pipe;

use std::io::{self, Write};
use std::path::Path;

use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error_handling::ReconError;

pub use pipe::IgnoreBrokenPipe;

/// Writes entries to a terminal-like writer, one per line.
pub fn print_entries<'a, W, I>(writer: &mut W, entries: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    for entry in entries {
        writeln!(writer, "{}", entry)?;
    }
    writer.flush()
}

/// Prints entries to stdout.
pub fn print_to_stdout<'a, I>(entries: I) -> io::Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let stdout = io::stdout();
    let mut writer = IgnoreBrokenPipe::new(stdout.lock());
    print_entries(&mut writer, entries)
}

/// Saves entries to `path`, truncating any existing file.
///
/// The file is UTF-8, one entry per line, each line terminated by `\n`. The
/// buffer is flushed before returning so success means the data is written.
///
/// # Errors
///
/// Returns `ReconError::Write` if the file cannot be created or written.
pub async fn save_entries<'a, I>(path: &Path, entries: I) -> Result<usize, ReconError>
where
    I: IntoIterator<Item = &'a str>,
{
    let to_write_error = |source: io::Error| ReconError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = tokio::fs::File::create(path)
        .await
        .map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);

    let mut count = 0usize;
    for entry in entries {
        writer
            .write_all(entry.as_bytes())
            .await
            .map_err(to_write_error)?;
        writer.write_all(b"\n").await.map_err(to_write_error)?;
        count += 1;
    }
    writer.flush().await.map_err(to_write_error)?;

    log::info!("Wrote {} entr{} to {}", count, if count == 1 { "y" } else { "ies" }, path.display());
    Ok(count)
}
