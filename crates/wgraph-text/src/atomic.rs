//! Atomic writes for graph files.
//!
//! Data is first written to a sibling file with a `.tmp` extension, flushed,
//! and then renamed over the target path. File renames within one filesystem
//! are atomic on POSIX, so a crash mid-write leaves the original file intact.
//! The temporary file may be left behind in that case.

use crate::error::Result;
use crate::writer::TextWriter;
use std::fs::File;
use std::path::Path;

/// Atomically writes a graph file produced by `write`.
///
/// The closure receives a [`TextWriter`] over the temporary file. Nothing is
/// visible at `path` until the closure succeeds and the rename completes.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, if `write`
/// fails, or if the final rename fails (e.g. across filesystems).
///
/// # Examples
///
/// ```no_run
/// use wgraph_text::{Header, Record, write_atomic};
///
/// # fn example() -> wgraph_text::Result<()> {
/// write_atomic("graph.txt", |w| {
///     w.write_header(Header::new(1, 0))?;
///     w.write_record(&Record::Vertex(0))
/// })?;
/// # Ok(())
/// # }
/// ```
pub fn write_atomic<P, F>(path: P, write: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut TextWriter<File>) -> Result<()>,
{
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    let file = File::create(&temp_path)?;
    let mut writer = TextWriter::new(file);
    write(&mut writer)?;
    let records = writer.records_written();

    let file = writer.into_inner()?;
    file.sync_all()?;
    drop(file);

    std::fs::rename(&temp_path, path)?;

    tracing::debug!(path = %path.display(), records, "Wrote graph file");
    Ok(())
}
