//! Export of results to a flat text file

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::models::SentimentRecord;

/// Write records to `path`, replacing any previous content.
///
/// Each record takes three lines: the tweet, the sentiment with its score,
/// and a blank separator line.
pub fn export_results<P: AsRef<Path>>(records: &[SentimentRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let export_err = |source| Error::Export {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(export_err)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        writeln!(writer, "{}\n", record).map_err(export_err)?;
    }
    writer.flush().map_err(export_err)?;

    info!(path = %path.display(), count = records.len(), "exported results");
    Ok(())
}
