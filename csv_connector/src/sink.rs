use std::{
    fs,
    io::Write,
    path::Path,
};

use csv::WriterBuilder;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::ConnectorError;

pub const COMMA: u8 = b',';
pub const TAB: u8 = b'\t';

/// A row type with a fixed column contract. Serialized fields must follow
/// `COLUMNS` in order.
pub trait Tabular: Serialize {
    const COLUMNS: &'static [&'static str];
}

/// Writes `records` to `path` under a single header row.
///
/// The parent directory is created when missing and any existing file is
/// replaced. Content goes to a temporary file next to `path` first, so a
/// failure leaves the previous file untouched.
pub fn write<R: Tabular>(records: &[R], path: &Path, delimiter: u8) -> Result<(), ConnectorError> {
    let mut temp = temp_file_for(path)?;

    {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(&mut temp);

        writer.write_record(R::COLUMNS)?;

        for record in records {
            writer.serialize(record)?;
        }

        writer.flush()?;
    }

    temp.persist(path).map_err(|err| err.error)?;
    debug!("Wrote {} row(s) to {}", records.len(), path.display());

    Ok(())
}

/// Writes one line per item, with the same replace semantics as [`write`].
pub fn write_lines<I, S>(lines: I, path: &Path) -> Result<(), ConnectorError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut temp = temp_file_for(path)?;

    for line in lines {
        writeln!(temp, "{}", line.as_ref())?;
    }

    temp.flush()?;
    temp.persist(path).map_err(|err| err.error)?;

    Ok(())
}

fn temp_file_for(path: &Path) -> Result<NamedTempFile, ConnectorError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent)?;

    Ok(NamedTempFile::new_in(parent)?)
}
