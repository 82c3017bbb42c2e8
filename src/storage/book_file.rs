//! Book file reader/writer
//!
//! Reads and writes the `title:author` line format.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, ShelfError};

/// Separator between title and author
pub const SEPARATOR: char = ':';

/// A (title, author) pair as stored on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
}

impl BookRecord {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

// =============================================================================
// Stream-based I/O
// =============================================================================

/// Write one `title:author` line per record
///
/// Returns the number of lines written
pub fn write_books<'a, W, I>(writer: &mut W, books: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut count = 0;
    for (title, author) in books {
        writeln!(writer, "{}{}{}", title, SEPARATOR, author)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Read every record from a stream
///
/// The whole stream is parsed before anything is returned, so a malformed
/// line yields an error and no partial result.
pub fn read_books<R: BufRead>(reader: R) -> Result<Vec<BookRecord>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed == ":" {
            continue;
        }

        let Some((title, author)) = trimmed.split_once(SEPARATOR) else {
            return Err(ShelfError::MalformedBookLine {
                line: index + 1,
                content: line.clone(),
            });
        };

        records.push(BookRecord::new(title.trim(), author.trim()));
    }

    Ok(records)
}

// =============================================================================
// File-based I/O
// =============================================================================

/// Save records to `path`, creating or truncating the file
pub fn save_books<'a, I>(path: &Path, books: I) -> Result<usize>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| ShelfError::BookFile {
            path: path.to_path_buf(),
            source,
        })?;

    // The writer (and file handle) is dropped on every return path
    let mut writer = BufWriter::new(file);
    write_books(&mut writer, books)
}

/// Load every record from `path`
pub fn load_books(path: &Path) -> Result<Vec<BookRecord>> {
    let file = File::open(path).map_err(|source| ShelfError::BookFile {
        path: path.to_path_buf(),
        source,
    })?;

    read_books(BufReader::new(file))
}
