// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delimited export of uniform record sequences.
//!
//! The output carries a header row derived from the record shape and one
//! row per record, every field quoted with embedded quotes doubled, so
//! it round-trips through any conforming CSV parser.

use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while producing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The record sequence was empty; there is no header to derive.
    #[error("nothing to export")]
    Empty,
    /// A record failed to serialize into a row.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] csv::Error),
    /// The writer's buffer could not be recovered.
    #[error("failed to finish export: {0}")]
    Finish(#[from] std::io::Error),
    /// The serialized output was not valid UTF-8.
    #[error("export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a uniform record sequence to comma-separated text.
///
/// Every field is quoted and embedded double quotes are doubled. The
/// header row comes from the record type's field names.
///
/// # Errors
///
/// Returns an error if the sequence is empty or a record fails to
/// serialize.
pub fn write_csv<T: Serialize>(records: &[T]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(record)?;
    }

    let data: Vec<u8> = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;
    Ok(String::from_utf8(data)?)
}
