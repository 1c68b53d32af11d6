//! Column decoding helpers shared by the query modules.

use jiff::civil::Date;
use log::warn;
use rusqlite::{types::ValueRef, Row};

/// Reads an integer key column as `u64`.
pub(crate) fn get_id(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

/// Reads a nullable integer key column as `Option<u64>`.
pub(crate) fn get_optional_id(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<u64>> {
    Ok(row.get::<_, Option<i64>>(idx)?.map(|id| id as u64))
}

/// Reads a nullable `DATE` column stored as `YYYY-MM-DD` text.
///
/// NULL and empty text read as no date. Reservation rows may be written by
/// other tools, so any other value that does not decode (an integer such as
/// `20240301`, or text such as `03/01/2024`) is logged and also read as no
/// date instead of failing the whole query.
pub(crate) fn get_date(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<Date>> {
    let date = match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Text(bytes) => {
            let text = String::from_utf8_lossy(bytes);
            if text.is_empty() {
                None
            } else {
                match text.parse::<Date>() {
                    Ok(date) => Some(date),
                    Err(e) => {
                        warn!("Ignoring undecodable reservation date '{text}': {e}");
                        None
                    }
                }
            }
        }
        other => {
            warn!(
                "Ignoring reservation date stored as {}",
                other.data_type()
            );
            None
        }
    };
    Ok(date)
}
