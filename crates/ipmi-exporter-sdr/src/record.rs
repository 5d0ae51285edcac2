//! Single-line record parsing.
//!
//! An SDR elist line has five pipe-delimited columns:
//!
//! ```text
//! CPU1 Temp        | 01h | ok  |  3.1 | 45 degrees C
//! ```
//!
//! Anything else (headers, footers, vendor noise) is not a sensor record and
//! is rejected, not treated as an error.

/// Borrowed view of one parsed report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub name: &'a str,
    pub id: &'a str,
    pub status: &'a str,
    pub entity: &'a str,
    pub value_text: &'a str,
}

/// Parses one trimmed, non-empty line into its five columns.
///
/// Columns 1-4 are trimmed verbatim captures; column 5 is the remainder of
/// the line, so a stray `|` past the fourth delimiter stays inside the value
/// text. A line with fewer than five columns, or with any column empty after
/// trimming, is rejected with `None`. Whitespace-only columns count as empty
/// and are rejected too, stricter than a delimiter-only split: a record with
/// a blank name or id would only produce a blank metric label.
pub fn parse_record(line: &str) -> Option<RawRecord<'_>> {
    let mut columns = line.splitn(5, '|');

    let name = columns.next()?.trim();
    let id = columns.next()?.trim();
    let status = columns.next()?.trim();
    let entity = columns.next()?.trim();
    let value_text = columns.next()?.trim();

    if name.is_empty()
        || id.is_empty()
        || status.is_empty()
        || entity.is_empty()
        || value_text.is_empty()
    {
        return None;
    }

    Some(RawRecord {
        name,
        id,
        status,
        entity,
        value_text,
    })
}
