use std::collections::HashSet;

use artgrid_logging::{artgrid_debug, artgrid_warn};
use serde::Deserialize;
use serde_json::Value;

use crate::{ArtworkRecord, PageResult};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected page payload: {message}")]
    Shape { message: String },
}

#[derive(Deserialize)]
struct RawPage {
    data: Vec<Value>,
    pagination: RawPagination,
}

#[derive(Deserialize)]
struct RawPagination {
    total: u64,
}

// Every field is optional upstream; `Value::Null` stands in for absent.
#[derive(Deserialize)]
struct RawArtwork {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    title: Value,
    #[serde(default)]
    place_of_origin: Value,
    #[serde(default)]
    artist_display: Value,
    #[serde(default)]
    inscriptions: Value,
    #[serde(default)]
    date_start: Value,
    #[serde(default)]
    date_end: Value,
}

/// Map an `/artworks` response body into a [`PageResult`].
///
/// The envelope (`data` array, `pagination.total`) is mandatory. Inside a record
/// only `id` is: records without a usable id are skipped, as are repeats of an
/// id already seen on the page. Text fields that are absent or not scalar
/// become empty strings. At most `rows_per_page` records are kept.
pub fn decode_page(bytes: &[u8], rows_per_page: usize) -> Result<PageResult, DecodeError> {
    let raw: RawPage = serde_json::from_slice(bytes).map_err(|err| DecodeError::Shape {
        message: err.to_string(),
    })?;

    let mut seen = HashSet::new();
    let mut records: Vec<ArtworkRecord> = raw
        .data
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let Some(record) = decode_record(value) else {
                artgrid_warn!("Skipping artwork at index {} without a usable id", index);
                return None;
            };
            if !seen.insert(record.id) {
                artgrid_warn!(
                    "Skipping artwork at index {} repeating id {}",
                    index,
                    record.id
                );
                return None;
            }
            Some(record)
        })
        .collect();

    if records.len() > rows_per_page {
        artgrid_debug!(
            "Page carried {} records; dropping all past the first {}",
            records.len(),
            rows_per_page
        );
        records.truncate(rows_per_page);
    }

    Ok(PageResult {
        records,
        total: raw.pagination.total,
    })
}

fn decode_record(value: Value) -> Option<ArtworkRecord> {
    let raw: RawArtwork = serde_json::from_value(value).ok()?;
    Some(ArtworkRecord {
        id: raw.id.as_u64()?,
        title: text(raw.title),
        place_of_origin: text(raw.place_of_origin),
        artist_display: text(raw.artist_display),
        inscriptions: text(raw.inscriptions),
        date_start: text(raw.date_start),
        date_end: text(raw.date_end),
    })
}

fn text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_become_text_and_nulls_become_empty() {
        assert_eq!(text(serde_json::json!(1890)), "1890");
        assert_eq!(text(serde_json::json!(-200)), "-200");
        assert_eq!(text(serde_json::json!(null)), "");
        assert_eq!(text(serde_json::json!(["a"])), "");
        assert_eq!(text(serde_json::json!("Paris")), "Paris");
    }

    #[test]
    fn record_without_integer_id_is_rejected() {
        assert!(decode_record(serde_json::json!({"title": "x"})).is_none());
        assert!(decode_record(serde_json::json!({"id": "12"})).is_none());
        assert!(decode_record(serde_json::json!({"id": -1})).is_none());
        assert!(decode_record(serde_json::json!("not an object")).is_none());
        assert_eq!(
            decode_record(serde_json::json!({"id": 12})).map(|r| r.id),
            Some(12)
        );
    }

    #[test]
    fn repeated_ids_keep_the_first_record() {
        let body = br#"{"data":[
            {"id": 1, "title": "first"},
            {"id": 1, "title": "again"},
            {"id": 2, "title": "second"}
        ],"pagination":{"total":3}}"#;
        let page = decode_page(body, 10).unwrap();
        let titles: Vec<_> = page
            .records
            .iter()
            .map(|r| (r.id, r.title.as_str()))
            .collect();
        assert_eq!(titles, vec![(1, "first"), (2, "second")]);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn envelope_problems_are_errors() {
        assert!(decode_page(b"not json", 10).is_err());
        assert!(decode_page(br#"{"pagination":{"total":1}}"#, 10).is_err());
        assert!(decode_page(br#"{"data":{},"pagination":{"total":1}}"#, 10).is_err());
        assert!(decode_page(br#"{"data":[]}"#, 10).is_err());
        assert!(decode_page(br#"{"data":[],"pagination":{"total":-3}}"#, 10).is_err());
    }
}
