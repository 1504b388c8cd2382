//! Subscriber roster read from a spreadsheet CSV export.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use postmatch_model::{PostmatchError, Result, SubscriberRecord};
use tracing::{debug, info};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_lowercase()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    name: Option<usize>,
    email: usize,
    address: usize,
    city: Option<usize>,
    postal_code: Option<usize>,
}

impl Columns {
    fn resolve(headers: &[String]) -> Result<Self> {
        let find = |wanted: &str| headers.iter().position(|header| header == wanted);
        Ok(Self {
            name: find("name"),
            email: find("email").ok_or(PostmatchError::MissingColumn("email"))?,
            address: find("address").ok_or(PostmatchError::MissingColumn("address"))?,
            city: find("city"),
            postal_code: find("postal_code"),
        })
    }
}

/// Loads a roster from a CSV file.
pub fn load_roster_csv(path: &Path) -> Result<Vec<SubscriberRecord>> {
    let file = std::fs::File::open(path)?;
    let roster = read_roster(file)?;
    info!(path = %path.display(), count = roster.len(), "loaded subscribers");
    Ok(roster)
}

/// Reads a roster from CSV data with a header row.
///
/// Headers are matched case-insensitively. `email` and `address` columns are
/// required; rows missing either value are skipped. Row order is kept.
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<SubscriberRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    let columns = Columns::resolve(&headers)?;

    let cell = |record: &csv::StringRecord, index: usize| {
        record.get(index).map(normalize_cell).unwrap_or_default()
    };

    let mut roster = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let email = cell(&record, columns.email);
        let address = cell(&record, columns.address);
        if email.is_empty() || address.is_empty() {
            debug!(row = row + 1, "skipping subscriber row without email or address");
            continue;
        }
        roster.push(SubscriberRecord {
            name: columns.name.map(|i| cell(&record, i)).and_then(optional),
            email,
            address,
            city: columns.city.map(|i| cell(&record, i)).and_then(optional),
            postal_code: columns.postal_code.map(|i| cell(&record, i)).and_then(optional),
        });
    }
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_headers() {
        assert_eq!(normalize_header("\u{feff}Email "), "email");
        assert_eq!(normalize_header(" Postal_Code"), "postal_code");
    }

    #[test]
    fn reads_rows_in_order() {
        let data = "name,email,address,city,postal_code\n\
                    Ana,ana@example.com,\"Calle Mayor 1, 28013 Madrid\",Madrid,28013\n\
                    ,luis@example.com,Plaza Nueva 15,,\n";
        let roster = read_roster(data.as_bytes()).expect("read roster");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name.as_deref(), Some("Ana"));
        assert_eq!(roster[0].address, "Calle Mayor 1, 28013 Madrid");
        assert_eq!(roster[0].postal_code.as_deref(), Some("28013"));
        assert_eq!(roster[1].name, None);
        assert_eq!(roster[1].city, None);
    }

    #[test]
    fn skips_rows_missing_required_values() {
        let data = "EMAIL,ADDRESS\n\
                    ,Calle Mayor 1\n\
                    pepa@example.com,\n\
                    rosa@example.com,Calle Luna 3\n";
        let roster = read_roster(data.as_bytes()).expect("read roster");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].email, "rosa@example.com");
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let err = read_roster("name,email\nAna,ana@example.com\n".as_bytes()).unwrap_err();
        assert!(matches!(err, PostmatchError::MissingColumn("address")));
    }
}
