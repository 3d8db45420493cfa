//! Parse registry CSV text into range records

use crate::config::RECORD_FIELDS;
use crate::RegistryError;
use maskgen_domain::RangeRecord;
use tracing::{debug, warn};

/// Replace every `;` beyond the first `field_count - 1` on a line with a space
///
/// A handful of published rows carry stray separators inside the region
/// column (for example the `955;5550000;5559999;10000` rows of DEF-9x).
/// Folding them back keeps every row at `field_count` columns.
pub fn fix_separators(data: &str, field_count: usize) -> String {
    let allowed = field_count.saturating_sub(1);
    let mut seen = 0;
    data.chars()
        .map(|c| match c {
            '\n' => {
                seen = 0;
                c
            }
            ';' => {
                seen += 1;
                if seen > allowed {
                    ' '
                } else {
                    c
                }
            }
            _ => c,
        })
        .collect()
}

/// Parse registry text into records, skipping the header row
///
/// Fields are trimmed. Rows with fewer than six columns are logged and
/// skipped rather than failing the whole file.
pub fn parse_records(data: &str, field_count: usize) -> Result<Vec<RangeRecord>, RegistryError> {
    let fixed = fix_separators(data, field_count);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(fixed.as_bytes());

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.len() < RECORD_FIELDS {
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            warn!(line, fields = row.len(), "Skipping short registry row");
            continue;
        }
        records.push(RangeRecord::new(
            &row[0], &row[1], &row[2], &row[3], &row[4], &row[5],
        ));
    }

    debug!(count = records.len(), "Parsed registry rows");
    Ok(records)
}
