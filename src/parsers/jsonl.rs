use serde::de::DeserializeOwned;

/// Records decoded from a JSONL document plus the number of lines that were dropped
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedJsonl<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

/// Decode newline-delimited JSON, keeping file order.
///
/// Blank lines are ignored. A line that is not a valid `T` is dropped and counted;
/// one bad line never aborts decoding of the rest of the document.
pub fn decode_jsonl<T: DeserializeOwned>(content: &str) -> DecodedJsonl<T> {
    let mut records = Vec::new();
    let mut skipped = 0;

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<T>(line) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::trace!(line = line_num + 1, error = %e, "skipping malformed JSONL line");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::debug!(parsed = records.len(), skipped, "decoded JSONL with skipped lines");
    }

    DecodedJsonl { records, skipped }
}

/// Decode newline-delimited JSON, silently dropping unparsable lines
pub fn parse_jsonl<T: DeserializeOwned>(content: &str) -> Vec<T> {
    decode_jsonl(content).records
}
