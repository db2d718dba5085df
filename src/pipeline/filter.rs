//! Keyword filter

use std::io::Write;

use tracing::info;

use crate::error::Result;
use crate::models::SentimentRecord;

/// Records whose text contains `keyword`, ignoring case, in their original order
pub fn matching_records<'a>(records: &'a [SentimentRecord], keyword: &str) -> Vec<&'a SentimentRecord> {
    let keyword = keyword.to_lowercase();
    records
        .iter()
        .filter(|r| r.text().to_lowercase().contains(&keyword))
        .collect()
}

/// Select and print the records that mention `keyword`.
///
/// An empty keyword matches every record. When nothing matches a notice is
/// printed and the returned vector is empty.
pub fn filter_by_keyword<W: Write>(
    records: &[SentimentRecord],
    keyword: &str,
    out: &mut W,
) -> Result<Vec<SentimentRecord>> {
    let matches: Vec<SentimentRecord> = matching_records(records, keyword)
        .into_iter()
        .cloned()
        .collect();

    if matches.is_empty() {
        writeln!(out, "\nNo tweets found containing the keyword '{}'.", keyword)?;
    } else {
        writeln!(out, "\nTweets containing the keyword '{}':", keyword)?;
        for record in &matches {
            writeln!(out, "{}\n", record)?;
        }
    }

    info!(keyword, matched = matches.len(), total = records.len(), "filtered tweets");
    Ok(matches)
}
