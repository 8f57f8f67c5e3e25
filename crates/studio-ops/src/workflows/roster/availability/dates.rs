use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date-like string as it arrives from the scheduling sheet: a full
/// ISO-8601 timestamp (with or without offset) or a bare `YYYY-MM-DD`.
/// Anything else is `None`; callers decide whether that means skip or
/// `unknown`.
pub(crate) fn parse_date_value(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Short date form for reason strings, pinned so output does not drift with
/// the host locale.
pub(crate) fn format_short(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// One bookout interval, keeping the sheet's own text for reporting.
pub(crate) struct BookoutRange<'a> {
    pub(crate) start_text: &'a str,
    pub(crate) end_text: &'a str,
}

/// Scan a comma-separated bookout encoding (`"<start> to <end>, ..."`) for
/// the first range containing `candidate`, inclusive on both ends. Tokens
/// that do not split into exactly two parseable dates are skipped.
pub(crate) fn first_containing_range(
    encoded: &str,
    candidate: NaiveDate,
) -> Option<BookoutRange<'_>> {
    for token in encoded.split(',') {
        let parts: Vec<&str> = token.trim().split(" to ").collect();
        if parts.len() != 2 {
            continue;
        }

        let (Some(start), Some(end)) = (parse_date_value(parts[0]), parse_date_value(parts[1]))
        else {
            continue;
        };

        if start <= candidate && candidate <= end {
            return Some(BookoutRange {
                start_text: parts[0],
                end_text: parts[1],
            });
        }
    }

    None
}
