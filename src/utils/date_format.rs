use chrono::NaiveDate;

/// Pattern shared by goal listings and storage lines (`dd-MM-yyyy`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
}
