//! Command handlers.  One module per subcommand; no business logic here —
//! handlers translate flags into builder calls and display the outcome.

pub mod completions;
pub mod fields;
pub mod person;
pub mod user;

use crate::error::{CliError, CliResult};

/// Parse a date flag with the configured chrono format.
///
/// Shared by the `person` and `user` handlers; the format comes from
/// `defaults.date_format` in the loaded configuration.
pub(crate) fn parse_date(raw: &str, format: &str) -> CliResult<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(raw, format).map_err(|source| CliError::InvalidDate {
        value: raw.to_string(),
        format: format.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_configured_format() {
        let date = parse_date("1987-04-12", "%Y-%m-%d").unwrap();
        assert_eq!(date, chrono::NaiveDate::from_ymd_opt(1987, 4, 12).unwrap());
    }

    #[test]
    fn parse_date_respects_alternate_format() {
        let date = parse_date("12/04/1987", "%d/%m/%Y").unwrap();
        assert_eq!(date, chrono::NaiveDate::from_ymd_opt(1987, 4, 12).unwrap());
    }

    #[test]
    fn parse_date_rejects_mismatched_input() {
        let err = parse_date("April 12th", "%Y-%m-%d").unwrap_err();
        assert!(matches!(err, CliError::InvalidDate { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
