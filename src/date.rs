use regex::Regex;

use crate::error::NotifyError;

/// Pull the billing period label out of the export object name.
///
/// The label is whatever the pattern's first capture group matched; it is
/// used verbatim in the notification and never parsed as a date.
pub fn extract(pattern: &Regex, object_name: &str) -> Result<String, NotifyError> {
    pattern
        .captures(object_name)
        .and_then(|captures| captures.get(1))
        .map(|label| label.as_str().to_string())
        .ok_or_else(|| NotifyError::Extract(object_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> Regex {
        Regex::new(r"billing-(.*)\.json").unwrap()
    }

    #[test]
    fn extracts_date_from_conventional_name() {
        let label = extract(&pattern(), "billing-2019-01-18.json").unwrap();
        assert_eq!(label, "2019-01-18");
    }

    #[test]
    fn extracts_from_prefixed_name() {
        let label = extract(&pattern(), "exports/billing-2020-07.json").unwrap();
        assert_eq!(label, "2020-07");
    }

    #[test]
    fn label_may_contain_a_nested_suffix() {
        let label = extract(&pattern(), "billing-a.json-b.json").unwrap();
        assert_eq!(label, "a.json-b");
    }

    #[test]
    fn empty_label_is_allowed() {
        assert_eq!(extract(&pattern(), "billing-.json").unwrap(), "");
    }

    #[test]
    fn unconventional_name_is_an_extract_error() {
        let err = extract(&pattern(), "report-2019-01-18.csv").unwrap_err();
        assert_eq!(err, NotifyError::Extract("report-2019-01-18.csv".into()));
    }
}
