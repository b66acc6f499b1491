//! Emitted-key transforms
//!
//! Transforms rewrite the *emitted* key only; exclusion and inclusion
//! filtering always happens against the original property name before any
//! transform runs.

use once_cell::sync::Lazy;
use regex::Regex;

// One rule: a lowercase letter immediately followed by an uppercase one.
// Consecutive uppercase runs are deliberately not split.
static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new("([a-z])([A-Z])").expect("camel boundary pattern"));

/// Rewrite camelCase boundaries to `snake_case` and lowercase the result.
///
/// `firstName` becomes `first_name`; `id` is unchanged; `URLPath` has no
/// lower→upper boundary and collapses to `urlpath`.
pub fn snake_case(name: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(name, "${1}_${2}")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(snake_case("firstName"), "first_name");
        assert_eq!(snake_case("createdAtMillis"), "created_at_millis");
    }

    #[test]
    fn test_no_boundary() {
        assert_eq!(snake_case("id"), "id");
        assert_eq!(snake_case("name"), "name");
    }

    #[test]
    fn test_uppercase_runs_not_split() {
        assert_eq!(snake_case("URLPath"), "urlpath");
        assert_eq!(snake_case("urlPath"), "url_path");
    }

    #[test]
    fn test_already_snake() {
        assert_eq!(snake_case("first_name"), "first_name");
    }

    #[test]
    fn test_digits_are_not_boundaries() {
        assert_eq!(snake_case("line1Suffix"), "line1suffix");
        assert_eq!(snake_case("address1"), "address1");
    }
}
