use serde::{Deserialize, Deserializer};

// page numbers that do not parse fall back to the first page
pub fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::deserialize_lenient_page;

    #[derive(Deserialize)]
    struct Pagination {
        #[serde(default = "first_page", deserialize_with = "deserialize_lenient_page")]
        page: i64,
    }

    fn first_page() -> i64 {
        1
    }

    fn parse(json: &str) -> i64 {
        serde_json::from_str::<Pagination>(json).unwrap().page
    }

    #[test]
    fn parses_numbers_and_falls_back() {
        assert_eq!(parse(r#"{"page": "3"}"#), 3);
        assert_eq!(parse(r#"{"page": "-2"}"#), -2);
        assert_eq!(parse(r#"{"page": "abc"}"#), 1);
        assert_eq!(parse(r#"{"page": null}"#), 1);
        assert_eq!(parse("{}"), 1);
    }
}
