use drills_core::format::OutputFormat;
use drills_core::knapsack::{Item, SortKey};

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse knapsack sort key from string
pub fn parse_sort_key(s: &str) -> std::result::Result<SortKey, String> {
    s.parse::<SortKey>().map_err(|e| e.to_string())
}

/// Parse a single-character delimiter
pub fn parse_delimiter(s: &str) -> std::result::Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("delimiter must be a single character, got {:?}", s)),
    }
}

/// Parse an item written as `name:value:weight`
pub fn parse_item(s: &str) -> std::result::Result<Item, String> {
    let mut parts = s.rsplitn(3, ':');
    let (Some(weight), Some(value), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected name:value:weight, got {:?}", s));
    };
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value in {:?}: {}", s, e))?;
    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid weight in {:?}: {}", s, e))?;
    Ok(Item::new(name.trim(), value, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        let item = parse_item("clock:175:10").unwrap();
        assert_eq!(item, Item::new("clock", 175.0, 10.0));

        // Colons in the name are kept
        let item = parse_item("a:b:1:2").unwrap();
        assert_eq!(item.name, "a:b");

        assert!(parse_item("clock:175").is_err());
        assert!(parse_item("clock:x:10").is_err());
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter("|").unwrap(), '|');
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("//").is_err());
    }
}
