//! Resource naming shared by every assembler.
//!
//! Names follow `{prefix-}{base}-{stage}`; an empty prefix counts as absent.

pub fn resolve_name_prefix(name_prefix: Option<&str>) -> String {
    match name_prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}-", prefix),
        _ => String::new(),
    }
}

pub fn resource_name(name_prefix: Option<&str>, base: &str, stage: &str) -> String {
    format!("{}{}-{}", resolve_name_prefix(name_prefix), base, stage)
}

/// Template keys must be alphanumeric: everything else is dropped.
pub fn logical_id(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prefix_is_followed_by_hyphen() {
        assert_eq!(resource_name(Some("Test"), "CognitoUserPool", "dev"), "Test-CognitoUserPool-dev");
        assert_eq!(resource_name(None, "CognitoUserPool", "dev"), "CognitoUserPool-dev");
        assert_eq!(resource_name(Some(""), "CognitoUserPool", "dev"), "CognitoUserPool-dev");
    }

    #[test]
    fn logical_id_strips_separators() {
        assert_eq!(logical_id("Test-ApiGatewayProxy-dev_1"), "TestApiGatewayProxydev1");
    }
}
