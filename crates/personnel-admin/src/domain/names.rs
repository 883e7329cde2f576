/// Joins the non-empty name parts in order with single spaces.
pub fn generate_full_name(first: Option<&str>, middle: Option<&str>, last: Option<&str>) -> String {
    [first, middle, last]
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Company display name: registered name, then trading name.
pub fn company_display_name(company_name: Option<&str>, trading_name: Option<&str>) -> String {
    [company_name, trading_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_present_parts() {
        assert_eq!(generate_full_name(Some("Ana"), None, Some("Silva")), "Ana Silva");
        assert_eq!(
            generate_full_name(Some("Ana"), Some("Maria"), Some("Silva")),
            "Ana Maria Silva"
        );
    }

    #[test]
    fn skips_blank_parts_and_collapses_whitespace() {
        assert_eq!(
            generate_full_name(Some(" Ana "), Some("   "), Some("de  Souza")),
            "Ana de Souza"
        );
        assert_eq!(generate_full_name(None, None, None), "");
    }

    #[test]
    fn company_name_falls_back_to_trading_name() {
        assert_eq!(company_display_name(Some("Acme Ltd"), Some("Acme")), "Acme Ltd");
        assert_eq!(company_display_name(Some("  "), Some("Acme")), "Acme");
        assert_eq!(company_display_name(None, None), "");
    }
}
