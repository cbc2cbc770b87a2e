//! Splitting of the delimiter-joined name lists that arrive in listing rows.

/// Split a comma-joined client list into display tokens.
///
/// Clients are always joined with the ASCII comma; empty tokens and the
/// "-" placeholder are dropped.
pub fn split_clients(raw: &str) -> Vec<String> {
    split_on(raw, &[','])
}

/// Split a product list into display tokens.
///
/// Product names are joined with either the ASCII comma or the ideographic
/// comma `、`, depending on how the source mail was written.
pub fn split_products(raw: &str) -> Vec<String> {
    split_on(raw, &[',', '、'])
}

fn split_on(raw: &str, delimiters: &[char]) -> Vec<String> {
    raw.split(delimiters)
        .map(str::trim)
        .filter(|token| !token.is_empty() && *token != "-")
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_products_on_both_comma_kinds() {
        assert_eq!(split_products("A、B,C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn placeholder_yields_no_tokens() {
        assert!(split_products("-").is_empty());
        assert!(split_clients("-").is_empty());
    }

    #[test]
    fn trims_and_drops_empty_tokens() {
        assert_eq!(split_clients("Acme, Beta"), vec!["Acme", "Beta"]);
        assert_eq!(split_clients(" Acme ,, - ,Beta"), vec!["Acme", "Beta"]);
    }

    #[test]
    fn clients_keep_ideographic_comma_inside_names() {
        assert_eq!(split_clients("株式会社A、B"), vec!["株式会社A、B"]);
    }
}
