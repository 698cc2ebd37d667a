/// Builds Google dork strings for manual open-source reconnaissance. Pure
/// function of the query and its type; unknown types yield no templates.
#[must_use]
pub fn generate_dorks(query: &str, query_type: &str) -> Vec<String> {
    match query_type {
        "email" => vec![
            format!("site:linkedin.com \"{query}\""),
            format!("site:facebook.com \"{query}\""),
            format!("site:twitter.com \"{query}\""),
            format!("site:pastebin.com \"{query}\""),
            format!("filetype:pdf \"{query}\""),
        ],
        "phone" => vec![
            format!("\"{query}\""),
            format!("site:facebook.com \"{query}\""),
            format!("site:whatsapp.com \"{query}\""),
            format!("site:telegram.me \"{query}\""),
        ],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_dorks_match_templates() {
        let dorks = generate_dorks("alice@example.com", "email");
        assert_eq!(dorks.len(), 5);
        assert!(dorks.contains(&"site:linkedin.com \"alice@example.com\"".to_string()));
        assert!(dorks.contains(&"filetype:pdf \"alice@example.com\"".to_string()));
    }

    #[test]
    fn phone_dorks_match_templates() {
        let dorks = generate_dorks("+15551234567", "phone");
        assert_eq!(
            dorks,
            vec![
                "\"+15551234567\"",
                "site:facebook.com \"+15551234567\"",
                "site:whatsapp.com \"+15551234567\"",
                "site:telegram.me \"+15551234567\"",
            ]
        );
    }

    #[test]
    fn unknown_type_yields_nothing() {
        assert!(generate_dorks("8.8.8.8", "ip").is_empty());
        assert!(generate_dorks("whatever", "").is_empty());
    }

    #[test]
    fn generator_is_pure() {
        assert_eq!(
            generate_dorks("a@b.c", "email"),
            generate_dorks("a@b.c", "email")
        );
    }
}
