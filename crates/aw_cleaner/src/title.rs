//! Headline cleanup: publisher suffixes, tag and date prefixes, editorial
//! labels and wrapping quotes.
use lazy_static::lazy_static;

use crate::rules::{Category, RuleSet, RuleSpec};

macro_rules! title_rule {
    ($name:expr, $pattern:expr) => {
        title_rule!($name, $pattern, "")
    };
    ($name:expr, $pattern:expr, $replacement:expr) => {
        RuleSpec {
            name: $name,
            category: Category::Title,
            pattern: $pattern,
            replacement: $replacement,
        }
    };
}

pub const TITLE_RULES: &[RuleSpec] = &[
    // Publisher suffixes
    title_rule!("pipe_suffix", r"\s*\|\s*[^|]+$"),
    title_rule!("en_dash_suffix", r"\s*–\s*[^–]+$"),
    title_rule!(
        "dash_domain_suffix",
        r"\s*-\s*[^-]+\.(?:com|org|net|edu|io|co|ai|app)$"
    ),
    title_rule!("dash_outlet_suffix", r"\s*-\s*[A-Za-z\s]+(?:Times|News|Post)$"),
    title_rule!("paren_suffix", r"\s*\(\s*[^)]+\s*\)$"),
    title_rule!("guillemet_suffix", r"\s*»\s*[^»]+$"),
    title_rule!(
        "colon_domain_suffix",
        r"\s*:\s*[A-Za-z0-9\s.]+\.(?:com|org|net|edu|io|co|ai|app)$"
    ),
    title_rule!("dot_suffix", r"\s*[·•]\s*[A-Za-z0-9\s.]+$"),
    // Tags and date stamps
    title_rule!("bracket_prefix", r"^\s*\[[^\]]+\]\s*"),
    title_rule!("bracket_suffix", r"\s*\[[^\]]+\]\s*$"),
    title_rule!("date_prefix_slash", r"^\d{1,2}/\d{1,2}/\d{2,4}\s*[-:|]?\s*"),
    title_rule!("date_prefix_dash", r"^\d{1,2}-\d{1,2}-\d{2,4}\s*[-:|]?\s*"),
    title_rule!("date_prefix_iso", r"^\d{4}-\d{2}-\d{2}\s*[-:|]?\s*"),
    // Editorial labels, upper case only
    title_rule!(
        "breaking_prefix",
        r"^(?:BREAKING(?:\s+NEWS)?|EXCLUSIVE|UPDATED?|WATCH|VIDEO|PHOTOS?|PICTURED|REVEALED)\s*[:|\-]?\s+"
    ),
    title_rule!(
        "live_prefix",
        r"^(?:LIVE(?:\s+UPDATES)?|LATEST|JUST\s+IN|DEVELOPING|TRENDING)\s*[:|\-]?\s+"
    ),
    title_rule!(
        "opinion_prefix",
        r"^(?:OPINION|ANALYSIS|COMMENTARY|REVIEW|EDITORIAL)\s*[:|\-]?\s+"
    ),
    title_rule!(
        "explainer_prefix",
        r"^(?:FACT\s+CHECK|FACT\s+SHEET|Q&A|FAQ|HOW\s+TO|GUIDE)\s*[:|\-]?\s+"
    ),
    title_rule!(
        "status_prefix",
        r"^(?:OFFICIAL|CONFIRMED|LEAKED|RUMOU?R)\s*[:|\-]?\s+"
    ),
    // One layer of wrapping quotes
    title_rule!("wrapping_quotes", r#"(?s)^["'“‘](.*)["'”’]$"#, "${1}"),
    title_rule!("whitespace", r"\s+", " "),
];

lazy_static! {
    pub static ref TITLE_RULE_SET: RuleSet =
        RuleSet::compile(TITLE_RULES).expect("built-in title rules must compile");
}

/// Run the title table over `title` and trim the result.
pub fn clean_title(title: &str) -> String {
    TITLE_RULE_SET.apply(title.trim()).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_title_with_outlet() {
        assert_eq!(
            clean_title("\"Jobs Will Change Forever\" - TechNews"),
            "Jobs Will Change Forever"
        );
    }

    #[test]
    fn test_publisher_suffixes() {
        assert_eq!(clean_title("AI and the Future of Work | Reuters"), "AI and the Future of Work");
        assert_eq!(clean_title("Robots take over - example.com"), "Robots take over");
        assert_eq!(clean_title("Automation spreads – The Verge"), "Automation spreads");
        assert_eq!(clean_title("Layoffs ahead - The New York Times"), "Layoffs ahead");
        assert_eq!(clean_title("Automation (Reuters)"), "Automation");
        assert_eq!(clean_title("Workers adapt » Tech Daily"), "Workers adapt");
        assert_eq!(clean_title("Chatbots at work: techsite.io"), "Chatbots at work");
        assert_eq!(clean_title("New skills · Daily Digest"), "New skills");
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(clean_title("[Video] Factory automation explained"), "Factory automation explained");
        assert_eq!(clean_title("Factory automation explained [Updated]"), "Factory automation explained");
        assert_eq!(clean_title("2024-03-05 - Markets rally on AI"), "Markets rally on AI");
        assert_eq!(clean_title("03/05/2024: Markets rally on AI"), "Markets rally on AI");
        assert_eq!(clean_title("BREAKING: Chatbots replace call centres"), "Chatbots replace call centres");
        assert_eq!(clean_title("BREAKING NEWS - Chatbots replace call centres"), "Chatbots replace call centres");
        assert_eq!(clean_title("OPINION: We need reskilling"), "We need reskilling");
        assert_eq!(clean_title("FACT CHECK: Is AI taking jobs?"), "Is AI taking jobs?");
    }

    #[test]
    fn test_prefixes_are_case_sensitive() {
        assert_eq!(clean_title("Breaking: the new rules"), "Breaking: the new rules");
        assert_eq!(clean_title("LIVERPOOL invests in AI"), "LIVERPOOL invests in AI");
    }

    #[test]
    fn test_single_quote_layer() {
        assert_eq!(clean_title("“Robots at work”"), "Robots at work");
        assert_eq!(clean_title("\"'Nested' quotes\""), "'Nested' quotes");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(clean_title("  Spaces \t  everywhere\n now "), "Spaces everywhere now");
        assert_eq!(clean_title(""), "");
    }
}
