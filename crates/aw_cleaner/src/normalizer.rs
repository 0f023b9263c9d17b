use aw_core::config::CleanerConfig;
use aw_core::{RawText, Result};
use lazy_static::lazy_static;
use regex::Regex;

use crate::boilerplate::BOILERPLATE_RULES;
use crate::html::strip_html;
use crate::lines::{collapse_blank_runs, dedupe_title_lines, filter_short_lines};
use crate::rules::RuleSet;
use crate::title::clean_title;

lazy_static! {
    static ref URL: Regex = Regex::new(r"https?://\S+|www\.\S+").expect("url pattern must compile");
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("whitespace pattern must compile");
    static ref SYMBOLS: Regex =
        Regex::new(r#"[^\w\s.,!?;:'"()\-]"#).expect("symbol pattern must compile");
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Text cleaner for article bodies and titles.
///
/// `normalize` is the first pass (markup, links, whitespace). `strip_boilerplate`
/// is the second pass over already normalized text. Neither can fail: missing
/// input becomes an empty string.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: CleanerConfig,
    boilerplate: RuleSet,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            config: CleanerConfig::default(),
            boilerplate: BOILERPLATE_RULES.clone(),
        }
    }
}

impl Normalizer {
    /// Build a normalizer, appending `config.extra_rules` to the built-in
    /// catalogue. A bad extra pattern fails here.
    pub fn new(config: CleanerConfig) -> Result<Self> {
        let mut boilerplate = BOILERPLATE_RULES.clone();
        boilerplate.extend_with(&config.extra_rules)?;
        if !config.extra_rules.is_empty() {
            tracing::debug!("Loaded {} extra boilerplate rules", config.extra_rules.len());
        }
        Ok(Self { config, boilerplate })
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleSet {
        &self.boilerplate
    }

    pub fn normalize(&self, raw: impl Into<RawText>) -> String {
        let raw = raw.into();
        let Some(text) = raw.as_str() else {
            return String::new();
        };

        let text = strip_html(text);
        let text = URL.replace_all(&text, "");
        let text = collapse_whitespace(&text);
        if self.config.strip_symbols {
            collapse_whitespace(&SYMBOLS.replace_all(&text, ""))
        } else {
            text
        }
    }

    pub fn strip_boilerplate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let text = self.boilerplate.apply(text);
        let text = filter_short_lines(&text, self.config.min_line_chars);
        let text = collapse_blank_runs(&text);
        let text = dedupe_title_lines(&text, self.config.title_line_max_chars);
        collapse_blank_runs(&text).trim().to_string()
    }

    pub fn normalize_title(&self, raw: impl Into<RawText>) -> String {
        raw.into().as_str().map(clean_title).unwrap_or_default()
    }
}
