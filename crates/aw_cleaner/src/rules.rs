//! Ordered find-and-replace rule tables.
//!
//! A rule table is plain data ([`RuleSpec`]) compiled once into a [`RuleSet`]
//! and applied top to bottom, each rule seeing the output of the previous one.
use aw_core::config::ExtraRule;
use aw_core::{Error, Result};
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Date,
    Time,
    Byline,
    Social,
    Comments,
    Cookie,
    Copyright,
    Advertising,
    Interface,
    Navigation,
    Related,
    Contact,
    Markup,
    Url,
    Pagination,
    Metadata,
    Whitespace,
    Title,
    Custom,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Date => "date",
            Category::Time => "time",
            Category::Byline => "byline",
            Category::Social => "social",
            Category::Comments => "comments",
            Category::Cookie => "cookie",
            Category::Copyright => "copyright",
            Category::Advertising => "advertising",
            Category::Interface => "interface",
            Category::Navigation => "navigation",
            Category::Related => "related",
            Category::Contact => "contact",
            Category::Markup => "markup",
            Category::Url => "url",
            Category::Pagination => "pagination",
            Category::Metadata => "metadata",
            Category::Whitespace => "whitespace",
            Category::Title => "title",
            Category::Custom => "custom",
        };
        f.pad(name)
    }
}

/// Static description of a rule, as written in the catalogues.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub name: &'static str,
    pub category: Category,
    pub pattern: &'static str,
    /// Regex replacement template; `${name}` refers to a capture group
    pub replacement: &'static str,
}

#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    category: Category,
    regex: Regex,
    replacement: String,
}

impl Rule {
    pub fn new(name: &str, category: Category, pattern: &str, replacement: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| Error::Config(format!("Invalid pattern for rule '{}': {}", name, e)))?;
        Ok(Self {
            name: name.to_string(),
            category,
            regex,
            replacement: replacement.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, self.replacement.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs
            .iter()
            .map(|spec| Rule::new(spec.name, spec.category, spec.pattern, spec.replacement))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append user supplied rules after the existing ones.
    pub fn extend_with(&mut self, extra: &[ExtraRule]) -> Result<()> {
        for rule in extra {
            self.push(Rule::new(&rule.name, Category::Custom, &rule.pattern, &rule.replacement)?);
        }
        Ok(())
    }

    /// Run every rule in order over `text`.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            if let Cow::Owned(replaced) = rule.apply(&current) {
                current = replaced;
            }
        }
        current
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
