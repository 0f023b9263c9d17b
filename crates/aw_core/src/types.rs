use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use url::Url;

/// A text field as it arrives from a loader: either a string or nothing usable.
///
/// Anything that is not a string (null, numbers, objects) deserializes to
/// `Missing`, so downstream code never has to guess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RawText {
    #[default]
    Missing,
    Text(String),
}

impl RawText {
    /// The text, or `None` when missing or empty.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawText::Text(s) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.as_str().is_none()
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            RawText::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for RawText {
    fn from(s: &str) -> Self {
        RawText::Text(s.to_string())
    }
}

impl From<String> for RawText {
    fn from(s: String) -> Self {
        RawText::Text(s)
    }
}

impl From<&String> for RawText {
    fn from(s: &String) -> Self {
        RawText::Text(s.clone())
    }
}

impl From<&RawText> for RawText {
    fn from(raw: &RawText) -> Self {
        raw.clone()
    }
}

impl<T: Into<RawText>> From<Option<T>> for RawText {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawText::Missing)
    }
}

impl Serialize for RawText {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            RawText::Missing => serializer.serialize_none(),
            RawText::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for RawText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Other(serde::de::IgnoredAny),
        }

        Ok(match Option::<Repr>::deserialize(deserializer)? {
            Some(Repr::Text(s)) => RawText::Text(s),
            Some(Repr::Other(_)) | None => RawText::Missing,
        })
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<String>, D::Error> {
    Ok(RawText::deserialize(deserializer)?.into_option())
}

fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error> {
    Ok(RawText::deserialize(deserializer)?
        .as_str()
        .and_then(parse_date))
}

/// One input record from the news corpus.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default)]
    pub title: RawText,
    #[serde(default)]
    pub text: RawText,
    #[serde(default, alias = "date", deserialize_with = "lenient_date")]
    pub published_at: Option<NaiveDate>,
}

/// Where the relevance classifier found its co-occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evidence {
    /// A single newline-delimited paragraph holds both kinds of term
    Paragraph { index: usize },
    /// An AI sentence and an impact sentence close enough together
    Sentences { ai: usize, impact: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceVerdict {
    pub is_relevant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

impl RelevanceVerdict {
    pub fn irrelevant() -> Self {
        Self::default()
    }

    pub fn relevant(evidence: Evidence) -> Self {
        Self {
            is_relevant: true,
            evidence: Some(evidence),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub overall: Sentiment,
    pub polarity: f32,
    pub workplace: Sentiment,
    pub evidence: Vec<String>,
    pub ai_near_job: bool,
    pub contextual_notes: String,
}

/// Calendar features used by the trend analysis downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFeatures {
    pub year: i32,
    pub month: u32,
    pub yearmonth: String,
}

impl From<NaiveDate> for DateFeatures {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            yearmonth: date.format("%Y-%m").to_string(),
        }
    }
}

/// A record that survived the relevance gate, ready for storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedArticle {
    pub url: Option<String>,
    pub source_domain: String,
    pub title: String,
    pub clean_title: String,
    pub cleaned_text: String,
    pub clean_text: String,
    pub published_at: Option<NaiveDate>,
    pub date_features: Option<DateFeatures>,
    pub relevance: RelevanceVerdict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentReport>,
}

/// Parse the date formats seen in the corpus. Unparseable input gives `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }

    None
}

/// Host of an http(s) URL without a leading `www.`; empty when there is none.
pub fn extract_domain(url: &str) -> String {
    match Url::parse(url.trim()) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => parsed
            .host_str()
            .map(|host| host.strip_prefix("www.").unwrap_or(host).to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}
