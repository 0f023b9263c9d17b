use aw_core::config::SentimentConfig;
use aw_core::{Sentiment, SentimentModel, SentimentReport};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

const LEXICON: &[(&str, f32)] = &[
    // positive
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("wonderful", 1.0),
    ("best", 1.0),
    ("amazing", 0.6),
    ("happy", 0.8),
    ("better", 0.5),
    ("positive", 0.23),
    ("benefit", 0.5),
    ("benefits", 0.5),
    ("beneficial", 0.5),
    ("opportunity", 0.4),
    ("opportunities", 0.4),
    ("improve", 0.4),
    ("improved", 0.4),
    ("improvement", 0.4),
    ("efficient", 0.5),
    ("innovative", 0.5),
    ("promising", 0.5),
    ("exciting", 0.6),
    ("success", 0.6),
    ("successful", 0.75),
    ("growth", 0.3),
    ("gain", 0.3),
    ("strong", 0.43),
    ("helpful", 0.5),
    ("easy", 0.43),
    ("valuable", 0.5),
    ("optimistic", 0.5),
    ("boost", 0.4),
    ("empower", 0.5),
    ("thrive", 0.6),
    ("safe", 0.5),
    ("fair", 0.7),
    ("love", 0.5),
    // negative
    ("bad", -0.7),
    ("poor", -0.4),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("worst", -1.0),
    ("worse", -0.4),
    ("negative", -0.3),
    ("sad", -0.5),
    ("fear", -0.6),
    ("afraid", -0.6),
    ("worry", -0.4),
    ("worried", -0.4),
    ("concern", -0.3),
    ("concerns", -0.3),
    ("risk", -0.3),
    ("risky", -0.5),
    ("threat", -0.5),
    ("danger", -0.6),
    ("dangerous", -0.6),
    ("loss", -0.4),
    ("lose", -0.4),
    ("losing", -0.4),
    ("lost", -0.4),
    ("decline", -0.3),
    ("unemployment", -0.5),
    ("layoff", -0.6),
    ("layoffs", -0.6),
    ("fired", -0.5),
    ("struggle", -0.4),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("crisis", -0.6),
    ("harm", -0.6),
    ("harmful", -0.6),
    ("unfair", -0.5),
    ("bias", -0.3),
    ("biased", -0.4),
    ("anxious", -0.5),
    ("problem", -0.3),
    ("problems", -0.3),
    ("fail", -0.5),
    ("failure", -0.5),
    ("weak", -0.4),
    ("disappointing", -0.6),
    ("displace", -0.4),
    ("displaced", -0.4),
];

const INTENSIFIERS: &[(&str, f32)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("highly", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("quite", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.5),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "without", "hardly", "nor", "cannot"];

/// How far back a negation still flips a sentiment word.
const NEGATION_WINDOW: usize = 2;

lazy_static! {
    static ref LEXICON_MAP: HashMap<&'static str, f32> = LEXICON.iter().copied().collect();
    static ref INTENSIFIER_MAP: HashMap<&'static str, f32> = INTENSIFIERS.iter().copied().collect();
    static ref AI_TERM: Regex = Regex::new(
        r"(?i)\b(?:ai|artificial\s+intelligence|machine\s+learning|automation|algorithms)\b"
    )
    .expect("AI term pattern must compile");
    static ref JOB_TERM: Regex = Regex::new(
        r"(?i)\b(?:job\s+loss|job\s+displacement|productivity|upskilling|reskilling|employment|layoffs?|hiring|labou?r)\b"
    )
    .expect("job term pattern must compile");
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('’', "'")
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

/// Word-lexicon sentiment with negation and intensifier handling.
pub struct LexiconModel {
    positive_threshold: f32,
    negative_threshold: f32,
    max_evidence: usize,
}

impl fmt::Debug for LexiconModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconModel")
            .field("words", &LEXICON.len())
            .field("positive_threshold", &self.positive_threshold)
            .field("negative_threshold", &self.negative_threshold)
            .finish()
    }
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new(&SentimentConfig::default())
    }
}

impl LexiconModel {
    pub fn new(config: &SentimentConfig) -> Self {
        Self {
            positive_threshold: config.positive_threshold,
            negative_threshold: config.negative_threshold,
            max_evidence: config.max_evidence,
        }
    }

    /// Mean score of the sentiment-bearing words, in `[-1, 1]`.
    pub fn polarity(&self, text: &str) -> f32 {
        let tokens = tokenize(text);
        let mut scores = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = LEXICON_MAP.get(token.as_str()) else {
                continue;
            };
            let mut score = base;
            if let Some(factor) = i.checked_sub(1).and_then(|prev| INTENSIFIER_MAP.get(tokens[prev].as_str())) {
                score *= factor;
            }
            if tokens[i.saturating_sub(NEGATION_WINDOW)..i].iter().any(|t| is_negation(t)) {
                score *= -0.5;
            }
            scores.push(score.clamp(-1.0, 1.0));
        }

        if scores.is_empty() {
            return 0.0;
        }
        (scores.iter().sum::<f32>() / scores.len() as f32).clamp(-1.0, 1.0)
    }

    fn label(&self, polarity: f32) -> Sentiment {
        if polarity > self.positive_threshold {
            Sentiment::Positive
        } else if polarity < self.negative_threshold {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    fn workplace(lower: &str) -> Sentiment {
        if lower.contains("job loss") || lower.contains("layoff") {
            Sentiment::Negative
        } else if ["upskilling", "reskilling", "productivity"].iter().any(|t| lower.contains(t)) {
            Sentiment::Positive
        } else {
            Sentiment::Neutral
        }
    }

    fn evidence(&self, text: &str) -> Vec<String> {
        text.split('.')
            .map(str::trim)
            .filter(|sentence| AI_TERM.is_match(sentence) || JOB_TERM.is_match(sentence))
            .take(self.max_evidence)
            .map(str::to_string)
            .collect()
    }
}

impl SentimentModel for LexiconModel {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn analyze(&self, text: &str) -> SentimentReport {
        let polarity = self.polarity(text);
        let lower = text.to_lowercase();
        let ai_near_job = AI_TERM.is_match(text) && JOB_TERM.is_match(text);

        SentimentReport {
            overall: self.label(polarity),
            polarity,
            workplace: Self::workplace(&lower),
            evidence: self.evidence(text),
            ai_near_job,
            contextual_notes: format!(
                "AI terms and job impact terms {}.",
                if ai_near_job {
                    "appear close together"
                } else {
                    "do not co-occur significantly"
                }
            ),
        }
    }
}
