//! Catalogue of boilerplate found on scraped news pages.
//!
//! Every entry is deliberately narrow: word boundaries, required separators
//! and capitalised names keep article prose intact. Missing a piece of
//! boilerplate is acceptable; deleting a sentence of the article is not.
use lazy_static::lazy_static;

use crate::rules::{Category, RuleSet, RuleSpec};

macro_rules! rule {
    ($name:expr, $category:ident, $pattern:expr) => {
        rule!($name, $category, $pattern, "")
    };
    ($name:expr, $category:ident, $pattern:expr, $replacement:expr) => {
        RuleSpec {
            name: $name,
            category: Category::$category,
            pattern: $pattern,
            replacement: $replacement,
        }
    };
}

pub const BOILERPLATE: &[RuleSpec] = &[
    // Dates
    rule!(
        "date_published_ordinal",
        Date,
        r"(?i)\bPublished\s+\d{1,2}(?:st|nd|rd|th)?\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4}\b"
    ),
    rule!(
        "date_label",
        Date,
        r"(?i)\b(?:Posted|Published|Updated|Modified|Last\s+updated)(?:\s+on)?:\s*"
    ),
    rule!(
        "date_weekday",
        Date,
        r"(?i)\b(?:Tues|Thurs|Mon|Tue|Wed|Thu|Fri|Sat|Sun)(?:day|sday|nesday|rsday|urday)?\b\.?,?\s+(?:\d{1,2}(?:st|nd|rd|th)?\s+(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\b\.?|(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\b\.?\s+\d{1,2}(?:st|nd|rd|th)?,?)\s+\d{4}\b"
    ),
    rule!(
        "date_day_month_year",
        Date,
        r"(?i)\b\d{1,2}(?:st|nd|rd|th)?\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4}\b"
    ),
    rule!(
        "date_month_day_year",
        Date,
        r"(?i)\b(?:(?:Posted|Published|Updated)(?:\s+on)?\s+)?(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:st|nd|rd|th)?,\s+\d{4}\b"
    ),
    rule!(
        "date_abbreviated_month",
        Date,
        r"(?i)\b(?:(?:Posted|Published|Updated)(?:\s+on)?\s+)?(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec)\.?\s+\d{1,2}(?:st|nd|rd|th)?,?\s+\d{4}\b"
    ),
    rule!("date_slashed", Date, r"\b\d{1,2}/\d{1,2}/(?:\d{4}|\d{2})\b"),
    rule!("date_iso", Date, r"\b\d{4}-\d{2}-\d{2}\b"),
    // Times
    rule!(
        "time_clock",
        Time,
        r"(?i)\b\d{1,2}:\d{2}(?::\d{2})?\s*(?:a\.m\.|p\.m\.|am\b|pm\b)"
    ),
    rule!(
        "time_zone",
        Time,
        r"\b(?:EDT|EST|CDT|CST|MDT|MST|PDT|PST|UTC|GMT|BST|CET)\b"
    ),
    // Bylines: names are capitalised words, matched case-sensitively
    rule!(
        "byline_with_role",
        Byline,
        r"\b(?i:by)\s+(?:[A-Z][a-z'\-]+|[A-Z]\.)(?:\s+(?:[A-Z][a-z'\-]+|[A-Z]\.)){0,3}\s*(?:[,|]|\s-)?\s*(?:(?:Senior|Staff|Chief|Contributing|Special|Associate|Managing|Deputy|Technology|Business)\s+)*(?:Writer|Reporter|Editor|Correspondent|Contributor|Columnist|Journalist)\b"
    ),
    rule!(
        "byline_line",
        Byline,
        r"(?m)^[ \t]*By[ \t]+(?:[A-Z][a-z'\-]+|[A-Z]\.)(?:[ \t]+(?:[A-Z][a-z'\-]+|[A-Z]\.)){0,3}[ \t]*$"
    ),
    rule!(
        "byline_written_by",
        Byline,
        r"\b(?i:written|reported)\s+(?i:by)\s+(?:[A-Z][a-z'\-]+|[A-Z]\.)(?:\s+(?:[A-Z][a-z'\-]+|[A-Z]\.)){0,3}\b"
    ),
    rule!(
        "byline_author_label",
        Byline,
        r"\b(?i:authors?):\s*(?:[A-Z][a-z'\-]+|[A-Z]\.)(?:\s+(?:[A-Z][a-z'\-]+|[A-Z]\.)){0,3}\b"
    ),
    rule!(
        "byline_staff_role",
        Byline,
        r"(?i)\b(?:Staff|Special)\s+(?:Writer|Reporter|Correspondent)\b"
    ),
    // Social media
    rule!(
        "social_share_platform",
        Social,
        r"(?i)\b(?:Share|Tweet|Post|Email|Print|Copy|Save|Bookmark|Favorite|Like|Follow|Subscribe|Connect)(?:\s+(?:on|to|via|with))?\s+(?:Facebook|Twitter|Instagram|LinkedIn|Pinterest|Reddit|Tumblr|WhatsApp|Telegram|YouTube|TikTok|Snapchat|Email|Print)\b"
    ),
    rule!(
        "social_follow_us",
        Social,
        r"(?i)\b(?:Please\s+)?(?:(?:Follow|Like|Subscribe\s+to|Connect\s+with)\s+us\s+on\s+(?:Social\s+Media|Facebook|Twitter|Instagram|LinkedIn|YouTube|TikTok|Pinterest)\b|Follow\s+us\s*[:|•›»>→])"
    ),
    rule!(
        "social_find_us",
        Social,
        r"(?i)\b(?:Find|Join)\s+us\s+(?:on|at)\s+(?:Social\s+Media|Facebook|Twitter|Instagram|LinkedIn|YouTube|TikTok)\b"
    ),
    rule!(
        "social_share_this",
        Social,
        r"(?i)\bShare\s+(?:this\s+(?:article|post|story|page)|on\s+social\s+(?:media|networks))\b"
    ),
    rule!(
        "social_button",
        Social,
        r"(?i)\b(?:Share|Tweet|Email|Print|Facebook|Twitter|LinkedIn|Pinterest|Instagram|WhatsApp)\s*[|•]"
    ),
    // Comment sections
    rule!(
        "comments_prompt",
        Comments,
        r"(?i)\b(?:Leave|Add|Post)\s+a\s+comment\b|\bJoin\s+the\s+(?:conversation|discussion)\b"
    ),
    rule!("comments_count", Comments, r"(?i)\b\d+\s+comments?\b"),
    rule!(
        "comments_header",
        Comments,
        r"(?i)\b(?:Most\s+popular|Top|Best|View|Show)\s+comments\b"
    ),
    // Cookie and consent banners
    rule!(
        "cookie_policy_label",
        Cookie,
        r"(?i)\b(?:Cookie|Privacy|Consent|GDPR|Data\s+protection)\s+(?:Notice|Policy|Preferences|Settings)\b"
    ),
    rule!(
        "cookie_notice",
        Cookie,
        r"(?i)\b(?:We\s+use\s+cookies|This\s+(?:website|site)\s+uses\s+cookies)\b[^.\n]*\.?"
    ),
    rule!(
        "cookie_consent",
        Cookie,
        r"(?i)\bBy\s+(?:continuing(?:\s+to\s+(?:use|browse))?|browsing|using)\s+(?:this|our)\s+(?:site|website)\b[^.\n]*\.?"
    ),
    rule!(
        "cookie_accept",
        Cookie,
        r"(?i)\bAccept\s+(?:all\s+)?(?:cookies|terms|conditions)\b"
    ),
    // Copyright and legal
    rule!(
        "copyright_symbol",
        Copyright,
        r"(?i)©\s*\d{4}.*?(?:all\s+)?rights\s+reserved\.?"
    ),
    rule!("copyright_line", Copyright, r"(?i)\bCopyright\s*©?\s*\d{4}[^\n]*"),
    rule!("rights_reserved", Copyright, r"(?i)\bAll\s+rights\s+reserved\b\.?"),
    rule!(
        "terms_of_use",
        Copyright,
        r"(?i)\bTerms\s+(?:of|and)\s+(?:Use|Service|Conditions|Privacy)\b|\b(?:User\s+Agreement|Cookie\s+Policy)\b"
    ),
    // Advertising
    rule!("ad_marker", Advertising, r"(?i)\b(?:Advertisement|Advert)\b"),
    rule!(
        "ad_sponsored_content",
        Advertising,
        r"(?i)\b(?:Special|Promoted|Featured|Sponsored|Paid)\s+(?:Content|Post|Partner)\b"
    ),
    rule!(
        "ad_sponsor_blurb",
        Advertising,
        r"(?i)\b(?:From\s+our\s+sponsors?|Recommended\s+for\s+you)\b"
    ),
    rule!("ad_label", Advertising, r"(?i)\b(?:Sponsored|Promotion|Ad)\s*[|:•]"),
    // Interface affordances
    rule!(
        "ui_click_here",
        Interface,
        r"(?i)\b(?:Click|Tap)\s+(?:here|to\s+(?:read|see|view|share|enlarge|expand|continue))\b"
    ),
    rule!(
        "ui_read_more",
        Interface,
        r"(?i)\b(?:Read|View)\s+(?:more|all|full\s+(?:article|story))\b|\b(?:Learn|See)\s+more\s*(?:[»›>→|]|\.{3}|…)"
    ),
    rule!(
        "ui_continue",
        Interface,
        r"(?i)\b(?:Continue\s+reading|More\s+stories|Load\s+more|Show\s+more)\b"
    ),
    rule!(
        "ui_signup",
        Interface,
        r"(?i)\b(?:Sign\s+up|Subscribe)\s+(?:now|today|for\s+free|for\s+our\s+newsletter|to\s+our\s+newsletter)\b"
    ),
    rule!(
        "ui_skip_links",
        Interface,
        r"(?i)\b(?:Back\s+to\s+top|Skip\s+to(?:\s+main)?\s+content|Skip\s+navigation)\b"
    ),
    // Navigation and section labels, only when followed by a separator
    rule!(
        "nav_menu_label",
        Navigation,
        r"(?i)\b(?:Home|Menu|Navigation|Navigate|Search|Login|Log\s+in|Sign\s+in|Sign\s+up|Register|Subscribe|Follow\s+us)\s*[|•›»>→]\s*"
    ),
    rule!(
        "nav_section_label",
        Navigation,
        r"(?i)\b(?:News|Sports|Technology|Tech|Business|Entertainment|Politics|Opinion|Weather|World|Local|Science|Health|Lifestyle|Culture|Markets|Economy|Features|Analysis|Videos?|Photos|Breaking|Latest|Trending|Xov\s+Xwm|Tiv\s+tauj)\s*[|•›»>→]\s*"
    ),
    rule!(
        "nav_named_menu",
        Navigation,
        r"(?i)\b(?:Main|Navigation|Primary|Secondary|Mobile)\s+Menu\b|\bSite\s+Navigation\b|\bBreadcrumbs?\b"
    ),
    rule!(
        "nav_localized_skip",
        Navigation,
        r"(?i)\bHla\s+mus\s+rau\s+cov\s+ntsiab\s+lus\b|\bLub\s+neej\s+hauv\s+nroog\b"
    ),
    // Previous/next and related-story blurbs
    rule!(
        "related_prev_next",
        Related,
        r"(?i)\b(?:Previous|Earlier|Next|Later)\s+(?:Article|Post|Story|Page)\b(?:\s*:\s*[^.\n]*)?"
    ),
    rule!(
        "related_read_also",
        Related,
        r"(?i)\b(?:Read|See)\s+(?:Previous|Next|Related|Also)\b:?|\bAlso\s+Read\b:?"
    ),
    rule!(
        "related_sites",
        Related,
        r"(?i)\b(?:Related|Sister|Partner)\s+(?:Sites?|Portals?|Networks?|Channels?|Publications?|Stories|Articles|Posts|Content)\b"
    ),
    rule!(
        "related_picks",
        Related,
        r"(?i)\b(?:Top|Latest|Trending|Popular)\s+(?:Stories|News|Articles|Posts)\b|\b(?:More\s+Like\s+This|You\s+May\s+Also\s+Like|Editor['’]s\s+Picks?|Our\s+Picks?)\b"
    ),
    rule!(
        "related_network_portals",
        Related,
        r"(?i)\bOur\s+Network\s+Portals?(?s:.*?)(?P<tail>\n\n|\z)",
        "${tail}"
    ),
    rule!(
        "related_more_from",
        Related,
        r"\bMore\s+(?:from|by|on|at)\s+[A-Z][\w&'\-]*(?:\s+[A-Z][\w&'\-]*){0,3}"
    ),
    rule!(
        "related_tagline",
        Related,
        r"(?i)\b(?:All|Get)\s+the\s+(?:latest|best|top|breaking)\s+(?:news|stories|content|updates)\b|\bStay\s+(?:tuned|updated|informed|connected)\b|\bThanks\s+for\s+(?:reading|visiting|subscribing)\b"
    ),
    // Footer contact details
    rule!(
        "contact_block",
        Contact,
        r"(?i)\bContact\s+(?:Us|Information|Details)(?s:.*?)(?P<tail>\n\n|\z)",
        "${tail}"
    ),
    rule!(
        "contact_about_links",
        Contact,
        r"(?i)\b(?:About\s+Us|Our\s+Team|Sitemap|Site\s+Map)\b"
    ),
    rule!(
        "contact_email",
        Contact,
        r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)+\b"
    ),
    rule!(
        "contact_phone",
        Contact,
        r"(?i)\b(?:Phone|Tel|Telephone|Mobile|Fax|Call\s+us|WhatsApp(?:\s+Voice)?)(?:\s+(?:us|at|on))*\s*:?\s*\+?\d[\d\-\s().]{5,}\d"
    ),
    rule!(
        "contact_office",
        Contact,
        r"(?i)\b(?:Our|Company|Corporate|Business|Editorial)\s+(?:Address|Office|Headquarters)\b"
    ),
    // HTML, CSS and JS residue
    rule!("markup_tag", Markup, r"</?[A-Za-z][A-Za-z0-9\-]*(?:\s[^<>]*)?/?>"),
    rule!("markup_template", Markup, r"\{\{.*?\}\}|\{%.*?%\}"),
    rule!("markup_jquery", Markup, r"\$\([^)]*\)"),
    rule!(
        "markup_function",
        Markup,
        r"\bfunction\s*[\w$]*\s*\([^)]*\)\s*\{[^}]*\}"
    ),
    rule!("markup_style_block", Markup, r"[#.][A-Za-z][\w\-]*\s*\{[^}]*\}"),
    rule!(
        "markup_analytics",
        Markup,
        r"\bUA-\d+-\d+\b|\b(?i:Google\s+Analytics|Google\s+Tag\s+Manager|Facebook\s+Pixel|Tracking\s+ID)\b"
    ),
    // URLs and domains
    rule!(
        "url_visit_site",
        Url,
        r"(?i)\b(?:Visit|Check\s+out)\s+our\s+website\b:?"
    ),
    rule!("url_http", Url, r"(?i)\bhttps?://\S+"),
    rule!("url_www", Url, r"(?i)\bwww\.\S+"),
    rule!(
        "url_bare_domain",
        Url,
        r"\b[A-Za-z0-9][A-Za-z0-9\-]*(?:\.[A-Za-z0-9\-]+)*\.(?:com|org|net|edu|gov|io|ai|co|us|info|news|media)\b"
    ),
    // Pagination
    rule!("page_of", Pagination, r"(?i)\bPage\s+\d+\s+of\s+\d+\b"),
    rule!("page_range", Pagination, r"(?i)\bPages?:\s*\d+\s*[-–]\s*\d+\b"),
    rule!(
        "page_results",
        Pagination,
        r"(?i)\bResults?\s+\d+\s*[-–]\s*\d+\s+of\s+\d+\b"
    ),
    // Tag and category metadata, to the end of the line
    rule!(
        "metadata_tags",
        Metadata,
        r"(?i)\b(?:Tags?|Categories|Category|Keywords?|Filed\s+Under|Topics?):[ \t][^\n]*"
    ),
    // Whitespace left behind by the deletions above
    rule!("whitespace_tabs", Whitespace, r"\t+", " "),
    rule!("whitespace_spaces", Whitespace, r" {2,}", " "),
];

lazy_static! {
    /// The compiled catalogue, shared by every normalizer.
    pub static ref BOILERPLATE_RULES: RuleSet =
        RuleSet::compile(BOILERPLATE).expect("built-in boilerplate rules must compile");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn run(name: &str, text: &str) -> String {
        BOILERPLATE_RULES
            .get(name)
            .unwrap_or_else(|| panic!("no rule named {}", name))
            .apply(text)
            .into_owned()
    }

    /// (rule, input, expected output)
    const CASES: &[(&str, &str, &str)] = &[
        ("date_published_ordinal", "Published 3rd March 2024 in print", " in print"),
        ("date_label", "Updated: the plan", "the plan"),
        ("date_label", "The study was published in May", "The study was published in May"),
        ("date_weekday", "Monday, 3 March 2024 was busy", " was busy"),
        ("date_weekday", "Monday, March 3, 2024 was busy", " was busy"),
        ("date_weekday", "Thurs. 7 Sept 2023", ""),
        ("date_weekday", "Monthly 10 percent 2024 growth", "Monthly 10 percent 2024 growth"),
        ("date_weekday", "Sundry items cost 5 dollars 2023", "Sundry items cost 5 dollars 2023"),
        ("date_day_month_year", "On 12 January 2023 we met", "On  we met"),
        ("date_month_day_year", "Posted on March 3rd, 2024 by staff", " by staff"),
        ("date_abbreviated_month", "Sept. 9, 2023 update", " update"),
        ("date_abbreviated_month", "in May the plan", "in May the plan"),
        ("date_slashed", "on 03/15/2024 and 1/2/23", "on  and "),
        ("date_iso", "released 2024-01-31 today", "released  today"),
        ("time_clock", "at 10:30 am and 9:05:10 p.m. sharp", "at  and  sharp"),
        ("time_clock", "scored 10:30 amazing", "scored 10:30 amazing"),
        ("time_zone", "noon EST today", "noon  today"),
        ("time_zone", "the best estimate", "the best estimate"),
        ("byline_with_role", "By Jane Doe, Staff Writer AI tools", " AI tools"),
        ("byline_with_role", "By J. Smith Senior Editor", ""),
        ("byline_line", "Intro line here\nBy Jane Doe\nBody text", "Intro line here\n\nBody text"),
        ("byline_line", "Made by hand in Ohio", "Made by hand in Ohio"),
        ("byline_written_by", "Written by Ana Lopez for the desk", " for the desk"),
        ("byline_author_label", "Author: Sam Lee. Text", ". Text"),
        ("byline_staff_role", "a Staff Reporter said", "a  said"),
        ("social_share_platform", "Share on Facebook Tweet Twitter done", "  done"),
        ("social_follow_us", "Follow us on Twitter for more", " for more"),
        ("social_follow_us", "Follow us: @planet", " @planet"),
        ("social_follow_us", "Small firms like us cannot afford it", "Small firms like us cannot afford it"),
        ("social_follow_us", "Analysts who follow us closely agree", "Analysts who follow us closely agree"),
        ("social_follow_us", "Like us on the whole", "Like us on the whole"),
        ("social_find_us", "Find us on Instagram", ""),
        ("social_find_us", "Join us in building", "Join us in building"),
        ("social_share_this", "Share this article with friends", " with friends"),
        ("social_button", "Share | Tweet | story", "  story"),
        ("comments_prompt", "Leave a comment below", " below"),
        ("comments_count", "There are 12 comments here", "There are  here"),
        ("comments_header", "Top comments", ""),
        ("cookie_policy_label", "see our Privacy Policy now", "see our  now"),
        ("cookie_notice", "We use cookies to improve your visit. The story", " The story"),
        ("cookie_consent", "By continuing to use this site you agree. Next", " Next"),
        ("cookie_consent", "By using our website you agree. Next", " Next"),
        ("cookie_accept", "Accept all cookies", ""),
        ("copyright_symbol", "© 2024 Acme Media. All rights reserved. Body", " Body"),
        ("copyright_line", "Body text\nCopyright 2023 Acme Inc\nMore", "Body text\n\nMore"),
        ("rights_reserved", "All Rights Reserved.", ""),
        ("terms_of_use", "Read the Terms of Use", "Read the "),
        ("ad_marker", "ADVERTISEMENT Body", " Body"),
        ("ad_marker", "advertising budgets", "advertising budgets"),
        ("ad_sponsored_content", "Sponsored Content from X", " from X"),
        ("ad_sponsor_blurb", "Recommended for you", ""),
        ("ad_label", "Sponsored: buy this", " buy this"),
        ("ad_label", "an ad campaign", "an ad campaign"),
        ("ui_click_here", "Click here to subscribe", " to subscribe"),
        ("ui_read_more", "Read more about it", " about it"),
        ("ui_read_more", "we will see more automation", "we will see more automation"),
        ("ui_read_more", "Learn more »", ""),
        ("ui_continue", "Continue reading below", " below"),
        ("ui_signup", "Sign up now for updates", " for updates"),
        ("ui_skip_links", "Skip to main content", ""),
        ("nav_menu_label", "Home | Menu | Story", "Story"),
        ("nav_menu_label", "Search results improved", "Search results improved"),
        ("nav_section_label", "Technology > AI", "AI"),
        ("nav_section_label", "news coverage grew", "news coverage grew"),
        ("nav_named_menu", "Main Menu Breadcrumbs", " "),
        ("nav_localized_skip", "Hla mus rau cov ntsiab lus Body", " Body"),
        ("related_prev_next", "Next article: Robots in retail. Body", ". Body"),
        ("related_read_also", "Also Read: story", " story"),
        ("related_sites", "Related Stories", ""),
        ("related_picks", "You May Also Like", ""),
        ("related_network_portals", "Body\n\nOur Network Portals a b c\nd\n\nTail", "Body\n\n\n\nTail"),
        ("related_more_from", "More from Reuters Tech", ""),
        ("related_more_from", "we need more from them", "we need more from them"),
        ("related_tagline", "Thanks for reading!", "!"),
        ("contact_block", "Body\n\nContact Us\nemail me\n\nTail", "Body\n\n\n\nTail"),
        ("contact_block", "Body. Contact us at the desk", "Body. "),
        ("contact_about_links", "About Us Sitemap", " "),
        ("contact_email", "mail jobs@example.com today", "mail  today"),
        ("contact_phone", "Call us at +1 (555) 123-4567 now", " now"),
        ("contact_phone", "Phone: 555-123-4567", ""),
        ("contact_office", "Editorial Office", ""),
        ("markup_tag", "Hello <br/> world </div>", "Hello  world "),
        ("markup_tag", "if a < b then", "if a < b then"),
        ("markup_template", "x {{ user.name }} y", "x  y"),
        ("markup_jquery", "$(document).ready", ".ready"),
        ("markup_function", "function init(a) { run(a); } text", " text"),
        ("markup_style_block", "#main { color: red; } text", " text"),
        ("markup_analytics", "UA-12345-1 tracking", " tracking"),
        ("url_visit_site", "Visit our website: now", " now"),
        ("url_http", "see https://x.org/a?b=1 now", "see  now"),
        ("url_www", "see www.example.com/path now", "see  now"),
        ("url_bare_domain", "reported by Reuters.com today", "reported by  today"),
        ("url_bare_domain", "the industry.AI is changing", "the industry.AI is changing"),
        ("page_of", "Page 2 of 5", ""),
        ("page_range", "Pages: 1-3", ""),
        ("page_results", "Results 1-20 of 100", ""),
        ("metadata_tags", "Body\nTags: ai, jobs, work\nTail", "Body\n\nTail"),
        ("whitespace_tabs", "a\t\tb", "a b"),
        ("whitespace_spaces", "a    b", "a b"),
    ];

    #[test]
    fn test_catalogue_compiles() {
        assert_eq!(BOILERPLATE_RULES.len(), BOILERPLATE.len());
    }

    #[test]
    fn test_rule_names_unique() {
        let names: HashSet<_> = BOILERPLATE.iter().map(|spec| spec.name).collect();
        assert_eq!(names.len(), BOILERPLATE.len());
    }

    #[test]
    fn test_every_rule_has_a_case() {
        let covered: HashSet<_> = CASES.iter().map(|(name, _, _)| *name).collect();
        for spec in BOILERPLATE {
            assert!(covered.contains(spec.name), "rule {} has no test case", spec.name);
        }
    }

    #[test]
    fn test_rule_cases() {
        for (name, input, expected) in CASES {
            assert_eq!(&run(name, input), expected, "rule {} on {:?}", name, input);
        }
    }

    #[test]
    fn test_whole_catalogue_keeps_prose() {
        for prose in [
            "Economists expect generative AI to reshape work across the sector, \
             and workers will need to learn new skills to keep their jobs.",
            "Small firms like us cannot afford new AI tools for every worker.",
            "Monthly 10 percent 2024 growth was driven by automation.",
            "Analysts who follow us closely expect more hiring.",
        ] {
            assert_eq!(BOILERPLATE_RULES.apply(prose), prose);
        }
    }
}
