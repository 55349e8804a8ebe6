//! Query intent classification.
//!
//! Maps a normalized query (plus its raw text) to one of a fixed set of
//! [`Intent`]s using an explicit ordered rule list: each rule is a
//! predicate over the raw text, evaluated top to bottom, and the first
//! match wins. No randomness anywhere, so classification is deterministic
//! and idempotent, and the rule order is auditable in one place
//! ([`IntentClassifier::new`]).
//!
//! The indefinite-article heuristic (text starting with "a "/"an " reads
//! as an image description) is known to fire on plausible recommendation
//! queries like "a comfortable hoodie". That ambiguity is deliberate:
//! both intents run the identical matching pipeline, and the distinction
//! only changes reply wording.
//!
//! # Examples
//!
//! ```
//! use bazaar::intent::{Intent, IntentClassifier};
//!
//! let classifier = IntentClassifier::new();
//! assert_eq!(
//!     classifier.classify(&[], "Recommend me a laptop"),
//!     Intent::TextRecommendation
//! );
//! assert_eq!(classifier.classify(&[], "hello there"), Intent::Greeting);
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The classified purpose of a user query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// A salutation ("hi", "good morning").
    Greeting,
    /// Conversational small talk: identity, capabilities, thanks, goodbye.
    GeneralConversation,
    /// A product search or recommendation request.
    TextRecommendation,
    /// A description of an image to match products against.
    ImageDescription,
    /// Nothing matched; the router answers with a default help reply.
    Unknown,
}

impl Intent {
    /// Whether this intent routes to the product matcher.
    pub fn is_product_search(&self) -> bool {
        matches!(self, Intent::TextRecommendation | Intent::ImageDescription)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Greeting => "greeting",
            Intent::GeneralConversation => "general_conversation",
            Intent::TextRecommendation => "text_recommendation",
            Intent::ImageDescription => "image_description",
            Intent::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// The conversational sub-pattern behind a [`Intent::Greeting`] or
/// [`Intent::GeneralConversation`] classification. Keys the canned reply
/// table in the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationTopic {
    Greeting,
    Identity,
    Capabilities,
    Thanks,
    Goodbye,
}

/// Phrases whose presence marks an image-description query.
const IMAGE_PHRASES: &[&str] = &["image", "picture", "photo", "looks like"];

/// Phrases whose presence marks a product search / recommendation query.
const PRODUCT_PHRASES: &[&str] = &[
    "recommend",
    "search",
    "find",
    "show me",
    "looking for",
    "buy",
    "purchase",
    "need",
];

static GREETING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\b(hi|hello|hey|good morning|good afternoon|good evening)\b",
        r"\b(how are you|how's it going)\b",
    ])
});

static IDENTITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\b(what's your name|who are you|what do you call yourself)\b",
        r"\b(are you a bot|are you ai|are you artificial intelligence)\b",
    ])
});

static CAPABILITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\b(what can you do|what are your features|help|what do you offer)\b",
        r"\b(how do you work|how can you help me)\b",
    ])
});

static THANKS_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(&[r"\b(thank you|thanks|thx|appreciate it)\b"]));

static GOODBYE_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(&[r"\b(bye|goodbye|see you|farewell|exit|quit)\b"]));

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("hardcoded intent pattern compiles"))
        .collect()
}

fn any_match(patterns: &[Regex], text: &str) -> bool {
    patterns.iter().any(|p| p.is_match(text))
}

/// How a single rule decides whether it fires.
#[derive(Clone, Debug)]
enum Trigger {
    /// Any of these substrings occurs in the lowercased raw text.
    AnyPhrase(&'static [&'static str]),
    /// The trimmed raw text begins with "a " or "an ".
    IndefiniteArticle,
    /// Any conversational pattern matches; the intent comes from the topic.
    Conversation,
}

/// One predicate → intent pair in the ordered rule list.
#[derive(Clone, Debug)]
struct IntentRule {
    trigger: Trigger,
    intent: Intent,
}

impl IntentRule {
    /// Evaluate this rule against the lowercased raw text.
    fn evaluate(&self, lower: &str) -> Option<Intent> {
        match &self.trigger {
            Trigger::AnyPhrase(phrases) => phrases
                .iter()
                .any(|phrase| lower.contains(phrase))
                .then_some(self.intent),
            Trigger::IndefiniteArticle => {
                let trimmed = lower.trim_start();
                (trimmed.starts_with("a ") || trimmed.starts_with("an ")).then_some(self.intent)
            }
            Trigger::Conversation => conversation_topic_of(lower).map(|topic| match topic {
                ConversationTopic::Greeting => Intent::Greeting,
                _ => Intent::GeneralConversation,
            }),
        }
    }
}

fn conversation_topic_of(lower: &str) -> Option<ConversationTopic> {
    if any_match(&GREETING_PATTERNS, lower) {
        Some(ConversationTopic::Greeting)
    } else if any_match(&IDENTITY_PATTERNS, lower) {
        Some(ConversationTopic::Identity)
    } else if any_match(&CAPABILITY_PATTERNS, lower) {
        Some(ConversationTopic::Capabilities)
    } else if any_match(&THANKS_PATTERNS, lower) {
        Some(ConversationTopic::Thanks)
    } else if any_match(&GOODBYE_PATTERNS, lower) {
        Some(ConversationTopic::Goodbye)
    } else {
        None
    }
}

/// Ordered-rule intent classifier.
///
/// Rule order (first match wins):
/// 1. Image description — image phrases, or a leading indefinite article.
/// 2. Text recommendation — product search phrases.
/// 3. Greeting / general conversation — conversational patterns.
/// 4. Unknown — nothing matched, or the input is empty.
#[derive(Clone, Debug)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    /// Create a classifier with the canonical rule ordering.
    pub fn new() -> Self {
        IntentClassifier {
            rules: vec![
                IntentRule {
                    trigger: Trigger::AnyPhrase(IMAGE_PHRASES),
                    intent: Intent::ImageDescription,
                },
                IntentRule {
                    trigger: Trigger::IndefiniteArticle,
                    intent: Intent::ImageDescription,
                },
                IntentRule {
                    trigger: Trigger::AnyPhrase(PRODUCT_PHRASES),
                    intent: Intent::TextRecommendation,
                },
                IntentRule {
                    trigger: Trigger::Conversation,
                    intent: Intent::GeneralConversation,
                },
            ],
        }
    }

    /// Classify a query.
    ///
    /// Total (every input reaches a decision) and idempotent. The token
    /// sequence is consulted only for emptiness: a query that normalizes
    /// to nothing and has no raw text is `Unknown` without rule
    /// evaluation.
    pub fn classify(&self, tokens: &[String], raw: &str) -> Intent {
        let lower = raw.trim().to_lowercase();
        if lower.is_empty() && tokens.is_empty() {
            return Intent::Unknown;
        }

        for rule in &self.rules {
            if let Some(intent) = rule.evaluate(&lower) {
                tracing::debug!(%intent, "intent rule matched");
                return intent;
            }
        }
        Intent::Unknown
    }

    /// Recover the conversational sub-pattern for reply selection.
    pub fn conversation_topic(&self, raw: &str) -> Option<ConversationTopic> {
        conversation_topic_of(&raw.trim().to_lowercase())
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(raw: &str) -> Intent {
        IntentClassifier::new().classify(&[], raw)
    }

    #[test]
    fn test_image_description_phrases() {
        assert_eq!(classify("here is a picture of shoes"), Intent::ImageDescription);
        assert_eq!(classify("this photo shows a jacket"), Intent::ImageDescription);
        assert_eq!(classify("it looks like a watch"), Intent::ImageDescription);
    }

    #[test]
    fn test_image_description_indefinite_article() {
        assert_eq!(classify("A blue sports t-shirt"), Intent::ImageDescription);
        assert_eq!(classify("an orange water bottle"), Intent::ImageDescription);
    }

    #[test]
    fn test_indefinite_article_ambiguity_is_preserved() {
        // Plausibly a recommendation request, but the article rule runs
        // first. Harmless: both intents share the ranking pipeline.
        assert_eq!(classify("a comfortable hoodie"), Intent::ImageDescription);
    }

    #[test]
    fn test_text_recommendation() {
        assert_eq!(
            classify("Recommend me a t-shirt for sports"),
            Intent::TextRecommendation
        );
        assert_eq!(classify("find running shoes"), Intent::TextRecommendation);
        assert_eq!(classify("show me headphones"), Intent::TextRecommendation);
        assert_eq!(
            classify("I'm looking for something warm"),
            Intent::TextRecommendation
        );
        assert_eq!(classify("I need new jeans"), Intent::TextRecommendation);
    }

    #[test]
    fn test_greeting() {
        assert_eq!(classify("hello"), Intent::Greeting);
        assert_eq!(classify("Good morning!"), Intent::Greeting);
        assert_eq!(classify("hey, how are you?"), Intent::Greeting);
    }

    #[test]
    fn test_general_conversation() {
        assert_eq!(classify("What's your name?"), Intent::GeneralConversation);
        assert_eq!(classify("who are you"), Intent::GeneralConversation);
        assert_eq!(classify("what can you do"), Intent::GeneralConversation);
        assert_eq!(classify("thanks!"), Intent::GeneralConversation);
        assert_eq!(classify("goodbye"), Intent::GeneralConversation);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify("xylophone weather quantum"), Intent::Unknown);
        assert_eq!(classify(""), Intent::Unknown);
        assert_eq!(classify("   "), Intent::Unknown);
    }

    #[test]
    fn test_rule_priority() {
        // Image phrases outrank product phrases.
        assert_eq!(
            classify("find products matching this picture"),
            Intent::ImageDescription
        );
        // Product phrases outrank conversation patterns.
        assert_eq!(
            classify("hello, can you find me a yoga mat?"),
            Intent::TextRecommendation
        );
    }

    #[test]
    fn test_idempotent() {
        let classifier = IntentClassifier::new();
        let raw = "Recommend me a t-shirt";
        let first = classifier.classify(&[], raw);
        for _ in 0..3 {
            assert_eq!(classifier.classify(&[], raw), first);
        }
    }

    #[test]
    fn test_conversation_topics() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.conversation_topic("hi there"),
            Some(ConversationTopic::Greeting)
        );
        assert_eq!(
            classifier.conversation_topic("are you a bot?"),
            Some(ConversationTopic::Identity)
        );
        assert_eq!(
            classifier.conversation_topic("thank you so much"),
            Some(ConversationTopic::Thanks)
        );
        assert_eq!(classifier.conversation_topic("random text"), None);
    }
}
