//! Query routing: the high-level engine facade.
//!
//! The [`QueryRouter`] owns the immutable pieces (catalog, index,
//! normalizer, classifier, matcher) and orchestrates one request:
//! normalize → classify → match or reply. It is `Send + Sync` and every
//! request method takes `&self`, so one router in an `Arc` serves
//! arbitrarily many concurrent callers without locking.
//!
//! An externally produced response (Agent Mode) can be merged in two
//! ways: pass it as `external` to [`QueryRouter::handle`], or inject an
//! [`AgentResponder`] and call
//! [`handle_with_agent`](QueryRouter::handle_with_agent). Either way the
//! external text only augments the composed reply; it never changes which
//! matching stage ran.
//!
//! # Examples
//!
//! ```
//! use bazaar::catalog::loader;
//! use bazaar::intent::Intent;
//! use bazaar::router::QueryRouter;
//!
//! let router = QueryRouter::new(loader::sample_catalog());
//! let response = router.handle("Recommend me a t-shirt for sports", None);
//!
//! assert_eq!(response.intent, Intent::TextRecommendation);
//! assert!(!response.matches.is_empty());
//! ```

use std::sync::Arc;

use rand::prelude::IndexedRandom;
use serde::Serialize;
use tracing::debug;

use crate::analysis::Normalizer;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::index::CatalogIndex;
use crate::intent::{ConversationTopic, Intent, IntentClassifier};
use crate::matcher::{MatchConfig, MatchResult, Matcher};
use crate::query::Query;

/// Default number of matches returned by [`QueryRouter::handle`].
pub const DEFAULT_TOP_N: usize = 5;

/// The composed answer for one request.
#[derive(Clone, Debug, Serialize)]
pub struct RouterResponse {
    /// Classified intent of the query.
    pub intent: Intent,
    /// Conversational reply text.
    pub reply: String,
    /// Matched products; empty for conversational intents.
    pub matches: Vec<MatchResult>,
}

/// Pluggable external generative service ("Agent Mode").
///
/// Implementations may call out to anything; the router treats the result
/// as opaque text and treats errors as an absent response. The core never
/// retries.
pub trait AgentResponder: Send + Sync {
    /// Produce a free-form response for a query, optionally given an
    /// image description.
    fn respond(&self, query: &str, image_description: Option<&str>) -> Result<String>;
}

/// Orchestrates Normalizer → IntentClassifier → (Matcher | canned reply).
pub struct QueryRouter {
    catalog: Catalog,
    index: CatalogIndex,
    normalizer: Normalizer,
    classifier: IntentClassifier,
    matcher: Matcher,
    agent: Option<Arc<dyn AgentResponder>>,
}

impl QueryRouter {
    /// Build a router over a catalog with default configuration.
    ///
    /// Builds the catalog index synchronously; afterwards the router is
    /// fully immutable.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, MatchConfig::default())
    }

    /// Build a router with explicit matching configuration.
    pub fn with_config(catalog: Catalog, config: MatchConfig) -> Self {
        let normalizer = Normalizer::new();
        let index = CatalogIndex::build(&catalog, &normalizer);
        let matcher = Matcher::with_config(normalizer.clone(), config);
        QueryRouter {
            catalog,
            index,
            normalizer,
            classifier: IntentClassifier::new(),
            matcher,
            agent: None,
        }
    }

    /// Inject an Agent Mode responder.
    pub fn with_agent(mut self, agent: Arc<dyn AgentResponder>) -> Self {
        self.agent = Some(agent);
        self
    }

    /// The catalog this router serves.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The index this router matches against.
    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Classify raw text without matching.
    pub fn classify(&self, text: &str) -> Intent {
        let tokens = self.normalizer.normalize(text);
        self.classifier.classify(&tokens, text)
    }

    /// Run the matching pipeline directly, bypassing reply composition.
    pub fn top_matches(&self, text: &str, top_n: usize) -> Vec<MatchResult> {
        let query = Query::analyze(text, &self.normalizer, &self.classifier).project(&self.index);
        self.matcher
            .top_matches(&query, &self.catalog, &self.index, top_n)
    }

    /// Handle one request end to end.
    ///
    /// `external` is an optional Agent Mode response produced by the
    /// caller; when present it is prepended to the composed reply.
    /// This method never fails: malformed, empty, or out-of-vocabulary
    /// input all resolve to a best-effort response.
    pub fn handle(&self, raw: &str, external: Option<&str>) -> RouterResponse {
        let query = Query::analyze(raw, &self.normalizer, &self.classifier).project(&self.index);
        debug!(intent = %query.intent, tokens = query.tokens.len(), "routing query");

        let (reply, matches) = match query.intent {
            Intent::TextRecommendation | Intent::ImageDescription => {
                let matches =
                    self.matcher
                        .top_matches(&query, &self.catalog, &self.index, DEFAULT_TOP_N);
                (compose_match_reply(query.intent, &matches), matches)
            }
            Intent::Greeting | Intent::GeneralConversation => {
                let topic = self
                    .classifier
                    .conversation_topic(raw)
                    .unwrap_or(ConversationTopic::Greeting);
                (conversational_reply(topic).to_string(), Vec::new())
            }
            Intent::Unknown => (UNKNOWN_REPLY.to_string(), Vec::new()),
        };

        let reply = match external {
            Some(text) if !text.trim().is_empty() => format!("{text}\n\n{reply}"),
            _ => reply,
        };

        RouterResponse {
            intent: query.intent,
            reply,
            matches,
        }
    }

    /// Handle one request, consulting the injected [`AgentResponder`].
    ///
    /// An agent failure (or no injected agent) degrades to a plain
    /// [`handle`](QueryRouter::handle) call with no external response.
    pub fn handle_with_agent(&self, raw: &str, image_description: Option<&str>) -> RouterResponse {
        let external = match &self.agent {
            Some(agent) => match agent.respond(raw, image_description) {
                Ok(text) => Some(text),
                Err(e) => {
                    debug!("agent responder failed, continuing without it: {e}");
                    None
                }
            },
            None => None,
        };
        self.handle(raw, external.as_deref())
    }

    /// Route an uploaded image's filename as an image-description query.
    ///
    /// The actual image bytes are never inspected; the filename stands in
    /// for a vision service's description.
    pub fn handle_filename(&self, filename: &str) -> RouterResponse {
        let description = describe_filename(filename);
        self.handle(&format!("a picture of {description}"), None)
    }
}

/// Turn an uploaded filename into a pseudo-description.
///
/// Splits on dots, underscores, and hyphens, dropping the extension-like
/// final fragment when there are several.
pub fn describe_filename(filename: &str) -> String {
    let words: Vec<&str> = filename
        .split(['.', '_', '-', ' '])
        .filter(|w| !w.is_empty())
        .collect();
    let keep = if words.len() > 1 {
        &words[..words.len() - 1]
    } else {
        &words[..]
    };
    keep.join(" ")
}

/// Compose the match-count reply for product intents.
fn compose_match_reply(intent: Intent, matches: &[MatchResult]) -> String {
    if matches.is_empty() {
        return "I couldn't find any products matching that. Could you describe what you're \
                looking for in a different way?"
            .to_string();
    }
    match intent {
        Intent::ImageDescription => format!(
            "Based on that description, I found {} product{} you might like:",
            matches.len(),
            plural(matches.len())
        ),
        _ => format!(
            "I found {} product{} matching your request:",
            matches.len(),
            plural(matches.len())
        ),
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

const GREETING_REPLIES: &[&str] = &[
    "Hello! I'm your shopping assistant. How can I help you today?",
    "Hi there! I'm here to help you find the perfect products. What are you looking for?",
    "Greetings! I'm your personal shopping companion. How may I assist you?",
];

const IDENTITY_REPLIES: &[&str] = &[
    "I'm ShopBot, your shopping assistant! I can help you find products, make recommendations, \
     and answer questions about our catalog.",
    "My name is ShopBot! I'm here to make your shopping experience easier and more enjoyable.",
];

const CAPABILITY_REPLIES: &[&str] = &[
    "I can help you with product recommendations, searching for specific items, and \
     image-based product discovery. Just tell me what you're looking for!",
    "Here's what I can do: find products that match your requirements, recommend items based \
     on your preferences, and help you discover new products. What would you like to explore?",
];

const THANKS_REPLIES: &[&str] = &[
    "You're welcome! I'm happy to help. Is there anything else you'd like to know?",
    "My pleasure! Feel free to ask if you need any more assistance.",
];

const GOODBYE_REPLIES: &[&str] = &[
    "Goodbye! Happy shopping! Come back anytime you need assistance.",
    "See you later! I hope you found what you were looking for.",
];

const UNKNOWN_REPLY: &str = "I'm not sure I understood that. You can ask me to recommend \
                             products, search for specific items, or describe an image of \
                             something you'd like to find.";

/// Pick a canned reply for a conversational topic.
///
/// Variants are chosen at random so repeated small talk does not
/// sound canned; matching behavior is untouched by this.
fn conversational_reply(topic: ConversationTopic) -> &'static str {
    let replies = match topic {
        ConversationTopic::Greeting => GREETING_REPLIES,
        ConversationTopic::Identity => IDENTITY_REPLIES,
        ConversationTopic::Capabilities => CAPABILITY_REPLIES,
        ConversationTopic::Thanks => THANKS_REPLIES,
        ConversationTopic::Goodbye => GOODBYE_REPLIES,
    };
    let mut rng = rand::rng();
    replies.choose(&mut rng).copied().unwrap_or(UNKNOWN_REPLY)
}
