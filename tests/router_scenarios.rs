use std::sync::Arc;
use std::thread;

use bazaar::catalog::loader;
use bazaar::intent::Intent;
use bazaar::matcher::MatchStage;
use bazaar::router::QueryRouter;

fn sample_router() -> QueryRouter {
    QueryRouter::new(loader::sample_catalog())
}

#[test]
fn router_answers_identity_question_without_matches() {
    let router = sample_router();
    let response = router.handle("What's your name?", None);

    assert_eq!(response.intent, Intent::GeneralConversation);
    assert!(response.matches.is_empty());
    assert!(!response.reply.is_empty());
}

#[test]
fn router_recommends_sports_shirt_over_electronics() {
    let router = sample_router();
    let response = router.handle("Recommend me a t-shirt for sports", None);

    assert_eq!(response.intent, Intent::TextRecommendation);
    assert!(!response.matches.is_empty());

    let top = &response.matches[0].product;
    assert!(
        top.tags.iter().any(|t| t == "t-shirt" || t == "sports"),
        "top match {} should be tagged sports or t-shirt",
        top.name
    );

    // Any electronics product that sneaks in ranks strictly below.
    let top_score = response.matches[0].score;
    for result in &response.matches {
        if result.product.category == "electronics" {
            assert!(result.score < top_score);
        }
    }
}

#[test]
fn image_description_uses_the_same_ranking_pipeline() {
    let router = sample_router();

    let described = router.handle("A blue sports t-shirt", None);
    assert_eq!(described.intent, Intent::ImageDescription);

    let asked = router.handle("find a sports t-shirt", None);
    assert_eq!(asked.intent, Intent::TextRecommendation);

    // Same query vocabulary, same ranking: identical product order.
    let described_ids: Vec<u64> = described.matches.iter().map(|m| m.product.id).collect();
    let asked_ids: Vec<u64> = asked.matches.iter().map(|m| m.product.id).collect();
    assert_eq!(described_ids, asked_ids);
}

#[test]
fn vocabulary_mismatch_still_produces_products() {
    let router = sample_router();
    let response = router.handle("find xylophone zzyzx gadgetry", None);

    assert!(!response.matches.is_empty());
    assert!(
        response
            .matches
            .iter()
            .all(|m| m.matched_via == MatchStage::Default || m.score > 0.0)
    );
}

#[test]
fn external_response_augments_but_never_replaces_matching() {
    let router = sample_router();

    let plain = router.handle("show me headphones", None);
    let augmented = router.handle("show me headphones", Some("Consider noise cancellation."));

    assert!(augmented.reply.starts_with("Consider noise cancellation."));
    assert_eq!(plain.matches.len(), augmented.matches.len());
    for (a, b) in plain.matches.iter().zip(augmented.matches.iter()) {
        assert_eq!(a.product.id, b.product.id);
        assert_eq!(a.score, b.score);
        assert_eq!(a.matched_via, b.matched_via);
    }
}

#[test]
fn concurrent_requests_share_one_router() {
    let router = Arc::new(sample_router());
    let baseline = router.handle("find running shoes", None);
    let baseline_ids: Vec<u64> = baseline.matches.iter().map(|m| m.product.id).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let router = Arc::clone(&router);
            let expected = baseline_ids.clone();
            thread::spawn(move || {
                for _ in 0..10 {
                    let response = router.handle("find running shoes", None);
                    let ids: Vec<u64> = response.matches.iter().map(|m| m.product.id).collect();
                    assert_eq!(ids, expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }
}

#[test]
fn serialized_response_carries_product_fields() {
    let router = sample_router();
    let response = router.handle("find wireless headphones", None);

    let json = serde_json::to_value(&response).expect("response serializes");
    assert_eq!(json["intent"], "text_recommendation");
    let first = &json["matches"][0];
    for field in ["id", "name", "description", "price", "category", "brand", "image_url", "tags", "score", "matched_via"] {
        assert!(first.get(field).is_some(), "missing field {field}");
    }
}
