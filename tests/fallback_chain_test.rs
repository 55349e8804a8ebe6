use bazaar::analysis::Normalizer;
use bazaar::catalog::{loader, Catalog};
use bazaar::index::CatalogIndex;
use bazaar::intent::IntentClassifier;
use bazaar::matcher::{MatchConfig, MatchResult, MatchStage, Matcher};
use bazaar::query::Query;

fn run_matcher(text: &str, config: MatchConfig, top_n: usize) -> Vec<MatchResult> {
    let catalog = loader::sample_catalog();
    run_matcher_on(&catalog, text, config, top_n)
}

fn run_matcher_on(
    catalog: &Catalog,
    text: &str,
    config: MatchConfig,
    top_n: usize,
) -> Vec<MatchResult> {
    let normalizer = Normalizer::new();
    let classifier = IntentClassifier::new();
    let index = CatalogIndex::build(catalog, &normalizer);
    let query = Query::analyze(text, &normalizer, &classifier).project(&index);
    let matcher = Matcher::with_config(Normalizer::new(), config);
    matcher.top_matches(&query, catalog, &index, top_n)
}

#[test]
fn semantic_stage_wins_for_on_vocabulary_queries() {
    let results = run_matcher("find wireless headphones", MatchConfig::default(), 5);

    assert!(!results.is_empty());
    assert_eq!(results[0].matched_via, MatchStage::Semantic);
    assert_eq!(results[0].product.id, 4, "headphones product ranks first");
    assert!(results[0].score > 0.0);
}

#[test]
fn raising_the_threshold_falls_through_to_keyword_matching() {
    let config = MatchConfig {
        semantic_threshold: 0.999,
    };
    let results = run_matcher("find wireless headphones", config, 5);

    assert!(!results.is_empty());
    for result in &results {
        assert_eq!(result.matched_via, MatchStage::Keyword);
        assert!(result.score > 0.0);
    }
    let ids: Vec<u64> = results.iter().map(|r| r.product.id).collect();
    assert!(ids.contains(&4));
    assert!(ids.contains(&8), "speaker shares the wireless tag");
}

#[test]
fn out_of_vocabulary_queries_reach_the_default_stage() {
    let results = run_matcher("find quixotic zyzzyva contraptions", MatchConfig::default(), 3);

    assert_eq!(results.len(), 3);
    let ids: Vec<u64> = results.iter().map(|r| r.product.id).collect();
    assert_eq!(ids, vec![1, 2, 3], "default stage returns lowest ids first");
    for result in &results {
        assert_eq!(result.matched_via, MatchStage::Default);
        assert_eq!(result.score, 0.0);
    }
}

#[test]
fn empty_catalog_yields_no_matches() {
    let catalog = Catalog::empty();
    let results = run_matcher_on(&catalog, "find headphones", MatchConfig::default(), 5);
    assert!(results.is_empty());
}

#[test]
fn results_are_sorted_by_score_then_id() {
    let results = run_matcher("comfortable everyday clothing", MatchConfig::default(), 10);

    assert!(!results.is_empty());
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.product.id < b.product.id),
            "ordering violated between products {} and {}",
            a.product.id,
            b.product.id
        );
    }
}

#[test]
fn top_n_caps_the_result_count() {
    let results = run_matcher("find wireless headphones", MatchConfig::default(), 1);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].product.id, 4);
}

#[test]
fn repeated_runs_are_deterministic() {
    let first = run_matcher("recommend something for yoga", MatchConfig::default(), 5);
    let second = run_matcher("recommend something for yoga", MatchConfig::default(), 5);

    let ids = |results: &[MatchResult]| -> Vec<(u64, MatchStage)> {
        results.iter().map(|r| (r.product.id, r.matched_via)).collect()
    };
    assert_eq!(ids(&first), ids(&second));
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.score, b.score);
    }
}
