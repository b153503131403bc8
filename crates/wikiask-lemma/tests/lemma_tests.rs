use wikiask_core::traits::Normalizer;
use wikiask_lemma::SnowballNormalizer;

#[test]
fn lowercases_and_stems_inflected_forms() {
    let normalizer = SnowballNormalizer::english();
    let terms = normalizer.normalize("The Dogs jumped, running quickly!").expect("normalize");

    assert_eq!(terms, vec!["the", "dog", "jump", "run", "quick"]);
}

#[test]
fn splits_on_punctuation_and_keeps_digits() {
    let normalizer = SnowballNormalizer::english();
    let terms = normalizer.normalize("born in 1912 (approx.)").expect("normalize");

    assert_eq!(terms, vec!["born", "in", "1912", "approx"]);
}

#[test]
fn empty_input_yields_no_terms() {
    let normalizer = SnowballNormalizer::english();
    assert!(normalizer.normalize("").expect("normalize").is_empty());
    assert!(normalizer.normalize("  ...  ").expect("normalize").is_empty());
}

#[test]
fn normalization_is_deterministic() {
    let normalizer = SnowballNormalizer::english();
    let a = normalizer.normalize("categories of living things").expect("normalize");
    let b = normalizer.normalize("categories of living things").expect("normalize");

    assert_eq!(a, b);
}
