use keyfit::corpus::{
    count_tokens, load_text_dir, load_tokens, synthetic_text, POPULAR_BIGRAMS, POPULAR_TRIGRAMS,
};
use std::fs;

#[test]
fn test_load_json_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokens.json");
    fs::write(&path, r#"{ "the": 100, "of": 40 }"#).unwrap();

    let tokens = load_tokens(&path).unwrap();
    assert_eq!(tokens["the"], 100);
    assert_eq!(tokens["of"], 40);
}

#[test]
fn test_load_tsv_merges_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokens.tsv");
    fs::write(&path, "the\t10\nand\t4\nthe\t5\n").unwrap();

    let tokens = load_tokens(&path).unwrap();
    assert_eq!(tokens["the"], 15);
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_load_csv_rejects_bad_counts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokens.csv");
    fs::write(&path, "the,ten\n").unwrap();
    assert!(load_tokens(&path).is_err());
}

#[test]
fn test_missing_token_file() {
    assert!(load_tokens("/definitely/not/here.json").is_err());
}

#[test]
fn test_count_tokens_one_per_line() {
    let counts = count_tokens("hello\nworld\nhello\n");
    assert_eq!(counts["hello"], 2);
    assert_eq!(counts["world"], 1);
}

#[test]
fn test_text_dir_is_sorted_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("b.txt"), "second").unwrap();
    fs::write(dir.path().join("a.txt"), "first").unwrap();
    fs::write(dir.path().join("nested").join("c.txt"), "third").unwrap();
    fs::write(dir.path().join("notes.md"), "ignored").unwrap();

    let text = load_text_dir(dir.path()).unwrap();
    assert_eq!(text, "first\n\nsecond\n\nthird");
}

#[test]
fn test_empty_text_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_text_dir(dir.path()).is_err());
}

#[test]
fn test_synthetic_corpora() {
    let bigrams = synthetic_text(POPULAR_BIGRAMS);
    let trigrams = synthetic_text(POPULAR_TRIGRAMS);

    assert!(bigrams.split(' ').all(|t| t.chars().count() == 2));
    assert!(trigrams.split(' ').all(|t| t.chars().count() == 3));
    // "th" is the most common bigram and shows up title-cased too.
    assert!(bigrams.contains("Th "));
    assert!(synthetic_text(&[]).is_empty());
}
