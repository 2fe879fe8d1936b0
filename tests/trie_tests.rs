use hemlock_trie::{Error, Trie};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn scenario(case_sensitive: bool) -> Trie {
    let mut trie = Trie::with_case_sensitivity(case_sensitive);
    for word in &["Test", "Te", "talk", "Town", "Tectonic"] {
        trie.add_word(word).unwrap();
    }
    trie
}

#[test]
fn test_adds_words_with_case_sensitivity() {
    let mut trie = Trie::new();
    trie.add_word("Test").unwrap();

    assert!(trie.check_word("Test"));
    assert!(!trie.check_word("test"));
    assert!(!trie.check_prefix("t"));
}

#[test]
fn test_adds_words_without_case_sensitivity() {
    let mut trie = Trie::with_case_sensitivity(false);
    trie.add_word("Test").unwrap();

    assert!(trie.check_word("Test"));
    assert!(trie.check_word("test"));
    assert!(trie.check_word("TEST"));
    assert!(trie.check_prefix("t"));
    assert_eq!(trie.get_children("t"), trie.get_children("T"));
}

#[test]
fn test_checks_prefixes_with_case_sensitivity() {
    let mut trie = Trie::new();
    trie.add_word("Test").unwrap();

    for prefix in &["T", "Te", "Tes", "Test"] {
        assert!(trie.check_prefix(prefix), "{} should be a prefix", prefix);
        let lower = prefix.to_lowercase();
        assert!(!trie.check_prefix(&lower), "{} should not be a prefix", lower);
    }
    assert!(!trie.check_prefix("Tests"));
}

#[test]
fn test_checks_prefixes_without_case_sensitivity() {
    let mut trie = Trie::with_case_sensitivity(false);
    trie.add_word("Test").unwrap();

    for prefix in &["T", "t", "Te", "te", "Tes", "tes", "Test", "test"] {
        assert!(trie.check_prefix(prefix), "{} should be a prefix", prefix);
    }
}

#[test]
fn test_children_with_case_sensitivity() {
    let trie = scenario(true);

    assert_eq!(trie.get_children("T").unwrap(), vec!['e', 'o']);
    assert_eq!(trie.get_children("Te").unwrap(), vec!['c', 's']);
    assert_eq!(trie.get_children("t").unwrap(), vec!['a']);
}

#[test]
fn test_children_without_case_sensitivity() {
    let trie = scenario(false);

    assert_eq!(trie.get_children("T").unwrap(), vec!['a', 'e', 'o']);
    assert_eq!(trie.get_children("Te").unwrap(), vec!['c', 's']);
    assert_eq!(trie.get_children("t"), trie.get_children("T"));
}

#[test]
fn test_children_of_terminal_leaf_is_empty() {
    let trie = scenario(true);

    assert_eq!(trie.get_children("Town"), Ok(vec![]));
    assert_eq!(
        trie.get_children("Towns"),
        Err(Error::PrefixNotFound("Towns".to_string()))
    );
}

#[test]
fn test_children_on_empty_trie() {
    let trie = Trie::new();

    let err = trie.get_children("Test").unwrap_err();
    assert_eq!(err.to_string(), "No such prefix: Test");
}

#[test]
fn test_removes_word_with_case_sensitivity() {
    init_tracing();
    let mut trie = Trie::new();
    trie.add_word("Test").unwrap();
    assert!(trie.check_word("Test"));

    trie.remove_word("Test").unwrap();

    assert!(!trie.check_word("Test"));
    assert!(!trie.check_prefix("T"));
    assert!(!trie.check_prefix("Te"));
    assert!(!trie.check_prefix("Tes"));
    assert!(trie.is_empty());
}

#[test]
fn test_removes_word_with_case_sensitivity_without_disrupting_branches() {
    let mut trie = Trie::new();
    trie.add_word("Test").unwrap();
    trie.add_word("Tests").unwrap();

    trie.remove_word("Test").unwrap();
    assert!(!trie.check_word("Test"));
    assert!(trie.check_word("Tests"));

    trie.add_word("Test").unwrap();
    trie.remove_word("Tests").unwrap();
    assert!(trie.check_word("Test"));
    assert!(!trie.check_word("Tests"));
    assert!(trie.get_children("Test").unwrap().is_empty());
}

#[test]
fn test_removes_word_without_case_sensitivity() {
    let mut trie = Trie::with_case_sensitivity(false);
    trie.add_word("Test").unwrap();

    trie.remove_word("Test").unwrap();

    assert!(!trie.check_word("Test"));
    assert!(!trie.check_prefix("t"));
    assert!(!trie.check_prefix("Te"));
    assert!(!trie.check_prefix("TeS"));
}

#[test]
fn test_removes_word_without_case_sensitivity_without_disrupting_branches() {
    let mut trie = Trie::with_case_sensitivity(false);
    trie.add_word("Test").unwrap();
    trie.add_word("tests").unwrap();
    assert!(trie.check_word("TestS"));

    trie.remove_word("test").unwrap();

    assert!(!trie.check_word("Test"));
    assert!(trie.check_word("TestS"));
}

#[test]
fn test_does_not_remove_missing_words() {
    init_tracing();
    let mut trie = Trie::with_case_sensitivity(false);
    trie.add_word("Tests").unwrap();

    let err = trie.remove_word("test").unwrap_err();
    assert_eq!(err, Error::WordNotFound("test".to_string()));
    assert_eq!(err.to_string(), "No such word: test");

    assert!(trie.check_word("tests"));
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_removing_twice_fails_the_second_time() {
    let mut trie = scenario(true);

    trie.remove_word("Te").unwrap();
    assert!(trie.remove_word("Te").is_err());

    // Te still leads to Test and Tectonic
    assert_eq!(trie.get_children("Te").unwrap(), vec!['c', 's']);
}

#[test]
fn test_removing_everything_leaves_empty_trie() {
    let mut trie = scenario(false);
    let words: Vec<String> = trie.words().collect();

    for word in &words {
        trie.remove_word(word).unwrap();
    }

    assert!(trie.is_empty());
    assert_eq!(trie, Trie::with_case_sensitivity(false));
    assert_eq!(trie.get_children(""), Ok(vec![]));
}

#[test]
fn test_case_insensitive_prefixes_fold_like_words() {
    let mut trie = Trie::with_case_sensitivity(false);
    trie.add_word("ΣΑΣΑ").unwrap();

    assert!(trie.check_word("σασα"));
    assert!(trie.check_prefix("ΣΑΣ"));
    assert!(trie.check_prefix("Σ"));
    assert_eq!(trie.get_children("ΣΑΣ"), Ok(vec!['α']));
    assert!(trie.view_subtrie("ΣΑΣ").contains_word("ΣΑΣΑ"));

    trie.remove_word("ΣΑΣΑ").unwrap();
    assert!(trie.is_empty());
    assert!(!trie.check_prefix("Σ"));
}

#[test]
fn test_unicode_words() {
    let mut trie = Trie::with_case_sensitivity(false);
    trie.add_word("Ärger").unwrap();
    trie.add_word("日本").unwrap();

    assert!(trie.check_word("ärger"));
    assert!(trie.check_prefix("日"));
    assert_eq!(trie.get_children("日").unwrap(), vec!['本']);
    assert_eq!(trie.get_children("").unwrap(), vec!['ä', '日']);
}
