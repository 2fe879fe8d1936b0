//! Examples of using the trie
use hemlock_trie::{Error, Trie};

fn main() -> Result<(), Error> {
    // Create a new case-sensitive trie
    let mut trie = Trie::new();

    // Add some words
    for word in &["Test", "Te", "talk", "Town", "Tectonic"] {
        trie.add_word(word)?;
    }

    // Check words and prefixes
    assert!(trie.check_word("Test"));
    assert!(!trie.check_word("test"));
    assert!(trie.check_prefix("Tec"));

    // List what can follow a prefix
    println!("after T: {:?}", trie.get_children("T")?);
    println!("after Te: {:?}", trie.get_children("Te")?);

    // Remove a word, the longer ones sharing its prefix stay
    trie.remove_word("Te")?;
    assert!(trie.check_word("Tectonic"));

    // Removing it again fails
    if let Err(err) = trie.remove_word("Te") {
        println!("{}", err);
    }

    // A case-insensitive trie folds everything to lowercase
    let mut folded = Trie::with_case_sensitivity(false);
    folded.extend(vec!["Test", "Te", "talk", "Town", "Tectonic"]);
    println!("folded after t: {:?}", folded.get_children("t")?);

    // Browse the words under a prefix in order
    for word in folded.view_subtrie("te").iter() {
        println!("{}", word);
    }

    Ok(())
}

#[test]
fn test_prefix_view() {
    let mut trie = Trie::new();
    trie.extend(vec!["hello", "help", "world"]);

    // Create a view of the "hel" prefix
    let view = trie.view_subtrie("hel");

    // Check prefix view properties
    assert!(view.exists());
    assert_eq!(view.len(), 2);
    assert!(!view.is_empty());

    // Check word existence in the view
    assert!(view.contains_word("hello"));
    assert!(view.contains_word("help"));
    assert!(!view.contains_word("world"));
}
