use rb_ordered_map::OrderedSet;

fn case_insensitive_less(a: &String, b: &String) -> bool {
    a.to_lowercase() < b.to_lowercase()
}

fn main() {
    let mut tags: OrderedSet<String, _> = OrderedSet::with_comparator(case_insensitive_less);
    for tag in ["Rust", "tree", "RUST", "Map", "set"] {
        let _ = tags.insert(tag.to_string()).unwrap();
    }
    // "RUST" is equivalent to the already stored "Rust"
    assert_eq!(tags.len(), 4);
    assert_eq!(
        tags.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["Map", "Rust", "set", "tree"]
    );
    assert!(tags.contains(&"MAP".to_string()));
    assert_eq!(
        tags.lower_bound(&"S".to_string()).get().map(String::as_str),
        Some("set")
    );
}
