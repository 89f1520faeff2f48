use wordtree::{normalize, Tree, WordIndex};

use std::collections::BTreeSet;

use crate::RawWord;

use quickcheck_macros::quickcheck;

/// Normalizes raw words, dropping the ones with nothing left.
fn keys(raw: &[RawWord]) -> Vec<String> {
    raw.iter()
        .map(|w| normalize(&w.0))
        .filter(|k| !k.is_empty())
        .collect()
}

fn build(keys: &[String]) -> Tree {
    let mut tree = Tree::new();
    for key in keys {
        tree.insert_unique(key.as_str()).unwrap();
    }
    tree
}

#[quickcheck]
fn in_order_is_sorted_set(xs: Vec<RawWord>) -> bool {
    let keys = keys(&xs);
    let tree = build(&keys);
    let set: BTreeSet<&str> = keys.iter().map(String::as_str).collect();

    tree.in_order() == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn count_matches_distinct_inserts(xs: Vec<RawWord>) -> bool {
    let keys = keys(&xs);
    let mut tree = Tree::new();
    let mut distinct = 0;
    for key in &keys {
        if tree.insert_unique(key.as_str()).unwrap() {
            distinct += 1;
        }
        // A second insert is always a no-op.
        let before = tree.count();
        if tree.insert_unique(key.as_str()) != Ok(false) || tree.count() != before {
            return false;
        }
    }

    tree.count() == distinct && distinct == keys.iter().collect::<BTreeSet<_>>().len()
}

#[quickcheck]
fn contains(xs: Vec<RawWord>) -> bool {
    let keys = keys(&xs);
    let tree = build(&keys);

    keys.iter().all(|k| tree.contains(k))
}

#[quickcheck]
fn contains_not(xs: Vec<RawWord>, nots: Vec<RawWord>) -> bool {
    let added: BTreeSet<String> = keys(&xs).into_iter().collect();
    let nots: BTreeSet<String> = keys(&nots).into_iter().collect();
    let tree = build(&added.iter().cloned().collect::<Vec<_>>());

    nots.difference(&added).all(|k| !tree.contains(k))
}

#[quickcheck]
fn with_deletions(xs: Vec<RawWord>, deletes: Vec<RawWord>) -> bool {
    let inserted = keys(&xs);
    let deletes = keys(&deletes);
    let mut tree = build(&inserted);

    for delete in &deletes {
        let before = tree.count();
        let was_present = tree.contains(delete);
        tree.delete(delete);
        if tree.contains(delete) || tree.count() != before - usize::from(was_present) {
            return false;
        }
    }

    let still_present: BTreeSet<&str> = inserted
        .iter()
        .map(String::as_str)
        .filter(|k| !deletes.iter().any(|d| d == k))
        .collect();
    tree.in_order() == still_present.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn substring_scan_is_filtered_in_order(xs: Vec<RawWord>, fragment: RawWord) -> bool {
    let keys = keys(&xs);
    let tree = build(&keys);
    let fragment = normalize(&fragment.0);

    let expected: Vec<&str> = tree
        .in_order()
        .into_iter()
        .filter(|k| k.contains(fragment.as_str()))
        .collect();
    tree.substring_scan(&fragment) == expected
}

#[quickcheck]
fn index_agrees_with_tree(xs: Vec<RawWord>) -> bool {
    let mut index = WordIndex::new();
    for raw in &xs {
        let key = normalize(&raw.0);
        match index.insert(&raw.0) {
            Ok(insertion) => {
                if insertion.key != key {
                    return false;
                }
            }
            Err(_) => {
                if !key.is_empty() {
                    return false;
                }
            }
        }
    }

    xs.iter().all(|raw| normalize(&raw.0).is_empty() || index.contains(&raw.0))
        && index.len() == index.words().len()
}

#[test]
fn clear_twice() {
    let mut tree = build(&["b".into(), "a".into(), "c".into()]);
    tree.clear();
    assert_eq!(tree.count(), 0);
    tree.clear();
    assert_eq!(tree.count(), 0);
}
