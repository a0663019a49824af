// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the category selection rules

use guardian::places::Category;
use guardian::selection::{FilterTag, Selection};

/// Every sequence of `len` presses over all filter tags
fn sequences(len: usize) -> Vec<Vec<FilterTag>> {
    let mut sequences = vec![Vec::new()];
    for _ in 0..len {
        sequences = sequences
            .into_iter()
            .flat_map(|prefix| {
                FilterTag::ALL.into_iter().map(move |tag| {
                    let mut next = prefix.clone();
                    next.push(tag);
                    next
                })
            })
            .collect();
    }
    sequences
}

#[test]
fn test_selection_never_empty() {
    for len in 1..=4 {
        for sequence in sequences(len) {
            let mut selection = Selection::All;
            for tag in &sequence {
                selection.toggle(*tag);
                assert!(
                    !selection.active_tags().is_empty(),
                    "Empty selection after {:?}",
                    sequence
                );
            }
        }
    }
}

#[test]
fn test_all_and_category_never_coexist() {
    for sequence in sequences(3) {
        let mut selection = Selection::All;
        for tag in sequence {
            selection.toggle(tag);
            let tags = selection.active_tags();
            if tags.contains(&FilterTag::All) {
                assert_eq!(tags, vec![FilterTag::All]);
            }
        }
    }
}

#[test]
fn test_toggle_all_yields_all() {
    let selection = Selection::from_categories([Category::Police, Category::Atm]);
    assert_eq!(selection.toggled(FilterTag::All), Selection::All);
    assert_eq!(Selection::All.toggled(FilterTag::All), Selection::All);
}

#[test]
fn test_toggle_category_from_all_selects_only_it() {
    let selection = Selection::All.toggled(FilterTag::Category(Category::Pharmacy));
    assert_eq!(selection, Selection::from_categories([Category::Pharmacy]));
    assert_eq!(
        selection.active_tags(),
        vec![FilterTag::Category(Category::Pharmacy)]
    );
}

#[test]
fn test_toggle_adds_and_removes_categories() {
    let mut selection = Selection::All;
    selection.toggle(FilterTag::Category(Category::Hospital));
    selection.toggle(FilterTag::Category(Category::Police));
    assert_eq!(
        selection,
        Selection::from_categories([Category::Hospital, Category::Police])
    );

    selection.toggle(FilterTag::Category(Category::Hospital));
    assert_eq!(selection, Selection::from_categories([Category::Police]));
}

#[test]
fn test_toggle_last_category_off_yields_all() {
    let selection = Selection::from_categories([Category::Diplomatic]);
    assert_eq!(
        selection.toggled(FilterTag::Category(Category::Diplomatic)),
        Selection::All
    );
}

#[test]
fn test_includes() {
    for category in Category::ALL {
        assert!(Selection::All.includes(category));
    }
    let selection = Selection::from_categories([Category::Hospital]);
    assert!(selection.includes(Category::Hospital));
    assert!(!selection.includes(Category::Atm));
}
