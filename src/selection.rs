// SPDX-License-Identifier: GPL-3.0-only

//! Category selection for the safety map
//!
//! The selection is either the "All" sentinel or a non-empty set of specific
//! categories. Both states are encoded in the type, so an empty selection or
//! "All" mixed with specific categories cannot be constructed.

use crate::places::Category;
use std::collections::BTreeSet;
use std::fmt;

/// A filter button: the "All" sentinel or one specific category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterTag {
    All,
    Category(Category),
}

impl FilterTag {
    /// All tags in the order the filter bar shows them
    pub const ALL: [FilterTag; 6] = [
        FilterTag::All,
        FilterTag::Category(Category::Hospital),
        FilterTag::Category(Category::Police),
        FilterTag::Category(Category::Pharmacy),
        FilterTag::Category(Category::Diplomatic),
        FilterTag::Category(Category::Atm),
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FilterTag::All => "All",
            FilterTag::Category(category) => category.display_name(),
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            FilterTag::All => "view-app-grid-symbolic",
            FilterTag::Category(category) => category.icon_name(),
        }
    }
}

impl From<Category> for FilterTag {
    fn from(category: Category) -> Self {
        FilterTag::Category(category)
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A set of categories that always holds at least one member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet(BTreeSet<Category>);

impl CategorySet {
    /// Build a set from the given categories, or `None` if there are none
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Option<Self> {
        let set: BTreeSet<Category> = categories.into_iter().collect();
        if set.is_empty() { None } else { Some(Self(set)) }
    }

    pub fn single(category: Category) -> Self {
        Self(BTreeSet::from([category]))
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true; present for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().copied()
    }

    /// Flip membership of `category`, returning `None` if the set would become empty
    fn toggled(&self, category: Category) -> Option<Self> {
        let mut categories = self.0.clone();
        if !categories.remove(&category) {
            categories.insert(category);
        }
        Self::new(categories)
    }
}

/// Active category selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// No category filter applied
    #[default]
    All,
    /// Only the listed categories
    Only(CategorySet),
}

impl Selection {
    /// Selection from a list of categories; an empty list means All
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        CategorySet::new(categories).map_or(Selection::All, Selection::Only)
    }

    /// The state after pressing the filter button for `tag`
    ///
    /// - All collapses the selection to All.
    /// - A category leaves All and flips its own membership.
    /// - Removing the last category falls back to All.
    pub fn toggled(&self, tag: FilterTag) -> Selection {
        match (self, tag) {
            (_, FilterTag::All) => Selection::All,
            (Selection::All, FilterTag::Category(category)) => {
                Selection::Only(CategorySet::single(category))
            }
            (Selection::Only(set), FilterTag::Category(category)) => {
                set.toggled(category).map_or(Selection::All, Selection::Only)
            }
        }
    }

    /// Apply [`Selection::toggled`] in place
    pub fn toggle(&mut self, tag: FilterTag) {
        *self = self.toggled(tag);
    }

    /// Whether a place of `category` passes this selection
    pub fn includes(&self, category: Category) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(set) => set.contains(category),
        }
    }

    /// Whether the filter button for `tag` shows as active
    pub fn is_active(&self, tag: FilterTag) -> bool {
        match (self, tag) {
            (Selection::All, FilterTag::All) => true,
            (Selection::Only(set), FilterTag::Category(category)) => set.contains(category),
            _ => false,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Active tags, in filter bar order
    pub fn active_tags(&self) -> Vec<FilterTag> {
        FilterTag::ALL
            .into_iter()
            .filter(|tag| self.is_active(*tag))
            .collect()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("All"),
            Selection::Only(set) => {
                let names: Vec<&str> = set.iter().map(|c| c.display_name()).collect();
                f.write_str(&names.join(", "))
            }
        }
    }
}
