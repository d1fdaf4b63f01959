//! Open/closed state for dialog panels and the option lists they offer.

use catalog_core::{AuthorId, Catalog, GenreId};

use crate::filter::Selection;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
    open: bool,
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn activate_trigger(&mut self) {
        self.open = true;
    }

    pub fn activate_cancel(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry<T> {
    pub value: Selection<T>,
    pub label: String,
}

pub fn author_options(catalog: &Catalog) -> Vec<OptionEntry<AuthorId>> {
    build_options(
        "All Authors",
        catalog.authors.iter().map(|(id, name)| (id.clone(), name.clone())),
    )
}

pub fn genre_options(catalog: &Catalog) -> Vec<OptionEntry<GenreId>> {
    build_options(
        "All Genres",
        catalog.genres.iter().map(|(id, name)| (id.clone(), name.clone())),
    )
}

/// Leading "any" entry, then the catalog's entries in the order it lists them.
fn build_options<T>(
    any_label: &str,
    entries: impl ExactSizeIterator<Item = (T, String)>,
) -> Vec<OptionEntry<T>> {
    let mut out = Vec::with_capacity(entries.len() + 1);
    out.push(OptionEntry {
        value: Selection::Any,
        label: any_label.to_string(),
    });
    out.extend(entries.map(|(id, label)| OptionEntry {
        value: Selection::Only(id),
        label,
    }));
    out
}
