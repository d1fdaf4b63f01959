//! Search filters and the match computation over the catalog.

use catalog_core::{AuthorId, Book, Catalog, GenreId};

pub const ANY: &str = "any";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Any,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T> Selection<T> {
    /// Parses a form value; blank input and `"any"` both mean no restriction.
    pub fn from_form(value: &str) -> Self
    where
        T: for<'a> From<&'a str>,
    {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ANY) {
            Self::Any
        } else {
            Self::Only(T::from(value))
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub title: String,
    pub author: Selection<AuthorId>,
    pub genre: Selection<GenreId>,
}

impl SearchFilters {
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: Selection::from_form(author),
            genre: Selection::from_form(genre),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.author.is_any() && self.genre.is_any()
    }

    pub fn matches(&self, book: &Book) -> bool {
        matches_title(&self.title, &book.title)
            && match &self.author {
                Selection::Any => true,
                Selection::Only(author) => &book.author == author,
            }
            && match &self.genre {
                Selection::Any => true,
                Selection::Only(genre) => book.has_genre(genre),
            }
    }
}

fn matches_title(query: &str, title: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    title.to_lowercase().contains(&query.to_lowercase())
}

/// Indices into `catalog.books` of every book the filters accept, in catalog order.
pub fn filter_matches(catalog: &Catalog, filters: &SearchFilters) -> Vec<usize> {
    catalog
        .books
        .iter()
        .enumerate()
        .filter(|(_, book)| filters.matches(book))
        .map(|(idx, _)| idx)
        .collect()
}
