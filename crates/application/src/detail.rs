//! Detail overlay contents for a single book.

use catalog_core::{BookId, Catalog};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub key: BookId,
    pub backdrop_image: String,
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Names of the book's genres; ids missing from the catalog are skipped.
    pub genres: Vec<String>,
}

impl DetailView {
    /// Looks the key up in the full catalog, not just the current matches.
    pub fn lookup(catalog: &Catalog, key: &BookId) -> Option<Self> {
        let book = catalog.find(key)?;
        Some(Self {
            key: book.id.clone(),
            backdrop_image: book.image.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!(
                "{} ({})",
                catalog.author_name(&book.author),
                book.published_year()
            ),
            description: book.description.clone(),
            genres: book
                .genres
                .iter()
                .filter_map(|genre| catalog.genre_name(genre))
                .map(str::to_string)
                .collect(),
        })
    }
}
