//! Test helpers and fixtures.

use catalog_application::{AppContext, SystemPreference};
use catalog_core::{AuthorId, Book, BookId, Catalog, GenreId, Settings};
use chrono::{TimeZone as _, Utc};

const AUTHORS: [(&str, &str); 3] = [
    ("a-0", "Ursula K. Le Guin"),
    ("a-1", "Octavia E. Butler"),
    ("a-2", "Italo Calvino"),
];

const GENRES: [(&str, &str); 2] = [("g-0", "Fantasy"), ("g-1", "Science Fiction")];

pub fn make_book(id: &str, title: &str, author: &str, year: i32, genres: &[&str]) -> Book {
    Book {
        id: BookId::new(id),
        title: title.to_string(),
        author: AuthorId::new(author),
        image: format!("https://covers.example/{id}.jpg"),
        description: format!("About {title}."),
        published: Utc
            .with_ymd_and_hms(year, 3, 1, 0, 0, 0)
            .single()
            .unwrap_or_default(),
        genres: genres.iter().map(|g| GenreId::new(*g)).collect(),
    }
}

/// `n` books titled `Book 0..n`, authors and genres assigned round-robin.
pub fn make_catalog(n: usize) -> Catalog {
    let mut catalog = Catalog::default();
    for (id, name) in AUTHORS {
        catalog.authors.insert(AuthorId::new(id), name.to_string());
    }
    for (id, name) in GENRES {
        catalog.genres.insert(GenreId::new(id), name.to_string());
    }
    for i in 0..n {
        let author = AUTHORS[i % AUTHORS.len()].0;
        let genre = GENRES[i % GENRES.len()].0;
        catalog.books.push(make_book(
            &format!("book-{i}"),
            &format!("Book {i}"),
            author,
            1960 + i as i32,
            &[genre],
        ));
    }
    catalog
}

pub fn make_context(catalog: Catalog, page_size: usize) -> AppContext {
    let settings = Settings {
        page_size,
        ..Settings::default()
    };
    AppContext::new(settings, catalog, SystemPreference::NoPreference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_catalog_with_resolvable_authors() {
        let catalog = make_catalog(7);
        assert_eq!(catalog.books.len(), 7);
        for book in &catalog.books {
            assert!(catalog.authors.contains_key(&book.author));
        }
        assert_eq!(catalog.books[3].published_year(), 1963);
    }
}
