//! Session state, preview cards, and "show more" pagination.

use catalog_core::{BookId, Catalog};

/// Which books the user is browsing and how many pages have been revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub page: usize,
    pub matches: Vec<usize>,
}

impl Session {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            page: 1,
            matches: (0..catalog.len()).collect(),
        }
    }

    pub fn replace_matches(&mut self, matches: Vec<usize>) {
        self.matches = matches;
        self.page = 1;
    }

    pub fn remaining(&self, page_size: usize) -> usize {
        remaining(self.matches.len(), self.page, page_size)
    }
}

/// Matches not yet revealed after `page` pages.
pub fn remaining(match_count: usize, page: usize, page_size: usize) -> usize {
    match_count.saturating_sub(page.saturating_mul(page_size))
}

pub fn show_more_label(remaining: usize) -> String {
    format!("Show more ({remaining})")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCard {
    pub key: BookId,
    pub image: String,
    pub title: String,
    pub author_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewList {
    cards: Vec<PreviewCard>,
}

impl PreviewList {
    pub fn cards(&self) -> &[PreviewCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&PreviewCard> {
        self.cards.get(idx)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Appends cards for `matches[start..end]`, clamped to the match list.
    pub fn render_slice(
        &mut self,
        catalog: &Catalog,
        matches: &[usize],
        start: usize,
        end: usize,
    ) -> usize {
        let end = end.min(matches.len());
        let start = start.min(end);
        let before = self.cards.len();
        self.cards.extend(
            matches[start..end]
                .iter()
                .filter_map(|idx| catalog.books.get(*idx))
                .map(|book| PreviewCard {
                    key: book.id.clone(),
                    image: book.image.clone(),
                    title: book.title.clone(),
                    author_name: catalog.author_name(&book.author).to_string(),
                }),
        );
        self.cards.len() - before
    }
}

#[cfg(test)]
mod tests {
    use catalog_core::{AuthorId, Book};

    use super::*;

    fn catalog(n: usize) -> Catalog {
        let mut catalog = Catalog::default();
        catalog
            .authors
            .insert(AuthorId::new("a"), "Octavia Butler".to_string());
        for i in 0..n {
            catalog.books.push(Book {
                id: BookId::new(format!("book-{i}")),
                title: format!("Book {i}"),
                author: AuthorId::new("a"),
                image: format!("https://covers.example/{i}.jpg"),
                description: String::new(),
                published: "1980-01-01T00:00:00Z".parse().unwrap(),
                genres: Vec::new(),
            });
        }
        catalog
    }

    #[test]
    fn remaining_never_negative() {
        assert_eq!(remaining(5, 1, 2), 3);
        assert_eq!(remaining(5, 3, 2), 0);
        assert_eq!(remaining(0, 1, 36), 0);
        assert_eq!(remaining(3, usize::MAX, 2), 0);
    }

    #[test]
    fn render_slice_clamps_and_appends() {
        let catalog = catalog(5);
        let session = Session::new(&catalog);
        let mut list = PreviewList::default();

        assert_eq!(list.render_slice(&catalog, &session.matches, 0, 2), 2);
        assert_eq!(list.render_slice(&catalog, &session.matches, 2, 4), 2);
        assert_eq!(list.render_slice(&catalog, &session.matches, 4, 6), 1);
        assert_eq!(list.render_slice(&catalog, &session.matches, 6, 8), 0);

        let keys: Vec<&str> = list.cards().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["book-0", "book-1", "book-2", "book-3", "book-4"]);
    }

    #[test]
    fn cards_carry_resolved_author_name() {
        let catalog = catalog(1);
        let mut list = PreviewList::default();
        list.render_slice(&catalog, &[0], 0, 1);
        let card = list.get(0).unwrap();
        assert_eq!(card.author_name, "Octavia Butler");
        assert_eq!(card.image, "https://covers.example/0.jpg");
        assert_eq!(card.title, "Book 0");
    }

    #[test]
    fn replacing_matches_resets_page() {
        let catalog = catalog(4);
        let mut session = Session::new(&catalog);
        session.page = 3;
        session.replace_matches(vec![1, 3]);
        assert_eq!(session.page, 1);
        assert_eq!(session.matches, vec![1, 3]);
    }

    #[test]
    fn label_shows_count() {
        assert_eq!(show_more_label(12), "Show more (12)");
    }
}
