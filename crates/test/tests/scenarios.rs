use catalog_application::{SearchFilters, SystemPreference, apply_preference};
use catalog_core::{BookId, Rgb, Theme};
use catalog_test::{make_book, make_catalog, make_context};

#[test]
fn five_books_two_per_page() {
    let ctx = make_context(make_catalog(5), 2);
    assert_eq!(ctx.previews.len(), 2);
    assert_eq!(ctx.remaining(), 3);
    assert!(ctx.show_more_enabled());
}

#[test]
fn rendered_count_after_n_show_more() {
    for len in [0usize, 1, 7, 12] {
        for page_size in [1usize, 3, 5] {
            let mut ctx = make_context(make_catalog(len), page_size);
            for n in 0..6 {
                assert_eq!(ctx.previews.len(), len.min((n + 1) * page_size));
                assert_eq!(ctx.show_more_enabled(), ctx.remaining() > 0);
                ctx.show_more();
            }
        }
    }
}

#[test]
fn no_match_empties_grid_and_shows_message() {
    let mut ctx = make_context(make_catalog(5), 2);
    ctx.submit_search(SearchFilters::from_form("zzz-no-match", "any", "any"));
    assert!(ctx.session.matches.is_empty());
    assert!(ctx.show_empty_message);
    assert!(ctx.previews.is_empty());
    assert_eq!(ctx.remaining(), 0);
    assert!(!ctx.show_more_enabled());
}

#[test]
fn default_filters_restore_full_catalog() {
    let mut ctx = make_context(make_catalog(9), 4);
    ctx.submit_search(SearchFilters::from_form("Book 3", "any", "any"));
    assert_eq!(ctx.match_count(), 1);

    ctx.submit_search(SearchFilters::from_form("", "any", "any"));
    assert_eq!(ctx.session.matches, (0..9).collect::<Vec<_>>());
}

#[test]
fn opening_known_key_fills_detail() {
    let mut catalog = make_catalog(3);
    catalog.books.push(make_book(
        "book-42",
        "The Dispossessed",
        "a-0",
        1974,
        &["g-1"],
    ));
    let ctx = make_context(catalog, 10);

    let view = ctx.open_detail(&BookId::new("book-42")).unwrap();
    assert_eq!(view.title, "The Dispossessed");
    assert_eq!(view.subtitle, "Ursula K. Le Guin (1974)");
    assert_eq!(view.description, "About The Dispossessed.");
    assert_eq!(view.image, "https://covers.example/book-42.jpg");
}

#[test]
fn opening_unknown_key_is_noop() {
    let ctx = make_context(make_catalog(3), 10);
    assert!(ctx.open_detail(&BookId::new("book-42")).is_none());
}

#[test]
fn night_theme_swaps_tokens() {
    let mut ctx = make_context(make_catalog(1), 1);
    ctx.apply_theme(Theme::Night);
    assert_eq!(ctx.theme.tokens.dark, Rgb(255, 255, 255));
    assert_eq!(ctx.theme.tokens.light, Rgb(10, 10, 20));
    assert_eq!(ctx.theme.selector_value(), "night");

    let system = apply_preference(None, SystemPreference::Dark);
    assert_eq!(system, ctx.theme);
}

#[test]
fn bundled_catalog_browses_end_to_end() {
    let catalog = catalog_storage::sample_catalog().unwrap();
    let total = catalog.books.len();
    let mut ctx = make_context(catalog, 3);

    ctx.submit_search(SearchFilters::from_form("the", "any", "any"));
    let titles: Vec<String> = ctx
        .session
        .matches
        .iter()
        .map(|idx| ctx.catalog.books[*idx].title.to_lowercase())
        .collect();
    assert!(!titles.is_empty());
    assert!(titles.iter().all(|t| t.contains("the")));
    assert!(ctx.match_count() < total);
}
