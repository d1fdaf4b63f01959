//! Application orchestration layer for the catalog browser.

mod detail;
mod filter;
mod overlay;
mod preview;
mod theme;

use catalog_core::{AuthorId, BookId, Catalog, GenreId, Settings, Theme};
use tracing::{debug, info};

pub use detail::DetailView;
pub use filter::{ANY, SearchFilters, Selection, filter_matches};
pub use overlay::{OptionEntry, Overlay, author_options, genre_options};
pub use preview::{PreviewCard, PreviewList, Session, remaining, show_more_label};
pub use theme::{AppliedTheme, SystemPreference, apply_preference, apply_selection};

#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub catalog: Catalog,
    pub session: Session,
    pub filters: SearchFilters,
    pub previews: PreviewList,
    pub show_empty_message: bool,
    pub theme: AppliedTheme,
    pub author_options: Vec<OptionEntry<AuthorId>>,
    pub genre_options: Vec<OptionEntry<GenreId>>,
}

impl AppContext {
    /// Builds option lists, applies the theme preference and renders the first page.
    pub fn new(mut settings: Settings, catalog: Catalog, system: SystemPreference) -> Self {
        settings.normalize();
        let session = Session::new(&catalog);
        let theme = apply_preference(settings.theme, system);
        let author_options = author_options(&catalog);
        let genre_options = genre_options(&catalog);

        let mut ctx = Self {
            settings,
            catalog,
            session,
            filters: SearchFilters::default(),
            previews: PreviewList::default(),
            show_empty_message: false,
            theme,
            author_options,
            genre_options,
        };
        ctx.render_first_page();
        info!(
            books = ctx.catalog.len(),
            page_size = ctx.page_size(),
            theme = %ctx.theme.theme,
            "catalog ready"
        );
        ctx
    }

    pub fn page_size(&self) -> usize {
        self.settings.page_size
    }

    pub fn remaining(&self) -> usize {
        self.session.remaining(self.page_size())
    }

    pub fn show_more_enabled(&self) -> bool {
        self.remaining() > 0
    }

    pub fn show_more_label(&self) -> String {
        show_more_label(self.remaining())
    }

    pub fn match_count(&self) -> usize {
        self.session.matches.len()
    }

    /// Replaces the matches, resets to page 1 and re-renders from the first card.
    pub fn submit_search(&mut self, filters: SearchFilters) -> usize {
        let matches = filter_matches(&self.catalog, &filters);
        self.session.replace_matches(matches);
        self.filters = filters;
        self.show_empty_message = self.session.matches.is_empty();
        self.previews.clear();
        self.render_first_page();
        debug!(
            title = %self.filters.title,
            matches = self.match_count(),
            rendered = self.previews.len(),
            "search submitted"
        );
        self.match_count()
    }

    /// Appends the next page of cards; returns how many were added.
    pub fn show_more(&mut self) -> usize {
        if !self.show_more_enabled() {
            return 0;
        }
        let page_size = self.page_size();
        let start = self.session.page * page_size;
        let added = self.previews.render_slice(
            &self.catalog,
            &self.session.matches,
            start,
            start + page_size,
        );
        self.session.page += 1;
        debug!(
            page = self.session.page,
            added,
            remaining = self.remaining(),
            "show more"
        );
        added
    }

    pub fn open_detail(&self, key: &BookId) -> Option<DetailView> {
        let view = DetailView::lookup(&self.catalog, key);
        if view.is_none() {
            debug!(%key, "preview key not in catalog");
        }
        view
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = apply_selection(theme);
        info!(theme = %theme, "theme applied");
    }

    fn render_first_page(&mut self) {
        let page_size = self.page_size();
        self.previews
            .render_slice(&self.catalog, &self.session.matches, 0, page_size);
    }
}
