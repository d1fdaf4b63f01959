//! ratatui-based UI.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Context as _;
use catalog_application::{
    AppContext, DetailView, OptionEntry, Overlay, SearchFilters, Selection,
};
use catalog_core::{BookId, Rgb, Theme};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

mod grid;
use grid::{CARD_HEIGHT, GridState};

const EMPTY_MESSAGE: &str = "No results found. Your filters might be too narrow.";

pub struct Ui {
    ctx: AppContext,
    search_panel: SearchPanel,
    settings_panel: SettingsPanel,
    detail_panel: DetailPanel,
    grid: GridState,
}

impl Ui {
    pub fn new(ctx: AppContext) -> Self {
        let settings_panel = SettingsPanel {
            overlay: Overlay::default(),
            selected: ctx.theme.theme,
        };
        Self {
            ctx,
            search_panel: SearchPanel::default(),
            settings_panel,
            detail_panel: DetailPanel::default(),
            grid: GridState::default(),
        }
    }

    /// Runs until the user quits and hands back the final session state.
    pub fn run(mut self) -> anyhow::Result<AppContext> {
        let mut terminal = setup_terminal()?;
        terminal.clear().ok();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            self.event_loop(&mut terminal)
        }));
        let restore_result = restore_terminal(&mut terminal);

        match (result, restore_result) {
            (Ok(Ok(())), Ok(())) => Ok(self.ctx),
            (Ok(Ok(_)), Err(err)) => Err(err),
            (Ok(Err(err)), _) => Err(err),
            (Err(panic), Ok(())) => Err(anyhow::anyhow!(panic_to_string(panic))),
            (Err(panic), Err(err)) => Err(anyhow::anyhow!(
                "{}\n(additionally failed to restore terminal: {err})",
                panic_to_string(panic)
            )),
        }
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> anyhow::Result<()> {
        let tick_rate = Duration::from_millis(250);
        let mut needs_redraw = true;

        loop {
            if needs_redraw {
                terminal.draw(|frame| self.draw(frame.area(), frame))?;
                needs_redraw = false;
            }

            if !event::poll(tick_rate)? {
                continue;
            }

            match event::read()? {
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }

                    needs_redraw = true;
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }

    /// Returns `true` when the key asks to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.settings_panel.overlay.is_open() {
            self.handle_settings_panel_key(key)
        } else if self.search_panel.overlay.is_open() {
            self.handle_search_panel_key(key)
        } else if self.detail_panel.overlay.is_open() {
            self.handle_detail_panel_key(key)
        } else {
            self.handle_main_key(key)
        }
    }

    fn handle_main_key(&mut self, key: KeyEvent) -> bool {
        let len = self.ctx.previews.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => true,
            KeyCode::Char('/') => {
                self.open_search_panel();
                false
            }
            KeyCode::Char('s') => {
                self.open_settings_panel();
                false
            }
            KeyCode::Char('m') => {
                self.ctx.show_more();
                false
            }
            KeyCode::Enter => {
                self.open_selected_detail();
                false
            }
            KeyCode::Left => {
                self.grid.move_left();
                false
            }
            KeyCode::Right => {
                self.grid.move_right(len);
                false
            }
            KeyCode::Up => {
                self.grid.move_up();
                false
            }
            KeyCode::Down => {
                self.grid.move_down(len);
                false
            }
            _ => false,
        }
    }

    fn open_search_panel(&mut self) {
        self.search_panel.overlay.activate_trigger();
        self.search_panel.focus = SearchFocus::Title;
    }

    fn open_settings_panel(&mut self) {
        self.settings_panel.overlay.activate_trigger();
        self.settings_panel.selected = self.ctx.theme.theme;
    }

    fn open_selected_detail(&mut self) {
        let Some(key) = self
            .ctx
            .previews
            .get(self.grid.selected)
            .map(|card| card.key.clone())
        else {
            return;
        };
        self.open_detail(&key);
    }

    fn open_detail(&mut self, key: &BookId) {
        let Some(view) = self.ctx.open_detail(key) else {
            return;
        };
        debug!(%key, "detail opened");
        self.detail_panel.view = Some(view);
        self.detail_panel.overlay.activate_trigger();
    }

    fn handle_detail_panel_key(&mut self, key: KeyEvent) -> bool {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            self.detail_panel.overlay.activate_cancel();
        }
        false
    }

    fn handle_search_panel_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && let KeyCode::Char('u') = key.code
        {
            self.search_panel.title.clear();
            self.search_panel.author_cursor = 0;
            self.search_panel.genre_cursor = 0;
            return false;
        }

        match key.code {
            KeyCode::Esc => {
                self.search_panel.overlay.activate_cancel();
                false
            }
            KeyCode::Enter => {
                self.submit_search_panel();
                false
            }
            KeyCode::Tab | KeyCode::Down => {
                self.search_panel.focus = self.search_panel.focus.next();
                false
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.search_panel.focus = self.search_panel.focus.prev();
                false
            }
            KeyCode::Left => {
                self.cycle_search_option(false);
                false
            }
            KeyCode::Right => {
                self.cycle_search_option(true);
                false
            }
            KeyCode::Backspace => {
                if self.search_panel.focus == SearchFocus::Title {
                    self.search_panel.title.pop();
                }
                false
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.search_panel.focus == SearchFocus::Title && !ch.is_control() {
                    self.search_panel.title.push(ch);
                }
                false
            }
            _ => false,
        }
    }

    fn cycle_search_option(&mut self, forward: bool) {
        let (cursor, len) = match self.search_panel.focus {
            SearchFocus::Title => return,
            SearchFocus::Author => (
                &mut self.search_panel.author_cursor,
                self.ctx.author_options.len(),
            ),
            SearchFocus::Genre => (
                &mut self.search_panel.genre_cursor,
                self.ctx.genre_options.len(),
            ),
        };
        if len == 0 {
            return;
        }
        *cursor = if forward {
            (*cursor + 1) % len
        } else {
            (*cursor + len - 1) % len
        };
    }

    fn search_panel_filters(&self) -> SearchFilters {
        SearchFilters {
            title: self.search_panel.title.clone(),
            author: self
                .ctx
                .author_options
                .get(self.search_panel.author_cursor)
                .map(|option| option.value.clone())
                .unwrap_or_default(),
            genre: self
                .ctx
                .genre_options
                .get(self.search_panel.genre_cursor)
                .map(|option| option.value.clone())
                .unwrap_or_default(),
        }
    }

    fn submit_search_panel(&mut self) {
        let filters = self.search_panel_filters();
        self.ctx.submit_search(filters);
        self.grid.reset();
        self.search_panel.overlay.activate_cancel();
    }

    fn handle_settings_panel_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.settings_panel.overlay.activate_cancel();
                false
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Char(' ') => {
                self.settings_panel.selected = self.settings_panel.selected.toggled();
                false
            }
            KeyCode::Enter => {
                self.ctx.apply_theme(self.settings_panel.selected);
                self.settings_panel.overlay.activate_cancel();
                false
            }
            _ => false,
        }
    }

    fn base_style(&self) -> Style {
        let tokens = self.ctx.theme.tokens;
        Style::default().fg(rgb(tokens.dark)).bg(rgb(tokens.light))
    }

    fn accent_color(&self) -> Color {
        match self.ctx.theme.theme {
            Theme::Day => Color::Blue,
            Theme::Night => Color::Yellow,
        }
    }

    fn option_label<T: PartialEq>(
        options: &[OptionEntry<T>],
        value: &Selection<T>,
    ) -> String {
        options
            .iter()
            .find(|option| &option.value == value)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| "?".to_string())
    }

    fn main_header_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled("Catalog", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" — browse"),
        ])];

        let filters = &self.ctx.filters;
        if !filters.is_empty() {
            let title = if filters.title.trim().is_empty() {
                "-".to_string()
            } else {
                filters.title.trim().to_string()
            };
            lines.push(Line::raw(format!(
                "title:{title}  author:{}  genre:{}",
                Self::option_label(&self.ctx.author_options, &filters.author),
                Self::option_label(&self.ctx.genre_options, &filters.genre),
            )));
        }

        lines
    }

    fn main_footer_lines(&self) -> Vec<Line<'static>> {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        vec![Line::from(vec![
            Span::styled("Esc", bold),
            Span::raw(" quit  "),
            Span::styled("←↑↓→", bold),
            Span::raw(" move  "),
            Span::styled("Enter", bold),
            Span::raw(" details  "),
            Span::styled("m", bold),
            Span::raw(" show more  "),
            Span::styled("/", bold),
            Span::raw(" search  "),
            Span::styled("s", bold),
            Span::raw(" settings"),
        ])]
    }

    fn draw(&mut self, area: Rect, frame: &mut ratatui::Frame) {
        let base = self.base_style();
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(base), area);

        let regions = Regions::split(area);

        let header = Paragraph::new(Text::from(self.main_header_lines()))
            .alignment(Alignment::Center)
            .style(base)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, regions.header);

        self.draw_previews(regions.list, frame);
        self.draw_show_more(regions.control, frame);

        let footer = Paragraph::new(Text::from(self.main_footer_lines()))
            .alignment(Alignment::Center)
            .style(base)
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(footer, regions.footer);

        if self.detail_panel.overlay.is_open() {
            self.draw_detail_panel(area, frame);
        }

        if self.search_panel.overlay.is_open() {
            self.draw_search_panel(area, frame);
        }

        if self.settings_panel.overlay.is_open() {
            self.draw_settings_panel(area, frame);
        }
    }

    fn draw_previews(&mut self, area: Rect, frame: &mut ratatui::Frame) {
        let base = self.base_style();
        let shown = self.ctx.previews.len();
        let title = format!("Library — {shown} of {} shown", self.ctx.match_count());
        let block = Block::default().borders(Borders::ALL).title(title).style(base);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.ctx.show_empty_message || self.ctx.previews.is_empty() {
            let message = if self.ctx.show_empty_message {
                EMPTY_MESSAGE
            } else {
                "The catalog is empty."
            };
            let paragraph = Paragraph::new(Line::raw(message))
                .alignment(Alignment::Center)
                .style(base)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, inner);
            return;
        }

        self.grid.set_columns(inner.width);
        self.grid.clamp(shown);
        let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
        self.grid.ensure_visible(visible_rows);

        let columns = self.grid.columns;
        let card_width = inner.width / columns as u16;
        let accent = Style::default()
            .fg(self.accent_color())
            .add_modifier(Modifier::BOLD);
        let last_row = self.grid.row_count(shown).min(self.grid.scroll_row + visible_rows);

        for (screen_row, row) in (self.grid.scroll_row..last_row).enumerate() {
            let y = inner.y + screen_row as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(inner.bottom().saturating_sub(y));
            if height < 3 {
                break;
            }
            for col in 0..columns {
                let idx = row * columns + col;
                let Some(card) = self.ctx.previews.get(idx) else {
                    break;
                };
                let rect = Rect {
                    x: inner.x + col as u16 * card_width,
                    y,
                    width: card_width,
                    height,
                };
                let text_width = usize::from(card_width.saturating_sub(2));
                let lines = vec![
                    Line::styled(
                        fit_width(&card.title, text_width),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Line::raw(fit_width(&card.author_name, text_width)),
                    Line::styled(
                        fit_width(&card.image, text_width),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                ];
                let border_style = if idx == self.grid.selected {
                    accent
                } else {
                    Style::default()
                };
                let widget = Paragraph::new(Text::from(lines)).style(base).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
                frame.render_widget(widget, rect);
            }
        }
    }

    fn draw_show_more(&self, area: Rect, frame: &mut ratatui::Frame) {
        let button_style = if self.ctx.show_more_enabled() {
            Style::default()
                .fg(self.accent_color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let line = Line::from(Span::styled(
            format!("[ {} ]", self.ctx.show_more_label()),
            button_style,
        ));
        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(self.base_style());
        frame.render_widget(paragraph, area);
    }

    fn draw_detail_panel(&self, area: Rect, frame: &mut ratatui::Frame) {
        let Some(view) = &self.detail_panel.view else {
            return;
        };
        let popup_area = centered_rect(80, 70, area);
        frame.render_widget(Clear, popup_area);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(view.title.clone(), bold))
            .style(self.base_style());
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let width = usize::from(inner.width);
        let mut backdrop_text = fit_width(&format!("░ {} ", view.backdrop_image), width);
        let fill = width.saturating_sub(backdrop_text.width());
        backdrop_text.push_str(&"░".repeat(fill));
        let backdrop = Paragraph::new(Line::styled(
            backdrop_text,
            Style::default().add_modifier(Modifier::DIM),
        ));
        frame.render_widget(backdrop, sections[0]);
        let image = Paragraph::new(Line::from(vec![
            Span::styled("Cover: ", bold),
            Span::raw(fit_width(&view.image, usize::from(inner.width.saturating_sub(7)))),
        ]));
        frame.render_widget(image, sections[1]);

        let mut lines = vec![Line::raw(""), Line::styled(view.subtitle.clone(), bold)];
        if !view.genres.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Genres: ", bold),
                Span::raw(view.genres.join(", ")),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::raw(view.description.clone()));
        let body = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true });
        frame.render_widget(body, sections[2]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Esc", bold),
            Span::raw(" close"),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help, sections[3]);
    }

    fn draw_search_panel(&self, area: Rect, frame: &mut ratatui::Frame) {
        let popup_area = centered_rect(70, 40, area);
        frame.render_widget(Clear, popup_area);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Search", bold))
            .style(self.base_style());
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(inner);

        let focus_style = Style::default()
            .fg(self.accent_color())
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let label = |text: &'static str, focus: SearchFocus| {
            if self.search_panel.focus == focus {
                Span::styled(text, focus_style)
            } else {
                Span::styled(text, bold)
            }
        };

        let mut title = self.search_panel.title.clone();
        if self.search_panel.focus == SearchFocus::Title {
            title.push('▏');
        }
        let author = self
            .ctx
            .author_options
            .get(self.search_panel.author_cursor)
            .map(|option| option.label.clone())
            .unwrap_or_default();
        let genre = self
            .ctx
            .genre_options
            .get(self.search_panel.genre_cursor)
            .map(|option| option.label.clone())
            .unwrap_or_default();

        let lines = vec![
            Line::from(vec![label("Title: ", SearchFocus::Title), Span::raw(title)]),
            Line::raw(""),
            Line::from(vec![
                label("Author: ", SearchFocus::Author),
                Span::raw(format!("‹ {author} ›")),
            ]),
            Line::raw(""),
            Line::from(vec![
                label("Genre: ", SearchFocus::Genre),
                Span::raw(format!("‹ {genre} ›")),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }),
            sections[0],
        );

        let help_lines = vec![
            Line::from(vec![
                Span::styled("Tab", bold),
                Span::raw(" field  "),
                Span::styled("←/→", bold),
                Span::raw(" choose  "),
                Span::styled("Ctrl+u", bold),
                Span::raw(" clear"),
            ]),
            Line::from(vec![
                Span::styled("Esc", bold),
                Span::raw(" cancel  "),
                Span::styled("Enter", bold),
                Span::raw(" search"),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(Text::from(help_lines)).wrap(Wrap { trim: true }),
            sections[1],
        );
    }

    fn draw_settings_panel(&self, area: Rect, frame: &mut ratatui::Frame) {
        let popup_area = centered_rect(45, 30, area);
        frame.render_widget(Clear, popup_area);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Settings", bold))
            .style(self.base_style());
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(inner);

        let selected = self.settings_panel.selected;
        let row = Line::from(vec![
            Span::styled("Theme: ", bold),
            option_chip("day", selected == Theme::Day),
            Span::raw(" "),
            option_chip("night", selected == Theme::Night),
        ]);
        frame.render_widget(Paragraph::new(row), sections[0]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("←/→", bold),
            Span::raw(" choose  "),
            Span::styled("Enter", bold),
            Span::raw(" save  "),
            Span::styled("Esc", bold),
            Span::raw(" cancel"),
        ]))
        .wrap(Wrap { trim: true });
        frame.render_widget(help, sections[1]);
    }
}

/// Named screen areas, resolved once per frame.
struct Regions {
    header: Rect,
    list: Rect,
    control: Rect,
    footer: Rect,
}

impl Regions {
    fn split(area: Rect) -> Self {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .split(area);
        Self {
            header: layout[0],
            list: layout[1],
            control: layout[2],
            footer: layout[3],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchFocus {
    Title,
    Author,
    Genre,
}

impl SearchFocus {
    fn next(self) -> Self {
        match self {
            SearchFocus::Title => SearchFocus::Author,
            SearchFocus::Author => SearchFocus::Genre,
            SearchFocus::Genre => SearchFocus::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            SearchFocus::Title => SearchFocus::Genre,
            SearchFocus::Author => SearchFocus::Title,
            SearchFocus::Genre => SearchFocus::Author,
        }
    }
}

#[derive(Debug, Clone)]
struct SearchPanel {
    overlay: Overlay,
    focus: SearchFocus,
    title: String,
    author_cursor: usize,
    genre_cursor: usize,
}

impl Default for SearchPanel {
    fn default() -> Self {
        Self {
            overlay: Overlay::default(),
            focus: SearchFocus::Title,
            title: String::new(),
            author_cursor: 0,
            genre_cursor: 0,
        }
    }
}

#[derive(Debug, Clone)]
struct SettingsPanel {
    overlay: Overlay,
    selected: Theme,
}

#[derive(Debug, Clone, Default)]
struct DetailPanel {
    overlay: Overlay,
    view: Option<DetailView>,
}

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    terminal::enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen).context("enter alt screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("create terminal")
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    terminal::disable_raw_mode().context("disable raw mode")?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("leave alt screen")?;
    Ok(())
}

fn panic_to_string(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("panic: {s}")
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("panic: {s}")
    } else {
        "panic: (unknown payload)".to_string()
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Truncates to `max_width` terminal columns, marking the cut with an ellipsis.
fn fit_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0usize;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}

fn option_chip(label: &str, selected: bool) -> Span<'static> {
    let style = if selected {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    Span::styled(label.to_string(), style)
}
