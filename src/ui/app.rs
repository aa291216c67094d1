//! TUI application: screen lifecycle, event loop and rendering

use super::error::{Result, UiError};
use super::events::{self, Effect};
use super::state::{DetailScreen, Focus, Screen, SearchScreen};
use super::theme::Theme;
use super::widgets::{
    ErrorView, FoodDetailCard, FoodList, HelpBar, HelpOverlay, KeyHint, LoadingView, Notice,
    PaginationBar, SearchBar, WelcomeView,
};
use crate::api::FoodApi;
use crate::controller::{DetailController, DetailView, SUGGESTED_QUERIES, SearchView};
use crate::route::Route;
use crate::worker::{Completion, Fetcher};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, info_span};

/// How long to wait for input before polling for completions again
const POLL_INTERVAL: Duration = Duration::from_millis(80);

const SEARCH_INPUT_HINTS: [KeyHint; 4] = [
    KeyHint::new("Enter", "search"),
    KeyHint::new("↓", "results"),
    KeyHint::new("F1", "help"),
    KeyHint::new("Esc", "quit"),
];

const SEARCH_LIST_HINTS: [KeyHint; 6] = [
    KeyHint::new("↑/↓", "select"),
    KeyHint::new("Enter", "open"),
    KeyHint::new("←/→", "page"),
    KeyHint::new("/", "edit query"),
    KeyHint::new("F1", "help"),
    KeyHint::new("q", "quit"),
];

const DETAIL_HINTS: [KeyHint; 3] = [
    KeyHint::new("Esc", "back"),
    KeyHint::new("F1", "help"),
    KeyHint::new("q", "quit"),
];

const SEARCH_ERROR_ACTIONS: [(&str, &str); 2] = [("r / F5", "Try Again"), ("/", "Edit query")];
const DETAIL_ERROR_ACTIONS: [(&str, &str); 2] = [("r", "Try Again"), ("Esc", "Back to Search")];

/// Interactive food browser
pub struct App {
    fetcher: Fetcher,
    screen: Screen,
    theme: Theme,
    show_help: bool,
    tick: usize,
}

impl App {
    /// Create the app on the search screen
    #[must_use]
    pub fn new(api: Arc<dyn FoodApi>) -> Self {
        Self {
            fetcher: Fetcher::new(api),
            screen: Screen::Search(SearchScreen::new()),
            theme: Theme::default(),
            show_help: false,
            tick: 0,
        }
    }

    /// The mounted screen
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Mount `route`; on the search screen, `query` is submitted right away
    pub fn start(&mut self, route: Route, query: Option<&str>) {
        self.navigate(route);

        let effect = match (&mut self.screen, query) {
            (Screen::Search(search), Some(query)) => {
                search.input.set(query);
                events::submit(search)
            }
            _ => Effect::None,
        };
        self.apply(effect);
    }

    /// Mount the screen for `route`
    ///
    /// A detail route reached from the detail screen reuses the mounted
    /// controller, which refetches only when the identifier changes.
    pub fn navigate(&mut self, route: Route) {
        info!(%route, "navigating");
        if let (Screen::Detail(detail), Route::Detail(fdc_id)) = (&mut self.screen, &route) {
            if let Some(request) = detail.controller.navigate(fdc_id.clone()) {
                self.fetcher.detail(request);
            }
            return;
        }

        self.screen = match route {
            Route::Search => Screen::Search(SearchScreen::new()),
            Route::Detail(fdc_id) => {
                let (controller, request) = DetailController::mount(fdc_id);
                self.fetcher.detail(request);
                Screen::Detail(DetailScreen { controller })
            }
        };
    }

    /// Carry out an effect; returns `false` when the app should exit
    pub fn apply(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::None => {}
            Effect::Search(request) => self.fetcher.search(request),
            Effect::Detail(request) => self.fetcher.detail(request),
            Effect::Navigate(route) => self.navigate(route),
            Effect::Quit => return false,
        }
        true
    }

    /// Handle a key press; returns `false` when the app should exit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return true;
        }

        let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if self.show_help && !ctrl_c {
            self.show_help = false;
            return true;
        }
        if key.code == KeyCode::F(1) {
            self.show_help = true;
            return true;
        }

        let effect = events::handle_key(&mut self.screen, key);
        self.apply(effect)
    }

    /// Hand a finished request to the screen that issued it
    ///
    /// Completions for a screen that has since been left are dropped.
    pub fn apply_completion(&mut self, completion: Completion) {
        match (completion, &mut self.screen) {
            (Completion::Search(request, outcome), Screen::Search(search)) => {
                search.controller.complete_search(&request, outcome);
                if search.controller.take_scroll_to_top() {
                    search.scroll_to_top();
                }
                if search.row_count() == 0
                    && !matches!(search.controller.view(), SearchView::Failed(_))
                {
                    search.focus = Focus::Input;
                }
            }
            (Completion::Detail(request, outcome), Screen::Detail(detail)) => {
                detail.controller.complete_detail(&request, outcome);
            }
            (completion, _) => debug!(?completion, "dropping response for an unmounted screen"),
        }
    }

    /// Apply every completion that has arrived so far
    pub fn drain_completions(&mut self) {
        while let Some(completion) = self.fetcher.try_recv() {
            self.apply_completion(completion);
        }
    }

    /// Take over the terminal and run until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be set up or an event
    /// cannot be read. The terminal is restored in either case.
    pub fn run(mut self) -> Result<()> {
        let _span = info_span!("tui").entered();
        let mut terminal = Self::setup_terminal()?;

        let outcome = self.run_loop(&mut terminal);
        let restored = Self::cleanup_terminal();
        outcome.and(restored)
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            self.drain_completions();
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if !self.handle_key(key) {
                        info!("quitting");
                        return Ok(());
                    }
                }
            }
            self.tick = self.tick.wrapping_add(1);
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| UiError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match &mut self.screen {
            Screen::Search(search) => render_search(frame, area, search, &self.theme, self.tick),
            Screen::Detail(detail) => render_detail(frame, area, detail, &self.theme, self.tick),
        }

        if self.show_help {
            frame.render_widget(HelpOverlay::new(&self.theme), area);
        }
    }
}

fn render_search(frame: &mut Frame, area: Rect, screen: &mut SearchScreen, theme: &Theme, tick: usize) {
    let pagination = match screen.controller.view() {
        SearchView::Results { pagination, .. } => pagination,
        _ => None,
    };

    let [header, search_bar, main, pager, help] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(if pagination.is_some() { 3 } else { 0 }),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled("Food Information Search", theme.heading_style()),
            Line::styled(
                "Search for foods to view detailed nutritional information",
                theme.dimmed_style(),
            ),
        ])
        .alignment(Alignment::Center),
        header,
    );

    let input_focused = screen.focus == Focus::Input;
    frame.render_widget(
        SearchBar::new(screen.input.text(), screen.input.cursor(), theme)
            .focused(input_focused)
            .loading(screen.controller.session().loading),
        search_bar,
    );

    screen.visible_rows = FoodList::visible_rows(main).max(1);
    screen.adjust_scroll();

    match screen.controller.view() {
        SearchView::Loading => {
            frame.render_widget(LoadingView::new("Searching for foods...", tick, theme), main);
        }
        SearchView::Failed(message) => {
            frame.render_widget(ErrorView::new(message, &SEARCH_ERROR_ACTIONS, theme), main);
        }
        SearchView::Welcome => {
            let cursor = (!input_focused).then_some(screen.cursor);
            frame.render_widget(WelcomeView::new(&SUGGESTED_QUERIES, theme).cursor(cursor), main);
        }
        SearchView::Empty => {
            frame.render_widget(
                Notice::new("No foods found. Try a different search term!", theme),
                main,
            );
        }
        SearchView::Results { foods, total, .. } => {
            frame.render_widget(
                FoodList::new(foods, total, theme)
                    .cursor(screen.cursor, screen.scroll_offset)
                    .focused(!input_focused),
                main,
            );
        }
    }

    if let Some(window) = &pagination {
        frame.render_widget(PaginationBar::new(window, theme), pager);
    }

    let hints: &[KeyHint] = if input_focused {
        &SEARCH_INPUT_HINTS
    } else {
        &SEARCH_LIST_HINTS
    };
    frame.render_widget(HelpBar::new(hints, theme), help);
}

fn render_detail(frame: &mut Frame, area: Rect, screen: &DetailScreen, theme: &Theme, tick: usize) {
    let [back, main, help] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled("← Back to Search", theme.accent_style())),
        back,
    );

    match screen.controller.view() {
        DetailView::Loading => {
            frame.render_widget(LoadingView::new("Loading food details...", tick, theme), main);
        }
        DetailView::Failed(message) => {
            frame.render_widget(ErrorView::new(message, &DETAIL_ERROR_ACTIONS, theme), main);
        }
        DetailView::Loaded(food) => {
            frame.render_widget(FoodDetailCard::new(food, theme), main);
        }
        DetailView::Blank => {}
    }

    frame.render_widget(HelpBar::new(&DETAIL_HINTS, theme), help);
}
