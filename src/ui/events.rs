//! Key handling for the TUI
//!
//! Handlers only mutate screen state and report what the app has to do
//! next; requests and navigation are carried out by [`super::App`].

use super::state::{DetailScreen, Focus, Screen, SearchScreen};
use crate::controller::{DetailRequest, DetailView, SearchRequest, SearchView};
use crate::route::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Follow-up work requested by a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do beyond redrawing
    None,
    /// Run a search in the background
    Search(SearchRequest),
    /// Run a detail fetch in the background
    Detail(DetailRequest),
    /// Unmount the current screen and mount the one for this route
    Navigate(Route),
    /// Leave the application
    Quit,
}

impl From<Option<SearchRequest>> for Effect {
    fn from(request: Option<SearchRequest>) -> Self {
        request.map_or(Self::None, Self::Search)
    }
}

/// Handle a key on the mounted screen
pub fn handle_key(screen: &mut Screen, key: KeyEvent) -> Effect {
    if key.kind == KeyEventKind::Release {
        return Effect::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Effect::Quit;
    }

    match screen {
        Screen::Search(search) => handle_search_key(search, key),
        Screen::Detail(detail) => handle_detail_key(detail, key),
    }
}

fn handle_search_key(screen: &mut SearchScreen, key: KeyEvent) -> Effect {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::F(5) => return screen.controller.retry().into(),
        KeyCode::Char('r') if ctrl => return screen.controller.retry().into(),
        KeyCode::PageUp => return previous_page(screen),
        KeyCode::PageDown => return next_page(screen),
        _ => {}
    }

    match screen.focus {
        Focus::Input => handle_input_key(screen, key),
        Focus::Results => handle_results_key(screen, key),
    }
}

fn handle_input_key(screen: &mut SearchScreen, key: KeyEvent) -> Effect {
    let loading = screen.controller.session().loading;

    match key.code {
        KeyCode::Esc => Effect::Quit,
        KeyCode::Enter if !loading => submit(screen),
        KeyCode::Down | KeyCode::Tab => {
            if screen.row_count() > 0 || matches!(screen.controller.view(), SearchView::Failed(_)) {
                screen.focus = Focus::Results;
            }
            Effect::None
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !loading {
                screen.input.set("");
            }
            Effect::None
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) && !loading => {
            screen.input.push(c);
            Effect::None
        }
        KeyCode::Backspace if !loading => {
            screen.input.backspace();
            Effect::None
        }
        KeyCode::Delete if !loading => {
            screen.input.delete();
            Effect::None
        }
        KeyCode::Left => {
            screen.input.left();
            Effect::None
        }
        KeyCode::Right => {
            screen.input.right();
            Effect::None
        }
        KeyCode::Home => {
            screen.input.home();
            Effect::None
        }
        KeyCode::End => {
            screen.input.end();
            Effect::None
        }
        _ => Effect::None,
    }
}

fn handle_results_key(screen: &mut SearchScreen, key: KeyEvent) -> Effect {
    match key.code {
        KeyCode::Up if screen.cursor == 0 => {
            screen.focus = Focus::Input;
            Effect::None
        }
        KeyCode::Up => {
            screen.cursor_up();
            Effect::None
        }
        KeyCode::Down => {
            screen.cursor_down();
            Effect::None
        }
        KeyCode::Left => previous_page(screen),
        KeyCode::Right => next_page(screen),
        KeyCode::Enter => activate(screen),
        KeyCode::Char('r') => screen.controller.retry().into(),
        KeyCode::Char('q') => Effect::Quit,
        KeyCode::Esc | KeyCode::Tab | KeyCode::Char('/') => {
            screen.focus = Focus::Input;
            Effect::None
        }
        _ => Effect::None,
    }
}

pub(super) fn submit(screen: &mut SearchScreen) -> Effect {
    let request = screen.controller.submit_query(screen.input.text());
    if request.is_some() {
        screen.focus = Focus::Results;
    }
    request.into()
}

/// Enter on the list: open a food, run a suggestion or retry after a failure
fn activate(screen: &mut SearchScreen) -> Effect {
    if let Some(food) = screen.selected_food() {
        return Effect::Navigate(Route::food(food.fdc_id.clone()));
    }
    if let Some(suggestion) = screen.selected_suggestion() {
        screen.input.set(suggestion);
        return submit(screen);
    }
    if matches!(screen.controller.view(), SearchView::Failed(_)) {
        return screen.controller.retry().into();
    }
    Effect::None
}

fn previous_page(screen: &mut SearchScreen) -> Effect {
    let target = match screen.controller.view() {
        SearchView::Results { pagination: Some(window), .. } => window.previous(),
        _ => None,
    };
    target
        .and_then(|page| screen.controller.change_page(page))
        .into()
}

fn next_page(screen: &mut SearchScreen) -> Effect {
    let target = match screen.controller.view() {
        SearchView::Results { pagination: Some(window), .. } => window.next(),
        _ => None,
    };
    target
        .and_then(|page| screen.controller.change_page(page))
        .into()
}

fn handle_detail_key(screen: &mut DetailScreen, key: KeyEvent) -> Effect {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => {
            Effect::Navigate(Route::Search)
        }
        KeyCode::Char('r') | KeyCode::F(5) | KeyCode::Enter
            if matches!(screen.controller.view(), DetailView::Failed(_)) =>
        {
            Effect::Detail(screen.controller.retry())
        }
        KeyCode::Char('q') => Effect::Quit,
        _ => Effect::None,
    }
}
