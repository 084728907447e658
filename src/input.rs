//! Keyboard and mouse handling.
//!
//! Translates terminal events into application state changes for the
//! active screen.

use crate::api::DraftField;
use crate::app::{App, Route, Screen};
use crate::screens::form::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Handle a key press.
///
/// # Arguments
/// * `app` - Application state
/// * `key` - Key event (press events only)
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.screen {
        Screen::Directory(_) => handle_directory_key(app, key),
        Screen::Tickets(_) => handle_tickets_key(app, key),
        Screen::NewTicket(_) => handle_form_key(app, key),
    }
}

/// Keys shared by both list screens. Returns true if handled.
fn handle_list_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Char('n') => app.navigate(Route::NewTicket),
        KeyCode::Char('r') => app.reload(),
        _ => return false,
    }
    true
}

fn handle_directory_key(app: &mut App, key: KeyEvent) {
    if handle_list_key(app, key) {
        return;
    }
    if key.code == KeyCode::Enter {
        app.open_selected_company();
        return;
    }

    let columns = app.directory_columns();
    if let Screen::Directory(dir) = &mut app.screen {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => dir.move_left(),
            KeyCode::Right | KeyCode::Char('l') => dir.move_right(),
            KeyCode::Up | KeyCode::Char('k') => dir.move_up(columns),
            KeyCode::Down | KeyCode::Char('j') => dir.move_down(columns),
            _ => {}
        }
    }
}

fn handle_tickets_key(app: &mut App, key: KeyEvent) {
    if handle_list_key(app, key) {
        return;
    }
    if let Screen::Tickets(list) = &mut app.screen {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => list.move_up(),
            KeyCode::Down | KeyCode::Char('j') => list.move_down(),
            _ => {}
        }
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let Screen::NewTicket(form) = &mut app.screen else {
        return;
    };

    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.submit_ticket();
        return;
    }

    match key.code {
        KeyCode::Esc => {
            if form.notification.is_some() {
                form.dismiss_notification();
            } else {
                app.back();
            }
        }
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Enter => {
            let focus = form.focus;
            match focus {
                Focus::Submit => app.submit_ticket(),
                Focus::Field(DraftField::Description) => form.newline(),
                Focus::Field(_) => form.focus_next(),
            }
        }
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(ch)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            form.input_char(ch)
        }
        _ => {}
    }
}

/// Handle mouse events (scroll and click).
///
/// # Arguments
/// * `app` - Application state
/// * `mouse` - Mouse event
///
/// # Details
/// Scrolling moves the selection on list screens; a left click on a
/// directory card opens that company's tickets.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let columns = app.directory_columns();

    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        let hit = match &app.screen {
            Screen::Directory(dir) => dir.card_at(app.viewport, mouse.column, mouse.row),
            _ => None,
        };
        if let Some(index) = hit {
            if let Screen::Directory(dir) = &mut app.screen {
                dir.selected = index;
            }
            app.open_selected_company();
        }
        return;
    }

    match &mut app.screen {
        Screen::Directory(dir) => match mouse.kind {
            MouseEventKind::ScrollUp => dir.move_up(columns),
            MouseEventKind::ScrollDown => dir.move_down(columns),
            _ => {}
        },
        Screen::Tickets(list) => match mouse.kind {
            MouseEventKind::ScrollUp => list.move_up(),
            MouseEventKind::ScrollDown => list.move_down(),
            _ => {}
        },
        Screen::NewTicket(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::settle;
    use crate::screens::test_support::{MockApi, company, ticket};
    use ratatui::layout::Rect;
    use std::sync::Arc;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn test_api() -> Arc<MockApi> {
        Arc::new(MockApi {
            companies: vec![
                company("1", "Acme", true),
                company("2", "Globex", false),
                company("3", "Initech", true),
            ],
            tickets: vec![ticket("10", "Printer", "open"), ticket("11", "VPN", "closed")],
            ..MockApi::default()
        })
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_key(app, key(KeyCode::Char(ch)));
        }
    }

    fn open_and_submit(app: &mut App) {
        handle_key(app, key(KeyCode::Char('n')));
        type_text(app, "a@b.com");
        handle_key(app, key(KeyCode::Tab));
        type_text(app, "T");
        handle_key(app, key(KeyCode::Tab));
        type_text(app, "D");
        handle_key(app, ctrl('s'));
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = App::new(test_api(), Route::Directory, Duration::from_secs(5));
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit());

        let mut app = App::new(test_api(), Route::NewTicket, Duration::from_secs(5));
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_directory_keys_open_company() {
        let api = test_api();
        let mut app = App::new(api.clone(), Route::Directory, Duration::from_secs(5));
        app.viewport = Rect::new(0, 3, 66, 20);
        settle(&mut app).await;

        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.route(), &Route::CompanyTickets("3".to_string()));

        settle(&mut app).await;
        handle_key(&mut app, key(KeyCode::Char('j')));
        match &app.screen {
            Screen::Tickets(list) => assert_eq!(list.selected, 1),
            _ => panic!("expected ticket list"),
        }

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.route(), &Route::Directory);

        handle_key(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.route(), &Route::NewTicket);
    }

    #[tokio::test]
    async fn test_form_typing_and_submit() {
        let api = test_api();
        let mut app = App::new(api.clone(), Route::NewTicket, Duration::from_secs(5));

        type_text(&mut app, "a@b.com");
        handle_key(&mut app, key(KeyCode::Enter));
        type_text(&mut app, "T");
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "qD");
        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Backspace));
        type_text(&mut app, "D");
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Enter));
        settle(&mut app).await;

        let submitted = api.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].email, "a@b.com");
        assert_eq!(submitted[0].title, "T");
        assert_eq!(submitted[0].description, "D");
    }

    #[tokio::test]
    async fn test_form_ctrl_s_and_escape() {
        let api = MockApi::rejecting(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        let mut app = App::new(api.clone(), Route::Directory, Duration::from_secs(5));
        app.navigate(Route::NewTicket);

        type_text(&mut app, "a@b.com");
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "T");
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "D");
        handle_key(&mut app, ctrl('s'));
        settle(&mut app).await;

        // First Esc dismisses the error, second goes back
        handle_key(&mut app, key(KeyCode::Esc));
        match &app.screen {
            Screen::NewTicket(form) => {
                assert!(form.notification.is_none());
                assert_eq!(form.draft.email, "a@b.com");
            }
            _ => panic!("expected form"),
        }
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.route(), &Route::Directory);
    }

    #[tokio::test]
    async fn test_form_ignores_modified_chars() {
        let mut app = App::new(test_api(), Route::NewTicket, Duration::from_secs(5));
        handle_key(&mut app, ctrl('a'));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT));
        type_text(&mut app, "x");
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('Y'), KeyModifiers::SHIFT));

        match &app.screen {
            Screen::NewTicket(form) => assert_eq!(form.draft.email, "xY"),
            _ => panic!("expected form"),
        }
    }

    #[tokio::test]
    async fn test_leaving_form_cancels_submission() {
        let api = MockApi::slow(Duration::from_millis(200));
        let mut app = App::new(api.clone(), Route::Directory, Duration::from_secs(5));

        open_and_submit(&mut app);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.route(), &Route::Directory);
        open_and_submit(&mut app);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(api.submitted().len(), 1);
    }

    #[tokio::test]
    async fn test_mouse_click_opens_card() {
        let mut app = App::new(test_api(), Route::Directory, Duration::from_secs(5));
        app.viewport = Rect::new(0, 3, 66, 20);
        settle(&mut app).await;

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 40,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, click);
        assert_eq!(app.route(), &Route::CompanyTickets("2".to_string()));
    }
}
