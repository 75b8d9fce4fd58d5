//! Key bindings

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use skydeck_core::Page;

/// Map a key press to a message. Unbound keys produce nothing.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('b') => Some(Message::ToggleSidebar),
        InputKey::Char('t') => Some(Message::ToggleTheme),

        InputKey::Char(c @ '1'..='4') => {
            let index = (c as u8 - b'1') as usize;
            Page::from_index(index).map(Message::Navigate)
        }
        InputKey::Tab => Some(Message::Navigate(next_page(state.page, 1))),
        InputKey::BackTab => Some(Message::Navigate(next_page(
            state.page,
            Page::ALL.len() - 1,
        ))),

        InputKey::Char('c') => Some(Message::NextCategory),
        InputKey::Char('C') => Some(Message::PrevCategory),

        InputKey::Char(']') | InputKey::Right => Some(Message::NextTimeRange),
        InputKey::Char('[') | InputKey::Left => Some(Message::PrevTimeRange),

        _ => None,
    }
}

fn next_page(current: Page, step: usize) -> Page {
    Page::ALL[(current.index() + step) % Page::ALL.len()]
}
