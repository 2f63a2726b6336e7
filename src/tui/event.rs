use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    NextCategory,
    PrevCategory,
    JumpCategory(usize), // 1/2/3, zero-based here
    Refresh,
    Activate, // Enter or Space on the highlighted rank

    // TUI-local events (handled directly in TUI)
    CursorUp,
    CursorDown,
    CursorFirst,
    CursorLast,
    Resize,
}

/// Poll for an event with timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    // A failed poll/read is treated like "no input this tick".
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some terminals report releases and repeats; only presses count.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Tab) | (_, KeyCode::Right) | (_, KeyCode::Char('l')) => {
            Some(TuiEvent::NextCategory)
        }
        (_, KeyCode::BackTab) | (_, KeyCode::Left) | (_, KeyCode::Char('h')) => {
            Some(TuiEvent::PrevCategory)
        }
        (_, KeyCode::Char(c @ '1'..='3')) => Some(TuiEvent::JumpCategory(c as usize - '1' as usize)),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::Activate),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Home) | (_, KeyCode::Char('g')) => Some(TuiEvent::CursorFirst),
        (_, KeyCode::End) | (_, KeyCode::Char('G')) => Some(TuiEvent::CursorLast),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_category_keys() {
        assert_eq!(map_key(press(KeyCode::Tab)), Some(TuiEvent::NextCategory));
        assert_eq!(map_key(press(KeyCode::Left)), Some(TuiEvent::PrevCategory));
        assert_eq!(map_key(press(KeyCode::Char('1'))), Some(TuiEvent::JumpCategory(0)));
        assert_eq!(map_key(press(KeyCode::Char('3'))), Some(TuiEvent::JumpCategory(2)));
        assert_eq!(map_key(press(KeyCode::Char('4'))), None);
    }

    #[test]
    fn test_enter_and_space_activate() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(TuiEvent::Activate));
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(TuiEvent::Activate));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(TuiEvent::Quit));
        assert_eq!(map_key(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }
}
