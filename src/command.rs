use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  HideHelp,
  None,
  OpenIssuePage,
  OpenTypoLink,
  PageDown,
  PageUp,
  Quit,
  ScrollDown,
  ScrollToBottom,
  ScrollToTop,
  ScrollUp,
  ShowHelp,
}

impl Command {
  pub(crate) fn from_key(key: KeyEvent) -> Self {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Self::Quit,
      KeyCode::Char('?') => Self::ShowHelp,
      KeyCode::Down | KeyCode::Char('j') => Self::ScrollDown,
      KeyCode::Up | KeyCode::Char('k') => Self::ScrollUp,
      KeyCode::PageDown | KeyCode::Char(' ') => Self::PageDown,
      KeyCode::PageUp => Self::PageUp,
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        Self::PageDown
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        Self::PageUp
      }
      KeyCode::Home | KeyCode::Char('g') => Self::ScrollToTop,
      KeyCode::End | KeyCode::Char('G') => Self::ScrollToBottom,
      KeyCode::Char('o' | 'O') => Self::OpenIssuePage,
      KeyCode::Char('t' | 'T') => Self::OpenTypoLink,
      _ => Self::None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn from_key_maps_scrolling_and_actions() {
    assert_eq!(Command::from_key(key(KeyCode::Char('j'))), Command::ScrollDown);
    assert_eq!(Command::from_key(key(KeyCode::Up)), Command::ScrollUp);
    assert_eq!(
      Command::from_key(key(KeyCode::Char('o'))),
      Command::OpenIssuePage
    );
    assert_eq!(Command::from_key(key(KeyCode::Char('q'))), Command::Quit);
    assert_eq!(Command::from_key(key(KeyCode::Char('x'))), Command::None);
  }

  #[test]
  fn from_key_maps_control_chords_to_paging() {
    let chord = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
    assert_eq!(Command::from_key(chord), Command::PageDown);

    let chord = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
    assert_eq!(Command::from_key(chord), Command::PageUp);
  }
}
