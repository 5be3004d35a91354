use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use multiverse_view::{Action, View};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	/// Activate the button bound to this action.
	Dispatch(Action),
	/// Scroll the card grid up one row.
	ScrollUp,
	/// Scroll the card grid down one row.
	ScrollDown,
	/// Leave the application.
	Quit,
}

/// Maps a key press to a command given the view on screen.
///
/// Keys for buttons that are absent or disabled in `view` map to nothing. `r` activates
/// whichever of Retry and Try again is shown.
pub fn map_key(key: KeyEvent, view: &View) -> Option<Command> {
	if key.kind != KeyEventKind::Press {
		return None;
	}

	let action = match key.code {
		KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Some(Command::Quit),
		KeyCode::Char('q') | KeyCode::Esc => return Some(Command::Quit),
		KeyCode::Up | KeyCode::Char('k') => return Some(Command::ScrollUp),
		KeyCode::Down | KeyCode::Char('j') => return Some(Command::ScrollDown),
		KeyCode::Left | KeyCode::Char('h' | 'p') => Action::PreviousPage,
		KeyCode::Right | KeyCode::Char('l' | 'n') => Action::NextPage,
		KeyCode::Char('r') => {
			return [Action::Retry, Action::TryAgain]
				.into_iter()
				.find(|action| view.is_enabled(*action))
				.map(Command::Dispatch);
		}
		_ => return None,
	};

	view.is_enabled(action).then_some(Command::Dispatch(action))
}

#[cfg(test)]
mod tests {
	use multiverse_view::{Button, ErrorBoundary};
	use pretty_assertions::assert_eq;

	use super::*;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn controls(previous_disabled: bool, next_disabled: bool) -> View {
		View::Controls(vec![
			Button::new("Previous", Action::PreviousPage).disabled(previous_disabled),
			Button::new("Next", Action::NextPage).disabled(next_disabled),
		])
	}

	#[test]
	fn arrows_and_letters_navigate() {
		let view = controls(false, false);
		for code in [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('p')] {
			assert_eq!(map_key(press(code), &view), Some(Command::Dispatch(Action::PreviousPage)));
		}
		for code in [KeyCode::Right, KeyCode::Char('l'), KeyCode::Char('n')] {
			assert_eq!(map_key(press(code), &view), Some(Command::Dispatch(Action::NextPage)));
		}
	}

	#[test]
	fn arrows_and_letters_scroll_the_grid() {
		let view = View::heading("Loading...");
		for code in [KeyCode::Up, KeyCode::Char('k')] {
			assert_eq!(map_key(press(code), &view), Some(Command::ScrollUp));
		}
		for code in [KeyCode::Down, KeyCode::Char('j')] {
			assert_eq!(map_key(press(code), &view), Some(Command::ScrollDown));
		}
	}

	#[test]
	fn disabled_buttons_ignore_their_keys() {
		let view = controls(true, false);
		assert_eq!(map_key(press(KeyCode::Left), &view), None);
		assert_eq!(map_key(press(KeyCode::Right), &view), Some(Command::Dispatch(Action::NextPage)));
	}

	#[test]
	fn navigation_keys_do_nothing_without_controls() {
		let view = View::heading("Loading...");
		assert_eq!(map_key(press(KeyCode::Right), &view), None);
		assert_eq!(map_key(press(KeyCode::Char('r')), &view), None);
	}

	#[test]
	fn r_picks_the_visible_recovery_button() {
		let failed = View::Controls(vec![Button::new("Retry", Action::Retry)]);
		assert_eq!(map_key(press(KeyCode::Char('r')), &failed), Some(Command::Dispatch(Action::Retry)));

		let fallback = ErrorBoundary::fallback_view();
		assert_eq!(map_key(press(KeyCode::Char('r')), &fallback), Some(Command::Dispatch(Action::TryAgain)));
	}

	#[test]
	fn quit_keys() {
		let view = View::heading("Loading...");
		assert_eq!(map_key(press(KeyCode::Char('q')), &view), Some(Command::Quit));
		assert_eq!(map_key(press(KeyCode::Esc), &view), Some(Command::Quit));
		assert_eq!(map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &view), Some(Command::Quit));
	}

	#[test]
	fn releases_are_ignored() {
		let mut key = press(KeyCode::Char('q'));
		key.kind = KeyEventKind::Release;
		assert_eq!(map_key(key, &View::heading("x")), None);
	}
}
