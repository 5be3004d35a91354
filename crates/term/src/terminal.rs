use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Terminal driven by the UI.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Set while the alternate screen is up.
static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Raw mode and alternate screen for as long as the guard lives.
pub struct TerminalGuard {
	terminal: Tui,
}

impl TerminalGuard {
	/// Switches the terminal into UI mode.
	pub fn enter() -> io::Result<Self> {
		enable_raw_mode()?;
		execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
		ACTIVE.store(true, Ordering::SeqCst);
		let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
		Ok(Self { terminal })
	}

	/// The wrapped terminal.
	pub fn terminal(&mut self) -> &mut Tui {
		&mut self.terminal
	}
}

impl Drop for TerminalGuard {
	fn drop(&mut self) {
		ACTIVE.store(false, Ordering::SeqCst);
		let _ = disable_raw_mode();
		let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
	}
}

/// Routes panic messages to the log.
///
/// Render panics are caught by the error boundary and must not print over the UI, so
/// the default hook only runs while the terminal is in normal mode. An uncaught panic
/// restores the terminal when the guard is dropped during unwinding.
pub fn install_panic_hook() {
	let previous = std::panic::take_hook();
	std::panic::set_hook(Box::new(move |info| {
		tracing::error!(panic = %info, "panic");
		if !ACTIVE.load(Ordering::SeqCst) {
			previous(info);
		}
	}));
}
