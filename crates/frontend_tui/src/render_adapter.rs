use multiverse_view::{Action, Button, Tone, View};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Style for a text tone.
pub fn tone_style(tone: Tone) -> Style {
	match tone {
		Tone::Normal => Style::default(),
		Tone::Muted => Style::default().fg(Color::DarkGray),
		Tone::Error => Style::default().fg(Color::Red),
	}
}

/// Key shown next to a button.
pub fn key_hint(action: Action) -> &'static str {
	match action {
		Action::PreviousPage => "←",
		Action::NextPage => "→",
		Action::Retry | Action::TryAgain => "r",
	}
}

/// A button as `[key] Label`; disabled buttons are dimmed.
pub fn button_span(button: &Button) -> Span<'static> {
	let style = if button.disabled {
		Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
	} else {
		Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
	};
	Span::styled(format!("[{}] {}", key_hint(button.action), button.label), style)
}

/// Converts backend-neutral view nodes into TUI line primitives.
///
/// Grids are laid out by [`crate::grid`] and contribute no lines here.
pub fn to_lines(view: &View) -> Vec<Line<'static>> {
	match view {
		View::Stack(children) => children.iter().flat_map(to_lines).collect(),
		View::Header { title, subtitle } => {
			let mut lines = vec![Line::styled(title.clone(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)).centered()];
			lines.extend(subtitle.iter().map(|s| Line::styled(s.clone(), tone_style(Tone::Muted)).centered()));
			lines.push(Line::default());
			lines
		}
		View::Heading { text, tone } => vec![Line::styled(text.clone(), tone_style(*tone).add_modifier(Modifier::BOLD)).centered()],
		View::Text { text, tone } => vec![Line::styled(text.clone(), tone_style(*tone)).centered()],
		View::Grid(_) => Vec::new(),
		View::Controls(buttons) => {
			let mut spans = Vec::with_capacity(buttons.len() * 2);
			for (i, button) in buttons.iter().enumerate() {
				if i > 0 {
					spans.push(Span::raw("   "));
				}
				spans.push(button_span(button));
			}
			vec![Line::from(spans).centered()]
		}
		View::Footer(text) => vec![Line::styled(text.clone(), tone_style(Tone::Muted)).centered()],
	}
}
