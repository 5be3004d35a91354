//! Responsive card grid.

use multiverse_view::{CardView, Tone};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::render_adapter::tone_style;

/// Rows taken by one card: borders, title and three fields.
pub const CARD_HEIGHT: u16 = 6;

/// Card columns for a given width, from one on narrow terminals up to four.
pub fn grid_columns(width: u16) -> usize {
	match width {
		0..60 => 1,
		60..90 => 2,
		90..120 => 3,
		_ => 4,
	}
}

/// Vertical scroll position of the grid, in card rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridState {
	offset: usize,
}

impl GridState {
	/// First visible card row.
	pub fn offset(&self) -> usize {
		self.offset
	}

	/// Scrolls down one row; clamped on the next render.
	pub fn scroll_down(&mut self) {
		self.offset = self.offset.saturating_add(1);
	}

	/// Scrolls up one row.
	pub fn scroll_up(&mut self) {
		self.offset = self.offset.saturating_sub(1);
	}

	/// Back to the first row, used after a page change.
	pub fn reset(&mut self) {
		self.offset = 0;
	}
}

/// Draws as many card rows as fit in `area`, starting at the state's offset.
pub fn render_grid(cards: &[CardView], area: Rect, buf: &mut Buffer, state: &mut GridState) {
	let columns = grid_columns(area.width);
	let rows: Vec<&[CardView]> = cards.chunks(columns).collect();
	let visible = usize::from(area.height / CARD_HEIGHT);
	if visible == 0 || rows.is_empty() {
		return;
	}

	state.offset = state.offset.min(rows.len().saturating_sub(visible));

	let row_areas = Layout::vertical(std::iter::repeat_n(Constraint::Length(CARD_HEIGHT), visible)).split(area);
	for (row, row_area) in rows.iter().skip(state.offset).zip(row_areas.iter()) {
		let cells = Layout::horizontal(std::iter::repeat_n(Constraint::Ratio(1, columns as u32), columns)).split(*row_area);
		for (card, cell) in row.iter().zip(cells.iter()) {
			render_card(card, *cell, buf);
		}
	}
}

fn render_card(card: &CardView, area: Rect, buf: &mut Buffer) {
	let block = Block::bordered().border_style(tone_style(Tone::Muted));
	let inner = block.inner(area);
	block.render(area, buf);

	let width = usize::from(inner.width);
	let mut lines = vec![Line::styled(truncate(&card.title, width), Style::default().add_modifier(Modifier::BOLD))];
	for (label, value) in &card.fields {
		let label = format!("{label}: ");
		let rest = width.saturating_sub(label.width());
		lines.push(Line::from(vec![
			Span::styled(truncate(&label, width), tone_style(Tone::Muted)),
			Span::raw(truncate(value, rest)),
		]));
	}
	Paragraph::new(lines).render(inner, buf);
}

/// Cuts `text` to `width` columns, marking the cut with an ellipsis.
fn truncate(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}

	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let w = ch.width().unwrap_or(0);
		if used + w > width - 1 {
			break;
		}
		out.push(ch);
		used += w;
	}
	out.push('…');
	out
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(20, 1)]
	#[case(59, 1)]
	#[case(60, 2)]
	#[case(89, 2)]
	#[case(90, 3)]
	#[case(120, 4)]
	#[case(400, 4)]
	fn columns_follow_width(#[case] width: u16, #[case] columns: usize) {
		assert_eq!(grid_columns(width), columns);
	}

	#[test]
	fn truncate_marks_the_cut() {
		assert_eq!(truncate("Rixty Minutes", 20), "Rixty Minutes");
		assert_eq!(truncate("Rixty Minutes", 6), "Rixty…");
		assert_eq!(truncate("Rixty", 0), "");
	}

	#[test]
	fn scroll_up_stops_at_zero() {
		let mut state = GridState::default();
		state.scroll_up();
		assert_eq!(state.offset(), 0);
		state.scroll_down();
		state.scroll_down();
		assert_eq!(state.offset(), 2);
		state.reset();
		assert_eq!(state.offset(), 0);
	}
}
