//! Terminal frontend for the episode browser.
//!
//! Draws a [`View`] tree into a ratatui frame. Text nodes become centered paragraphs,
//! grids become rows of bordered cards whose column count follows the terminal width.

mod grid;
mod render_adapter;

use multiverse_view::View;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::widgets::{Paragraph, Widget};

pub use grid::{CARD_HEIGHT, GridState, grid_columns};
pub use render_adapter::{button_span, key_hint, to_lines, tone_style};

/// Draws `view` over the whole frame.
pub fn draw(frame: &mut Frame, view: &View, grid: &mut GridState) {
	let area = frame.area();
	render(view, area, frame.buffer_mut(), grid);
}

/// Renders `view` into `area`.
///
/// The children of a top-level stack are laid out vertically; a grid child takes all
/// the height the others leave. Views without a grid are centered vertically.
pub fn render(view: &View, area: Rect, buf: &mut Buffer, grid: &mut GridState) {
	let nodes: Vec<&View> = match view {
		View::Stack(children) => children.iter().collect(),
		node => vec![node],
	};

	let has_grid = nodes.iter().any(|node| matches!(node, View::Grid(_)));
	let constraints = nodes.iter().map(|node| match node {
		View::Grid(_) => Constraint::Fill(1),
		other => Constraint::Length(to_lines(other).len() as u16),
	});
	let layout = Layout::vertical(constraints).flex(if has_grid { Flex::Start } else { Flex::Center });

	for (node, node_area) in nodes.iter().zip(layout.split(area).iter()) {
		match node {
			View::Grid(cards) => grid::render_grid(cards, *node_area, buf, grid),
			other => Paragraph::new(to_lines(other)).render(*node_area, buf),
		}
	}
}
