//! Backend-neutral view tree.
//!
//! Components render into [`View`] values; frontends decide how each node looks.

/// User-triggerable actions attached to buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
	/// Go one page back.
	PreviousPage,
	/// Go one page forward.
	NextPage,
	/// Re-issue the fetch for the current page.
	Retry,
	/// Leave the error boundary's fallback and render the subtree again.
	TryAgain,
}

/// Emphasis hint for text nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
	/// Regular text.
	#[default]
	Normal,
	/// De-emphasized text.
	Muted,
	/// Error text.
	Error,
}

/// A clickable control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
	/// Caption.
	pub label: String,
	/// Action dispatched on activation.
	pub action: Action,
	/// Disabled buttons ignore activation.
	pub disabled: bool,
}

impl Button {
	/// Creates an enabled button.
	pub fn new(label: impl Into<String>, action: Action) -> Self {
		Self {
			label: label.into(),
			action,
			disabled: false,
		}
	}

	/// Sets the disabled flag.
	#[must_use]
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}
}

/// Self-contained card content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
	/// Stable identity of the rendered item.
	pub key: String,
	/// Card heading.
	pub title: String,
	/// Labelled values, in display order.
	pub fields: Vec<(String, String)>,
}

/// Node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
	/// Children laid out top to bottom.
	Stack(Vec<View>),
	/// Page banner.
	Header {
		/// Main title.
		title: String,
		/// Tagline under the title.
		subtitle: Option<String>,
	},
	/// Prominent single line.
	Heading {
		/// Text.
		text: String,
		/// Emphasis.
		tone: Tone,
	},
	/// Body text.
	Text {
		/// Text.
		text: String,
		/// Emphasis.
		tone: Tone,
	},
	/// Cards in a responsive grid, order preserved.
	Grid(Vec<CardView>),
	/// Row of buttons.
	Controls(Vec<Button>),
	/// Page footer line.
	Footer(String),
}

impl View {
	/// Heading with normal tone.
	pub fn heading(text: impl Into<String>) -> Self {
		Self::Heading {
			text: text.into(),
			tone: Tone::Normal,
		}
	}

	/// Text with the given tone.
	pub fn text(text: impl Into<String>, tone: Tone) -> Self {
		Self::Text { text: text.into(), tone }
	}

	/// Calls `f` on this node and every descendant, depth first.
	pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
		f(self);
		if let Self::Stack(children) = self {
			for child in children {
				child.walk(f);
			}
		}
	}

	/// All buttons in document order.
	pub fn buttons(&self) -> Vec<&Button> {
		let mut out = Vec::new();
		self.walk(&mut |node| {
			if let Self::Controls(buttons) = node {
				out.extend(buttons.iter());
			}
		});
		out
	}

	/// The first button bound to `action`.
	pub fn button(&self, action: Action) -> Option<&Button> {
		self.buttons().into_iter().find(|button| button.action == action)
	}

	/// Returns `true` when an enabled button for `action` is present.
	pub fn is_enabled(&self, action: Action) -> bool {
		self.button(action).is_some_and(|button| !button.disabled)
	}

	/// All cards in document order.
	pub fn cards(&self) -> Vec<&CardView> {
		let mut out = Vec::new();
		self.walk(&mut |node| {
			if let Self::Grid(cards) = node {
				out.extend(cards.iter());
			}
		});
		out
	}

	/// Text content, one line per node, for assertions and plain output.
	pub fn plain_text(&self) -> String {
		let mut lines = Vec::new();
		self.walk(&mut |node| match node {
			Self::Stack(_) => {}
			Self::Header { title, subtitle } => {
				lines.push(title.clone());
				lines.extend(subtitle.clone());
			}
			Self::Heading { text, .. } | Self::Text { text, .. } | Self::Footer(text) => lines.push(text.clone()),
			Self::Grid(cards) => {
				for card in cards {
					lines.push(card.title.clone());
					lines.extend(card.fields.iter().map(|(label, value)| format!("{label}: {value}")));
				}
			}
			Self::Controls(buttons) => {
				let labels: Vec<_> = buttons.iter().map(|b| format!("[{}]", b.label)).collect();
				lines.push(labels.join(" "));
			}
		});
		lines.join("\n")
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn sample() -> View {
		View::Stack(vec![
			View::heading("Title"),
			View::Stack(vec![
				View::Grid(vec![CardView {
					key: "1".into(),
					title: "Pilot".into(),
					fields: vec![("Episode".into(), "S01E01".into())],
				}]),
				View::Controls(vec![
					Button::new("Previous", Action::PreviousPage).disabled(true),
					Button::new("Next", Action::NextPage),
				]),
			]),
		])
	}

	#[test]
	fn finds_nested_buttons_and_cards() {
		let view = sample();
		assert_eq!(view.buttons().len(), 2);
		assert!(!view.is_enabled(Action::PreviousPage));
		assert!(view.is_enabled(Action::NextPage));
		assert!(!view.is_enabled(Action::TryAgain));
		assert_eq!(view.cards()[0].title, "Pilot");
	}

	#[test]
	fn plain_text_lists_every_node() {
		assert_eq!(sample().plain_text(), "Title\nPilot\nEpisode: S01E01\n[Previous] [Next]");
	}
}
