//! Episode card.

use multiverse_episodes::Episode;

use crate::error::RenderError;
use crate::view::CardView;

const COMPONENT: &str = "EpisodeCard";

/// Renders one episode. Stateless; reads only the episode it is given.
#[derive(Debug, Clone, Copy)]
pub struct EpisodeCard<'a> {
	episode: &'a Episode,
}

impl<'a> EpisodeCard<'a> {
	/// Wraps an episode for rendering.
	pub const fn new(episode: &'a Episode) -> Self {
		Self { episode }
	}

	/// Produces the card, failing when the episode lacks the identity it is keyed by.
	pub fn render(&self) -> Result<CardView, RenderError> {
		let Episode { id, name, air_date, episode } = self.episode;
		if id.trim().is_empty() {
			return Err(RenderError::missing_field(COMPONENT, "id"));
		}

		Ok(CardView {
			key: id.clone(),
			title: name.clone(),
			fields: vec![
				("Episode".to_string(), episode.clone()),
				("Air date".to_string(), air_date.clone()),
				("ID".to_string(), id.clone()),
			],
		})
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn pilot() -> Episode {
		Episode {
			id: "1".into(),
			name: "Pilot".into(),
			air_date: "December 2, 2013".into(),
			episode: "S01E01".into(),
		}
	}

	#[test]
	fn renders_all_fields() {
		let card = EpisodeCard::new(&pilot()).render().unwrap();
		assert_eq!(
			card,
			CardView {
				key: "1".into(),
				title: "Pilot".into(),
				fields: vec![
					("Episode".into(), "S01E01".into()),
					("Air date".into(), "December 2, 2013".into()),
					("ID".into(), "1".into()),
				],
			}
		);
	}

	#[test]
	fn blank_id_is_a_render_error() {
		let mut episode = pilot();
		episode.id = "  ".into();
		let err = EpisodeCard::new(&episode).render().unwrap_err();
		assert_eq!(err.component_stack(), ["EpisodeCard"]);
	}
}
