//! Episode data consumed from the Rick and Morty API.

mod model;
mod query;

pub use model::{Episode, EpisodesConnection, EpisodesData, PageInfo, PageNumber};
pub use query::{EpisodesVariables, FilterEpisode, GET_EPISODES, GetEpisodes};
