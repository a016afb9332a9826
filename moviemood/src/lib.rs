//! Keyword chat commands (`Movie`, `Actor`, `Favourite`, `Suggest`) answered
//! from an external movie catalog.
//!
//! A message flows through [`CommandDispatcher`], which validates it, hands the
//! argument to the catalog or one of the two-stage resolvers, and renders the
//! entities with [`format`] into a [`CommandOutcome`].

pub mod catalog;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod format;
pub mod models;
pub mod pipeline;
pub mod resolvers;
pub mod session;

#[cfg(test)]
mod testing;

pub use catalog::{Catalog, TmdbCatalog, encode_spaces};
pub use config::CatalogConfig;
pub use dispatcher::CommandDispatcher;
pub use error::{MovieMoodError, Result};
pub use format::{format_actors, format_movies, parse_result_count};
pub use models::{Actor, CommandOutcome, Gender, Movie, PersonCandidate, PersonDetail};
pub use pipeline::{TwoStage, run_two_stage};
pub use resolvers::{ActorResolver, RecommendationResolver};
pub use session::{InMemorySessionRegistry, Session, SessionRegistry};
