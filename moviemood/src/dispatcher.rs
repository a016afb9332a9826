//! Parses chat commands and routes them to the resolvers.

use std::sync::Arc;
use tracing::{error, info};

use crate::catalog::{Catalog, encode_spaces};
use crate::error::Result;
use crate::format::{format_actors, format_movies};
use crate::models::CommandOutcome;
use crate::resolvers::{ActorResolver, RecommendationResolver};

pub const INVALID_COMMAND: &str = "Invalid Command! Please use the following commands: {Movie [MOVIE_NAME], Actor/Actress [ACTOR_NAME/ACTRESS_NAME], Suggest}";
pub const MOVIE_NAME_REQUIRED: &str = "The movie name should consist of at least one word!";
pub const ACTOR_NAME_REQUIRED: &str =
    "The actor/actress should consist of a First Name and Last Name!";
pub const SUGGEST_HINT: &str = "A movie suggestion will be provided based on a favourite movie of yours. Use the following format: Favourite [Movie_Name].";
pub const UPSTREAM_FAILURE: &str =
    "The server can not process your request right now, try again later!";
pub const NO_RESULTS: &str = "No Results!";

/// Stateless entry point for chat messages
pub struct CommandDispatcher {
    catalog: Arc<dyn Catalog>,
    actors: ActorResolver,
    recommendations: RecommendationResolver,
}

impl CommandDispatcher {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            actors: ActorResolver::new(catalog.clone()),
            recommendations: RecommendationResolver::new(catalog.clone()),
            catalog,
        }
    }

    pub async fn resolve(&self, message: &str) -> CommandOutcome {
        let words: Vec<&str> = message.split(' ').collect();
        let command = words[0];
        let argument = message
            .strip_prefix(command)
            .and_then(|rest| rest.strip_prefix(' '))
            .unwrap_or(message);

        if words.len() >= 2 && (argument.is_empty() || words[1].is_empty()) {
            return CommandOutcome::validation(INVALID_COMMAND);
        }

        match command.to_lowercase().as_str() {
            "movie" => {
                if words.len() < 2 {
                    return CommandOutcome::validation(MOVIE_NAME_REQUIRED);
                }
                info!("Searching movies for {}", argument);
                let movies = self.catalog.search_movies(&encode_spaces(argument)).await;
                render(movies, |movies| format_movies(movies, false))
            }
            "actor" | "actress" => {
                if words.len() != 3 {
                    return CommandOutcome::validation(ACTOR_NAME_REQUIRED);
                }
                info!("Resolving actor {}", argument);
                let actors = self
                    .actors
                    .resolve(&encode_spaces(argument), argument)
                    .await;
                render(actors, format_actors)
            }
            "suggest" => CommandOutcome::success(SUGGEST_HINT),
            "favourite" => {
                if words.len() < 2 {
                    return CommandOutcome::validation(MOVIE_NAME_REQUIRED);
                }
                info!("Resolving recommendations for {}", argument);
                let movies = self.recommendations.resolve(&encode_spaces(argument)).await;
                render(movies, |movies| format_movies(movies, true))
            }
            _ => CommandOutcome::validation(INVALID_COMMAND),
        }
    }
}

/// Maps a resolver result onto the chat outcome.
fn render<T>(result: Result<Vec<T>>, format: impl FnOnce(&[T]) -> String) -> CommandOutcome {
    match result {
        Ok(items) if items.is_empty() => CommandOutcome::success(NO_RESULTS),
        Ok(items) => CommandOutcome::success(format(&items)),
        Err(e) => {
            error!("Catalog lookup failed: {}", e);
            CommandOutcome::upstream(UPSTREAM_FAILURE)
        }
    }
}
