//! Plain-text rendering of movies and actors for chat replies.

use crate::models::{Actor, Movie};

/// Renders a numbered movie list under a `Found N matching …` header.
///
/// `suggestion` switches the header noun from "results" to "suggestions".
pub fn format_movies(movies: &[Movie], suggestion: bool) -> String {
    let noun = if suggestion { "suggestions" } else { "results" };
    let entries = movies
        .iter()
        .enumerate()
        .map(|(index, movie)| {
            format!(
                "Movie #{}: {{Title: {}, Overview: {}, Rating: {}, Release Date: {}}}",
                index + 1,
                movie.title,
                movie.overview,
                movie.vote_average,
                movie.release_date
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("Found {} matching {}.\n{}", movies.len(), noun, entries)
}

pub fn format_actors(actors: &[Actor]) -> String {
    let entries = actors
        .iter()
        .enumerate()
        .map(|(index, actor)| {
            let mut entry = format!(
                "Actor #{}: {{Name: {}, Birthday: {}",
                index + 1,
                actor.name,
                actor.birthday
            );
            if !actor.deathday.is_empty() {
                entry.push_str(", Deathday: ");
                entry.push_str(&actor.deathday);
            }
            if !actor.biography.is_empty() {
                entry.push_str(", Biography: ");
                entry.push_str(&actor.biography);
            }
            entry.push_str(&format!(
                ", Gender: {}, Place of Birth: {}, Known For: {}}}",
                actor.gender,
                actor.place_of_birth,
                format_titles(&actor.known_for)
            ));
            entry
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("Found {} matching results.\n{}", actors.len(), entries)
}

/// `{Title A, Title B}`
fn format_titles(movies: &[Movie]) -> String {
    let titles = movies
        .iter()
        .map(|movie| movie.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{titles}}}")
}

/// Reads the entry count back out of a `Found N matching …` header.
pub fn parse_result_count(text: &str) -> Option<usize> {
    text.lines()
        .next()?
        .strip_prefix("Found ")?
        .split(' ')
        .next()?
        .parse()
        .ok()
}
