//! In-memory catalog used by the unit tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::catalog::Catalog;
use crate::error::{MovieMoodError, Result};
use crate::models::{Movie, PersonCandidate, PersonDetail};

#[derive(Default)]
pub struct FakeCatalog {
    pub movies: Vec<Movie>,
    pub people: Vec<PersonCandidate>,
    pub details: HashMap<u64, PersonDetail>,
    pub recommendations: HashMap<u64, Vec<Movie>>,
    pub fail_search: bool,
    pub fail_detail: bool,
    pub fail_recommendations: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn unavailable() -> MovieMoodError {
    MovieMoodError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE)
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>> {
        self.record(format!("search_movies:{query}"));
        if self.fail_search {
            return Err(unavailable());
        }
        Ok(self.movies.clone())
    }

    async fn search_people(&self, query: &str) -> Result<Vec<PersonCandidate>> {
        self.record(format!("search_people:{query}"));
        if self.fail_search {
            return Err(unavailable());
        }
        Ok(self.people.clone())
    }

    async fn fetch_person_detail(&self, person_id: u64) -> Result<PersonDetail> {
        self.record(format!("fetch_person_detail:{person_id}"));
        if self.fail_detail {
            return Err(unavailable());
        }
        Ok(self.details.get(&person_id).cloned().unwrap_or_default())
    }

    async fn fetch_recommendations(&self, movie_id: u64) -> Result<Vec<Movie>> {
        self.record(format!("fetch_recommendations:{movie_id}"));
        if self.fail_recommendations {
            return Err(unavailable());
        }
        Ok(self
            .recommendations
            .get(&movie_id)
            .cloned()
            .unwrap_or_default())
    }
}

pub fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: format!("About {title}"),
        release_date: "2010-07-15".to_string(),
        vote_average: 8.4,
    }
}

pub fn person(id: u64, name: &str, known_for: Vec<Movie>) -> PersonCandidate {
    PersonCandidate {
        id,
        name: name.to_string(),
        known_for,
    }
}
