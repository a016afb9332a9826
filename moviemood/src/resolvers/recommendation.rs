use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Movie;
use crate::pipeline::{TwoStage, run_two_stage};

pub const MAX_RECOMMENDATIONS: usize = 10;

/// Turns a favourite movie title into a list of recommended movies
pub struct RecommendationResolver {
    catalog: Arc<dyn Catalog>,
}

impl RecommendationResolver {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// `query` must already be space-encoded.
    pub async fn resolve(&self, query: &str) -> Result<Vec<Movie>> {
        Ok(run_two_stage(self, query).await?.unwrap_or_default())
    }
}

#[async_trait]
impl TwoStage for RecommendationResolver {
    type Request = str;
    type Candidate = u64;
    type Output = Vec<Movie>;

    /// The first search result is taken as the intended movie.
    async fn locate(&self, query: &str) -> Result<Option<u64>> {
        let movies = self.catalog.search_movies(query).await?;
        Ok(movies.first().map(|movie| {
            info!(movie_id = movie.id, title = %movie.title, "Using first search result");
            movie.id
        }))
    }

    async fn enrich(&self, movie_id: u64) -> Result<Vec<Movie>> {
        let mut recommendations = self.catalog.fetch_recommendations(movie_id).await?;
        recommendations.truncate(MAX_RECOMMENDATIONS);
        Ok(recommendations)
    }
}
