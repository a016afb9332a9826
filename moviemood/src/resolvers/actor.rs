use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{Actor, PersonCandidate};
use crate::pipeline::{TwoStage, run_two_stage};

/// Person search parameters
#[derive(Debug, Clone)]
pub struct ActorQuery {
    /// Space-encoded search term sent to the catalog
    pub search: String,
    /// Name a candidate must equal, ignoring case
    pub full_name: String,
}

/// Finds a person by exact full name and enriches them with biographical detail
pub struct ActorResolver {
    catalog: Arc<dyn Catalog>,
}

impl ActorResolver {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Returns at most one actor: the first exact name match in search order.
    pub async fn resolve(&self, search: &str, full_name: &str) -> Result<Vec<Actor>> {
        let query = ActorQuery {
            search: search.to_string(),
            full_name: full_name.to_string(),
        };
        let actor = run_two_stage(self, &query).await?;
        Ok(actor.into_iter().collect())
    }
}

#[async_trait]
impl TwoStage for ActorResolver {
    type Request = ActorQuery;
    type Candidate = PersonCandidate;
    type Output = Actor;

    async fn locate(&self, query: &ActorQuery) -> Result<Option<PersonCandidate>> {
        let candidates = self.catalog.search_people(&query.search).await?;
        let wanted = query.full_name.to_lowercase();

        info!(
            "People search for {} returned {} candidates",
            query.full_name,
            candidates.len()
        );

        Ok(candidates
            .into_iter()
            .find(|candidate| candidate.name.to_lowercase() == wanted))
    }

    async fn enrich(&self, candidate: PersonCandidate) -> Result<Actor> {
        info!(person_id = candidate.id, "Fetching person detail");
        let detail = self.catalog.fetch_person_detail(candidate.id).await?;
        Ok(Actor::enrich(candidate, detail))
    }
}
