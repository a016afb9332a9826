//! Access to the external movie catalog.
//!
//! [`Catalog`] is the seam the resolvers depend on. [`TmdbCatalog`] implements it
//! against The Movie Database v3 REST API. Every payload is decoded into a
//! per-endpoint wire struct first, then mapped into the domain types in
//! [`crate::models`].

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::CatalogConfig;
use crate::error::{MovieMoodError, Result};
use crate::models::{Movie, PersonCandidate, PersonDetail};

/// Read operations against the movie catalog, one HTTP GET each
#[async_trait]
pub trait Catalog: Send + Sync {
    /// `query` must already be space-encoded.
    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>>;

    /// `query` must already be space-encoded.
    async fn search_people(&self, query: &str) -> Result<Vec<PersonCandidate>>;

    async fn fetch_person_detail(&self, person_id: u64) -> Result<PersonDetail>;

    /// Returns every recommendation the catalog sends; callers apply their own cap.
    async fn fetch_recommendations(&self, movie_id: u64) -> Result<Vec<Movie>>;
}

/// `reqwest` backed client for The Movie Database
#[derive(Clone)]
pub struct TmdbCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl TmdbCatalog {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str, query: Option<&str>) -> String {
        let mut url = format!(
            "{}/{}?api_key={}&language={}",
            self.config.base_url, path, self.config.api_key, self.config.language
        );
        if let Some(query) = query {
            url.push_str("&query=");
            url.push_str(query);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: Option<&str>) -> Result<T> {
        debug!(path, "Requesting catalog resource");

        let response = self.client.get(self.endpoint(path, query)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MovieMoodError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl Catalog for TmdbCatalog {
    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>> {
        let page: ResultsPage<MovieRecord> = self.get_json("search/movie", Some(query)).await?;
        Ok(page.results.into_iter().map(Movie::from).collect())
    }

    async fn search_people(&self, query: &str) -> Result<Vec<PersonCandidate>> {
        let page: ResultsPage<PersonRecord> = self.get_json("search/person", Some(query)).await?;
        page.results
            .into_iter()
            .map(PersonCandidate::try_from)
            .collect()
    }

    async fn fetch_person_detail(&self, person_id: u64) -> Result<PersonDetail> {
        let record: PersonDetailRecord =
            self.get_json(&format!("person/{person_id}"), None).await?;
        Ok(record.into())
    }

    async fn fetch_recommendations(&self, movie_id: u64) -> Result<Vec<Movie>> {
        let page: ResultsPage<RecommendationRecord> = self
            .get_json(&format!("movie/{movie_id}/recommendations"), None)
            .await?;
        Ok(page.results.into_iter().map(Movie::from).collect())
    }
}

/// Replaces literal spaces with `%20`. Nothing else is escaped.
pub fn encode_spaces(text: &str) -> String {
    text.replace(' ', "%20")
}

#[derive(Debug, Deserialize)]
struct ResultsPage<T> {
    results: Vec<T>,
}

/// Movie search entry: `id` and `title` are mandatory
#[derive(Debug, Deserialize)]
struct MovieRecord {
    id: u64,
    title: String,
    overview: Option<String>,
    release_date: Option<String>,
    vote_average: Option<f64>,
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Movie {
            id: record.id,
            title: record.title,
            overview: record.overview.unwrap_or_default(),
            release_date: record.release_date.unwrap_or_default(),
            vote_average: record.vote_average.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PersonRecord {
    id: u64,
    name: String,
    known_for: Option<Vec<KnownForRecord>>,
}

/// Known-for entries mix movies (`title`) and TV shows (`name`)
#[derive(Debug, Deserialize)]
struct KnownForRecord {
    id: u64,
    title: Option<String>,
    name: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
    vote_average: Option<f64>,
}

impl TryFrom<KnownForRecord> for Movie {
    type Error = MovieMoodError;

    fn try_from(record: KnownForRecord) -> Result<Self> {
        let title = record
            .title
            .or(record.name)
            .ok_or(MovieMoodError::MissingField("known_for.title"))?;

        Ok(Movie {
            id: record.id,
            title,
            overview: record.overview.unwrap_or_default(),
            release_date: record.release_date.unwrap_or_default(),
            vote_average: record.vote_average.unwrap_or_default(),
        })
    }
}

impl TryFrom<PersonRecord> for PersonCandidate {
    type Error = MovieMoodError;

    fn try_from(record: PersonRecord) -> Result<Self> {
        let known_for = record
            .known_for
            .unwrap_or_default()
            .into_iter()
            .map(Movie::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(PersonCandidate {
            id: record.id,
            name: record.name,
            known_for,
        })
    }
}

#[derive(Debug, Deserialize)]
struct PersonDetailRecord {
    birthday: Option<String>,
    deathday: Option<String>,
    biography: Option<String>,
    place_of_birth: Option<String>,
    gender: Option<i64>,
}

impl From<PersonDetailRecord> for PersonDetail {
    fn from(record: PersonDetailRecord) -> Self {
        PersonDetail {
            birthday: record.birthday,
            deathday: record.deathday,
            biography: record.biography,
            place_of_birth: record.place_of_birth,
            gender_code: record.gender,
        }
    }
}

/// Recommendation entry: every field may be missing
#[derive(Debug, Deserialize)]
struct RecommendationRecord {
    id: Option<u64>,
    title: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
    vote_average: Option<f64>,
}

impl From<RecommendationRecord> for Movie {
    fn from(record: RecommendationRecord) -> Self {
        Movie {
            id: record.id.unwrap_or_default(),
            title: record.title.unwrap_or_default(),
            overview: record.overview.unwrap_or_default(),
            release_date: record.release_date.unwrap_or_default(),
            vote_average: record.vote_average.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> TmdbCatalog {
        let config = CatalogConfig::new("secret").with_base_url("http://catalog.test/3");
        TmdbCatalog::new(config).unwrap()
    }

    #[test]
    fn encode_spaces_only_touches_spaces() {
        assert_eq!(encode_spaces("The Dark Knight"), "The%20Dark%20Knight");
        assert_eq!(encode_spaces("Amélie & co"), "Amélie%20&%20co");
        assert_eq!(encode_spaces("Up"), "Up");
    }

    #[test]
    fn endpoint_appends_query_verbatim() {
        let catalog = catalog();

        assert_eq!(
            catalog.endpoint("search/movie", Some("The%20Matrix")),
            "http://catalog.test/3/search/movie?api_key=secret&language=en-US&query=The%20Matrix"
        );
        assert_eq!(
            catalog.endpoint("person/31", None),
            "http://catalog.test/3/person/31?api_key=secret&language=en-US"
        );
    }

    #[test]
    fn movie_search_requires_title() {
        let payload = json!({ "results": [{ "id": 1, "overview": "no title" }] });
        let decoded = serde_json::from_value::<ResultsPage<MovieRecord>>(payload);
        assert!(decoded.is_err());

        let payload = json!({ "results": [{ "id": 1, "title": null }] });
        let decoded = serde_json::from_value::<ResultsPage<MovieRecord>>(payload);
        assert!(decoded.is_err());
    }

    #[test]
    fn movie_search_defaults_optional_fields() {
        let payload = json!({ "results": [{ "id": 27205, "title": "Inception", "release_date": null }] });
        let page: ResultsPage<MovieRecord> = serde_json::from_value(payload).unwrap();
        let movie = Movie::from(page.results.into_iter().next().unwrap());

        assert_eq!(movie.id, 27205);
        assert_eq!(movie.title, "Inception");
        assert!(movie.release_date.is_empty());
        assert_eq!(movie.vote_average, 0.0);
    }

    #[test]
    fn recommendations_tolerate_missing_fields() {
        let payload = json!({ "results": [{ "overview": "only an overview" }, {}] });
        let page: ResultsPage<RecommendationRecord> = serde_json::from_value(payload).unwrap();
        let movies: Vec<Movie> = page.results.into_iter().map(Movie::from).collect();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id, 0);
        assert!(movies[0].title.is_empty());
        assert_eq!(movies[0].overview, "only an overview");
    }

    #[test]
    fn missing_results_array_is_a_decode_failure() {
        let payload = json!({ "status_code": 7, "status_message": "Invalid API key" });
        assert!(serde_json::from_value::<ResultsPage<RecommendationRecord>>(payload).is_err());
    }

    #[test]
    fn known_for_accepts_tv_names_and_rejects_untitled_entries() {
        let record: PersonRecord = serde_json::from_value(json!({
            "id": 31,
            "name": "Tom Hanks",
            "known_for": [
                { "id": 13, "title": "Forrest Gump", "vote_average": 8.5 },
                { "id": 4613, "name": "Band of Brothers" }
            ]
        }))
        .unwrap();
        let candidate = PersonCandidate::try_from(record).unwrap();
        let titles: Vec<&str> = candidate.known_for.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Forrest Gump", "Band of Brothers"]);

        let record: PersonRecord = serde_json::from_value(json!({
            "id": 31,
            "name": "Tom Hanks",
            "known_for": [{ "id": 99 }]
        }))
        .unwrap();
        let err = PersonCandidate::try_from(record).unwrap_err();
        assert!(matches!(err, MovieMoodError::MissingField(_)));
    }

    #[test]
    fn person_without_known_for_has_empty_list() {
        let record: PersonRecord =
            serde_json::from_value(json!({ "id": 5, "name": "Jane Doe", "known_for": null }))
                .unwrap();
        let candidate = PersonCandidate::try_from(record).unwrap();
        assert!(candidate.known_for.is_empty());
    }

    #[test]
    fn person_detail_keeps_absent_keys_as_none() {
        let record: PersonDetailRecord =
            serde_json::from_value(json!({ "birthday": "1956-07-09", "gender": 2 })).unwrap();
        let detail = PersonDetail::from(record);

        assert_eq!(detail.birthday.as_deref(), Some("1956-07-09"));
        assert_eq!(detail.gender_code, Some(2));
        assert!(detail.deathday.is_none());
        assert!(detail.biography.is_none());
    }
}
