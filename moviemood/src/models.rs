use std::fmt;

/// A movie as reported by the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub overview: String,
    /// Empty when the catalog has no release date
    pub release_date: String,
    pub vote_average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Unknown,
}

impl Gender {
    /// Maps the catalog's numeric gender code.
    ///
    /// Only `1` means female. Every other code, including the catalog's
    /// "not specified" code, is reported as male. A missing code is unknown.
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(1) => Gender::Female,
            Some(_) => Gender::Male,
            None => Gender::Unknown,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// A person returned by the people search, before enrichment
#[derive(Debug, Clone, PartialEq)]
pub struct PersonCandidate {
    pub id: u64,
    pub name: String,
    pub known_for: Vec<Movie>,
}

/// Biographical fields from the person detail endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonDetail {
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub biography: Option<String>,
    pub place_of_birth: Option<String>,
    pub gender_code: Option<i64>,
}

/// A fully enriched actor or actress
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: u64,
    pub name: String,
    pub birthday: String,
    /// Non-empty only for deceased people
    pub deathday: String,
    pub biography: String,
    pub gender: Gender,
    pub place_of_birth: String,
    pub known_for: Vec<Movie>,
}

impl Actor {
    /// Merges the detail payload into a search candidate.
    ///
    /// Fields the detail payload omits stay empty.
    pub fn enrich(candidate: PersonCandidate, detail: PersonDetail) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            birthday: detail.birthday.unwrap_or_default(),
            deathday: detail.deathday.unwrap_or_default(),
            biography: detail.biography.unwrap_or_default(),
            gender: Gender::from_code(detail.gender_code),
            place_of_birth: detail.place_of_birth.unwrap_or_default(),
            known_for: candidate.known_for,
        }
    }
}

/// Outcome of a single chat command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Success { message: String },
    /// Malformed or unrecognised command
    ValidationError { message: String },
    /// The catalog could not be reached or understood
    UpstreamError { message: String },
}

impl CommandOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message }
            | Self::ValidationError { message }
            | Self::UpstreamError { message } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
