use async_trait::async_trait;

use crate::error::Result;

/// A lookup that first locates a candidate and then enriches it with a second fetch.
///
/// The second stage depends on the first stage's output, so the two always run
/// one after the other.
#[async_trait]
pub trait TwoStage: Send + Sync {
    type Request: Send + Sync + ?Sized;
    type Candidate: Send;
    type Output: Send;

    /// Finds the candidate to enrich. `None` means nothing matched.
    async fn locate(&self, request: &Self::Request) -> Result<Option<Self::Candidate>>;

    async fn enrich(&self, candidate: Self::Candidate) -> Result<Self::Output>;
}

/// Runs both stages, stopping at the first stage that yields nothing or fails.
///
/// A failed enrichment drops the candidate, so callers never see a partially
/// built output.
pub async fn run_two_stage<S>(stages: &S, request: &S::Request) -> Result<Option<S::Output>>
where
    S: TwoStage + ?Sized,
{
    let Some(candidate) = stages.locate(request).await? else {
        return Ok(None);
    };
    stages.enrich(candidate).await.map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MovieMoodError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Doubler {
        enrich_calls: AtomicUsize,
        fail_enrich: bool,
    }

    impl Doubler {
        fn new(fail_enrich: bool) -> Self {
            Self {
                enrich_calls: AtomicUsize::new(0),
                fail_enrich,
            }
        }
    }

    #[async_trait]
    impl TwoStage for Doubler {
        type Request = str;
        type Candidate = u64;
        type Output = u64;

        async fn locate(&self, request: &str) -> Result<Option<u64>> {
            Ok(request.parse().ok())
        }

        async fn enrich(&self, candidate: u64) -> Result<u64> {
            self.enrich_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_enrich {
                return Err(MovieMoodError::MissingField("value"));
            }
            Ok(candidate * 2)
        }
    }

    #[tokio::test]
    async fn runs_both_stages() {
        let stages = Doubler::new(false);
        assert_eq!(run_two_stage(&stages, "21").await.unwrap(), Some(42));
    }

    #[tokio::test]
    async fn skips_enrichment_when_nothing_is_located() {
        let stages = Doubler::new(false);
        assert_eq!(run_two_stage(&stages, "none").await.unwrap(), None);
        assert_eq!(stages.enrich_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn enrichment_failure_discards_candidate() {
        let stages = Doubler::new(true);
        assert!(run_two_stage(&stages, "21").await.is_err());
        assert_eq!(stages.enrich_calls.load(Ordering::SeqCst), 1);
    }
}
