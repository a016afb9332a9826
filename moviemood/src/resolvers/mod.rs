pub mod actor;
pub mod recommendation;

pub use actor::{ActorQuery, ActorResolver};
pub use recommendation::{MAX_RECOMMENDATIONS, RecommendationResolver};
