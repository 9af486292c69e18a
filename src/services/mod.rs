pub mod auth;
pub mod listing_harvester;
pub mod overlay;
pub mod pagination;
pub mod post_creator;
pub mod post_deleter;
pub mod publisher;
pub mod reconciler;

pub use auth::{SsoAuthenticator, StdinTokenPrompt, TokenSource};
pub use listing_harvester::{Harvest, ListingHarvester};
pub use post_creator::{CreatedPosting, PostCreator};
pub use post_deleter::{DeletionSummary, PostDeleter};
pub use publisher::{PublishSummary, Publisher};
pub use reconciler::{CanonicalPlan, CanonicalSelection, Reconciler, RegionPlan};
