pub mod aggregator;
pub mod dork;
pub mod social;

pub use aggregator::{LookupError, LookupService};
pub use dork::generate_dorks;
pub use social::{SocialHit, social_candidates};
