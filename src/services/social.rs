use serde::Serialize;

use crate::constants::social::PLATFORMS;

/// One guessed profile URL. `status` is always `potential_match`: these are
/// synthesized candidates, not verified accounts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SocialHit {
    pub platform: String,
    pub url: String,
    pub status: String,
}

/// Builds one candidate profile URL per known platform. Pure; no requests
/// are made and nothing is verified.
#[must_use]
pub fn social_candidates(username: &str) -> Vec<SocialHit> {
    PLATFORMS
        .iter()
        .map(|platform| SocialHit {
            platform: (*platform).to_string(),
            url: format!("https://{platform}.com/{username}"),
            status: "potential_match".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_candidate_per_platform() {
        let hits = social_candidates("alice");
        assert_eq!(hits.len(), 6);

        let platforms: Vec<&str> = hits.iter().map(|h| h.platform.as_str()).collect();
        assert_eq!(
            platforms,
            vec!["twitter", "instagram", "facebook", "github", "linkedin", "tiktok"]
        );

        for hit in &hits {
            assert_eq!(hit.status, "potential_match");
            assert_eq!(hit.url, format!("https://{}.com/alice", hit.platform));
        }
    }

    #[test]
    fn candidates_are_deterministic() {
        assert_eq!(social_candidates("bob"), social_candidates("bob"));
    }
}
