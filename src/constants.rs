pub mod limits {

    /// Maximum history entries ever surfaced by the API.
    pub const HISTORY_LIMIT: u64 = 50;

    /// Default entry count for the `history` CLI command.
    pub const DEFAULT_CLI_HISTORY: u64 = 10;
}

pub mod social {

    /// Platforms probed by the social recon stub, in response order.
    pub const PLATFORMS: &[&str] = &[
        "twitter",
        "instagram",
        "facebook",
        "github",
        "linkedin",
        "tiktok",
    ];
}
