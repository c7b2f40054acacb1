use lp_wealth_data::providers::{DEFILLAMA_BASE_URL, GECKOTERMINAL_BASE_URL};
use std::env;

/// API endpoints, overridable from the environment or `.env`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub defillama_base_url: String,
    pub geckoterminal_base_url: String,
}

impl ApiConfig {
    /// Reads `DEFILLAMA_BASE_URL` and `GECKOTERMINAL_BASE_URL`, falling back
    /// to the public endpoints.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            defillama_base_url: lookup("DEFILLAMA_BASE_URL")
                .unwrap_or_else(|| DEFILLAMA_BASE_URL.to_string()),
            geckoterminal_base_url: lookup("GECKOTERMINAL_BASE_URL")
                .unwrap_or_else(|| GECKOTERMINAL_BASE_URL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_overrides() {
        let defaults = ApiConfig::from_lookup(|_| None);
        assert_eq!(defaults.defillama_base_url, DEFILLAMA_BASE_URL);
        assert_eq!(defaults.geckoterminal_base_url, GECKOTERMINAL_BASE_URL);

        let custom = ApiConfig::from_lookup(|key| {
            (key == "DEFILLAMA_BASE_URL").then(|| "http://localhost:8080".to_string())
        });
        assert_eq!(custom.defillama_base_url, "http://localhost:8080");
        assert_eq!(custom.geckoterminal_base_url, GECKOTERMINAL_BASE_URL);
    }
}
