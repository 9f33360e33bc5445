/// Problems with the command line or environment that prevent any check from running
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("No API key defined: set the CRUX_API_KEY environment variable")]
    MissingApiKey,

    #[error("No URLs to check: pass one or more comma-separated URLs with --urls")]
    NoUrls,
}

/// Resolved settings for a run, built once at start-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_key: String,

    /// URLs to check, in the order given
    pub urls: Vec<String>,

    pub verbose: bool,
}

impl RuntimeConfig {
    /// Validate raw settings.
    ///
    /// Surrounding whitespace is removed from each URL and blank entries are dropped, so
    /// `-u "a, b,"` checks `a` and `b`. The URLs are otherwise left as given.
    pub fn new<I, S>(api_key: Option<&str>, urls: I, verbose: bool) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let api_key = api_key.map(str::trim).filter(|key| !key.is_empty()).ok_or(ConfigError::MissingApiKey)?;

        let urls: Vec<String> = urls
            .into_iter()
            .map(|url| url.as_ref().trim().to_string())
            .filter(|url| !url.is_empty())
            .collect();

        if urls.is_empty() {
            return Err(ConfigError::NoUrls);
        }

        Ok(Self {
            api_key: api_key.to_string(),
            urls,
            verbose,
        })
    }
}
