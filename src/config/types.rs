use std::time::Duration;

/// URLs processed by a default run
pub const DEFAULT_URLS: &[&str] = &[
    "https://example.com",
    "https://golang.org",
    "https://google.com",
    "https://github.com",
    "https://news.ycombinator.com",
];

/// Number of concurrent workers in a default run
pub const DEFAULT_WORKER_COUNT: usize = 3;

/// Overall deadline of a default run, measured from pipeline start
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(5);

/// Main configuration structure for Title-Scout
#[derive(Debug, Clone)]
pub struct Config {
    /// URLs to fetch, in emission order
    pub urls: Vec<String>,

    /// Number of concurrent workers
    pub worker_count: usize,

    /// Overall deadline; zero means the run starts already cancelled
    pub deadline: Duration,

    /// HTTP client settings
    pub fetch: FetchConfig,
}

impl Config {
    /// Creates a configuration for the given URLs with default worker count,
    /// deadline and HTTP settings
    pub fn with_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: DEFAULT_URLS.iter().map(|u| u.to_string()).collect(),
            worker_count: DEFAULT_WORKER_COUNT,
            deadline: DEFAULT_DEADLINE,
            fetch: FetchConfig::default(),
        }
    }
}

/// HTTP fetcher configuration
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Maximum time to establish a connection
    pub connect_timeout: Duration,

    /// Maximum time for a whole request, body included
    pub request_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("TitleScout/{}", env!("CARGO_PKG_VERSION")),
            connect_timeout: Duration::from_secs(3),
            request_timeout: Duration::from_secs(10),
        }
    }
}
