// Configuration type definitions

use serde::Deserialize;

/// Default minimum number of characters before term suggestions are fetched
pub const DEFAULT_MINIMUM_TRIGGER_LENGTH: usize = 2;

/// Default debounce quiet window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// How a navigation target is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OpenBehavior {
    /// Replace the current page
    #[default]
    SameTab,
    /// Open a new browsing context
    NewTab,
}

impl OpenBehavior {
    /// Window target name used by browsers for this behavior
    pub fn target(&self) -> &'static str {
        match self {
            OpenBehavior::SameTab => "_self",
            OpenBehavior::NewTab => "_blank",
        }
    }
}

/// Where the query text goes in a new-page search URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QueryPathBehavior {
    /// Append `?<parameter>=<text>` to the page URL
    #[default]
    QueryParameter,
    /// Put the encoded text in the URL fragment (`#<text>`)
    UrlFragment,
}

/// Engine behavior options
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub enable_suggestions: bool,
    pub enable_enhancement: bool,
    /// Passed through to the enhancement service
    pub is_staging: bool,
    pub minimum_trigger_length: usize,
    pub debounce_ms: u64,
    pub search_in_new_page: bool,
    pub page_url: Option<String>,
    pub query_string_parameter: String,
    pub open_behavior: OpenBehavior,
    pub query_path_behavior: QueryPathBehavior,
    /// Percent-encoded input value shown when the engine mounts
    pub initial_input: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            enable_suggestions: true,
            enable_enhancement: false,
            is_staging: false,
            minimum_trigger_length: DEFAULT_MINIMUM_TRIGGER_LENGTH,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            search_in_new_page: false,
            page_url: None,
            query_string_parameter: "q".to_string(),
            open_behavior: OpenBehavior::SameTab,
            query_path_behavior: QueryPathBehavior::QueryParameter,
            initial_input: None,
        }
    }
}

/// Query enhancement service section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnhancementConfig {
    pub endpoint: Option<String>,
    pub timeout_ms: u64,
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        EnhancementConfig {
            endpoint: None,
            timeout_ms: 5000,
        }
    }
}

/// A statically configured suggestion provider
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub zero_term: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: EngineConfig,
    #[serde(default)]
    pub enhancement: EnhancementConfig,
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
}
