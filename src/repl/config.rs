//! Configuration for the interactive loop

/// Environment variable that overrides the default prompt.
pub const PROMPT_ENV: &str = "MYTE_PROMPT";

/// Interactive loop configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Text printed before reading each line
    pub prompt: String,
    /// Whether to print the logo and greeting on start
    pub show_banner: bool,
    /// Whether to print every token of a line before its parse result
    pub show_tokens: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">>".to_string(),
            show_banner: true,
            show_tokens: false,
        }
    }
}

impl ReplConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with overrides taken from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides taken from `lookup` (an environment-like key/value source).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let config = Self::default();
        match lookup(PROMPT_ENV) {
            Some(prompt) if !prompt.is_empty() => config.with_prompt(prompt),
            _ => config,
        }
    }

    /// Set the prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Enable or disable the start-up banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Enable or disable the token dump
    pub fn with_tokens(mut self, show: bool) -> Self {
        self.show_tokens = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReplConfig::default();
        assert_eq!(config.prompt, ">>");
        assert!(config.show_banner);
        assert!(!config.show_tokens);
        assert_eq!(config, ReplConfig::new());
    }

    #[test]
    fn test_builder_chain() {
        let config = ReplConfig::new().with_prompt("myte> ").with_banner(false).with_tokens(true);
        assert_eq!(config.prompt, "myte> ");
        assert!(!config.show_banner);
        assert!(config.show_tokens);
    }

    #[test]
    fn test_prompt_from_lookup() {
        let config = ReplConfig::from_lookup(|key| (key == PROMPT_ENV).then(|| "λ ".to_string()));
        assert_eq!(config.prompt, "λ ");
    }

    #[test]
    fn test_empty_or_missing_prompt_keeps_default() {
        assert_eq!(ReplConfig::from_lookup(|_| None).prompt, ">>");
        assert_eq!(ReplConfig::from_lookup(|_| Some(String::new())).prompt, ">>");
    }
}
