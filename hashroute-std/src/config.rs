//! Router configuration.

/// Environment variable read by [`RouterConfig::from_env`].
pub const DEFAULT_TOKEN_ENV: &str = "HASHROUTE_DEFAULT_TOKEN";

/// Settings injected into a [`Dispatcher`](crate::Dispatcher).
///
/// # Example
///
/// ```rust,ignore
/// let config = RouterConfig::new().with_default_token("#/home");
/// let dispatcher = Dispatcher::builder().config(config).build()?;
///
/// // Same as dispatch("#/home")
/// dispatcher.dispatch(None)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterConfig {
    default_token: Option<String>,
}

impl RouterConfig {
    /// No default token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the default token from [`DEFAULT_TOKEN_ENV`].
    pub fn from_env() -> Self {
        Self::from_var(DEFAULT_TOKEN_ENV)
    }

    /// Read the default token from the environment variable `name`.
    ///
    /// An unset, empty or non-unicode variable leaves the default unset.
    pub fn from_var(name: &str) -> Self {
        let mut config = Self::new();
        if let Ok(token) = std::env::var(name) {
            config = config.with_default_token(token);
        }
        config
    }

    /// Token dispatched when none (or an empty one) is supplied.
    ///
    /// An empty string is treated as no default.
    pub fn with_default_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.default_token = (!token.is_empty()).then_some(token);
        self
    }

    /// The configured default token.
    pub fn default_token(&self) -> Option<&str> {
        self.default_token.as_deref()
    }

    /// Resolve the token to dispatch: `token` if non-empty, else the default,
    /// else `""`.
    pub fn resolve<'a>(&'a self, token: Option<&'a str>) -> &'a str {
        match token {
            Some(token) if !token.is_empty() => token,
            _ => self.default_token().unwrap_or(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_fallback_chain() {
        let config = RouterConfig::new().with_default_token("#/home");
        assert_eq!(config.resolve(Some("#/items")), "#/items");
        assert_eq!(config.resolve(Some("")), "#/home");
        assert_eq!(config.resolve(None), "#/home");

        let bare = RouterConfig::new();
        assert_eq!(bare.resolve(None), "");
        assert_eq!(bare.resolve(Some("")), "");
    }

    #[test]
    fn test_empty_default_is_unset() {
        let config = RouterConfig::new().with_default_token("");
        assert_eq!(config.default_token(), None);
    }

    #[test]
    fn test_from_var() {
        let name = "HASHROUTE_TEST_DEFAULT_TOKEN_FROM_VAR";
        assert_eq!(RouterConfig::from_var(name).default_token(), None);

        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var(name, "#/dashboard") };
        assert_eq!(
            RouterConfig::from_var(name).default_token(),
            Some("#/dashboard")
        );
        unsafe { std::env::remove_var(name) };
    }
}
