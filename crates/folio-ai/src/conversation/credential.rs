//! Where the API key comes from.

/// Environment variable read when none is configured.
pub const DEFAULT_API_KEY_VAR: &str = "API_KEY";

/// Source of the service credential, resolved at the start of every turn
/// so a key supplied after startup is picked up.
#[derive(Clone)]
pub enum ApiKeySource {
    /// Read the named environment variable.
    Env(String),
    /// A key supplied directly (or explicitly absent).
    Fixed(Option<String>),
}

impl std::fmt::Debug for ApiKeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env(var) => f.debug_tuple("Env").field(var).finish(),
            Self::Fixed(key) => f
                .debug_tuple("Fixed")
                .field(&key.as_ref().map(|_| "[REDACTED]"))
                .finish(),
        }
    }
}

impl Default for ApiKeySource {
    fn default() -> Self {
        Self::Env(DEFAULT_API_KEY_VAR.to_string())
    }
}

impl ApiKeySource {
    /// Name shown to the user when the key is missing.
    pub fn var_name(&self) -> &str {
        match self {
            Self::Env(var) => var,
            Self::Fixed(_) => DEFAULT_API_KEY_VAR,
        }
    }

    /// The key, if present and not blank.
    pub fn resolve(&self) -> Option<String> {
        self.resolve_with(|var| std::env::var(var).ok())
    }

    /// Like [`ApiKeySource::resolve`], reading variables through `lookup`.
    pub(crate) fn resolve_with<F>(&self, lookup: F) -> Option<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let key = match self {
            Self::Env(var) => lookup(var),
            Self::Fixed(key) => key.clone(),
        }?;
        let key = key.trim();
        (!key.is_empty()).then(|| key.to_string())
    }
}
