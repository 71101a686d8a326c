//! Host identity capability.
//!
//! The handler receives the machine's host name from an injected source
//! rather than reaching for process globals, so tests can substitute a
//! fixed value.

/// Source of the machine's network host name.
pub trait HostnameSource: Send + Sync {
    /// Resolve the current host name.
    fn hostname(&self) -> String;
}

/// Resolves the host name from the operating system on every call.
///
/// Resolution failure degrades to an empty string; it never surfaces as
/// a request error.
#[derive(Debug, Clone, Default)]
pub struct SystemHostname;

impl HostnameSource for SystemHostname {
    fn hostname(&self) -> String {
        hostname::get()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Fixed host name for deterministic tests.
#[derive(Debug, Clone)]
pub struct FixedHostname(pub String);

impl HostnameSource for FixedHostname {
    fn hostname(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_returns_its_value() {
        let source = FixedHostname("backend-7".into());
        assert_eq!(source.hostname(), "backend-7");
    }

    #[test]
    fn test_system_source_never_panics() {
        // Value is environment-dependent; only the no-failure contract
        // is checked here.
        let _ = SystemHostname.hostname();
    }
}
