//! `${VAR}` references in `docnav.toml` values.
//!
//! Only the braced forms are recognised, so a literal `$` in a path stays as
//! written. `${VAR:-fallback}` substitutes `fallback` when `VAR` is unset;
//! a bare `${VAR}` that is unset fails with [`ConfigError::EnvVar`] naming
//! the config key it appeared in.

use std::borrow::Cow;
use std::env::VarError;

use crate::ConfigError;

/// Expand environment references in the value of config key `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| std::env::var(name).map(Some))
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: match e.cause {
                VarError::NotPresent => format!("${{{}}} not set", e.var_name),
                VarError::NotUnicode(_) => format!("${{{}}} is not valid unicode", e.var_name),
            },
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Sets a variable for the lifetime of the guard.
    struct ScopedVar(&'static str);

    impl ScopedVar {
        fn set(name: &'static str, value: &str) -> Self {
            // SAFETY: each test uses its own variable name
            unsafe { std::env::set_var(name, value) };
            Self(name)
        }
    }

    impl Drop for ScopedVar {
        fn drop(&mut self) {
            // SAFETY: each test uses its own variable name
            unsafe { std::env::remove_var(self.0) };
        }
    }

    #[test]
    fn test_site_source_from_env() {
        let _dir = ScopedVar::set("DOCNAV_EXPAND_SITE_DIR", "handbook");
        assert_eq!(
            expand_env("${DOCNAV_EXPAND_SITE_DIR}/config.yaml", "site.source").unwrap(),
            "handbook/config.yaml"
        );
    }

    #[test]
    fn test_fallback_when_unset_value_when_set() {
        assert_eq!(
            expand_env("${DOCNAV_EXPAND_FALLBACK:-docs}/site.json", "site.source").unwrap(),
            "docs/site.json"
        );

        let _var = ScopedVar::set("DOCNAV_EXPAND_FALLBACK", "manual");
        assert_eq!(
            expand_env("${DOCNAV_EXPAND_FALLBACK:-docs}/site.json", "site.source").unwrap(),
            "manual/site.json"
        );
    }

    #[test]
    fn test_unset_var_names_key_and_var() {
        let err = expand_env("${DOCNAV_EXPAND_NEVER_SET}/site.json", "site.source").unwrap_err();

        let ConfigError::EnvVar { field, message } = &err else {
            panic!("expected EnvVar error, got {err:?}");
        };
        assert_eq!(field, "site.source");
        assert_eq!(message, "${DOCNAV_EXPAND_NEVER_SET} not set");
    }

    #[test]
    fn test_values_without_braces_are_untouched() {
        for value in ["docs/site.yaml", "$HOME/site.yaml", "cost$5/site.json"] {
            assert_eq!(expand_env(value, "site.source").unwrap(), value);
        }
    }
}
