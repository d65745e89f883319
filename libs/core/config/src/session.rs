use crate::{env_or_default, env_parse_or, ConfigError, Environment, FromEnv};

/// Cookie session settings
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Name of the session cookie
    pub cookie_name: String,
    /// Sessions expire after this many days without a request
    pub inactivity_days: i64,
    /// Whether the cookie is only sent over HTTPS
    pub secure: bool,
}

impl SessionConfig {
    pub fn for_environment(environment: &Environment) -> Self {
        Self {
            secure: environment.use_https(),
            ..Self::default()
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "sid".to_string(),
            inactivity_days: 7,
            secure: false,
        }
    }
}

impl FromEnv for SessionConfig {
    /// - SESSION_COOKIE_NAME: defaults to "sid"
    /// - SESSION_INACTIVITY_DAYS: defaults to 7
    /// - Secure flag follows APP_ENV
    fn from_env() -> Result<Self, ConfigError> {
        let inactivity_days = env_parse_or("SESSION_INACTIVITY_DAYS", 7i64)?;
        if inactivity_days <= 0 {
            return Err(ConfigError::ParseError {
                key: "SESSION_INACTIVITY_DAYS".to_string(),
                details: "must be a positive number of days".to_string(),
            });
        }

        Ok(Self {
            cookie_name: env_or_default("SESSION_COOKIE_NAME", "sid"),
            inactivity_days,
            secure: Environment::from_env().use_https(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_defaults() {
        temp_env::with_vars(
            [
                ("SESSION_COOKIE_NAME", None::<&str>),
                ("SESSION_INACTIVITY_DAYS", None),
                ("APP_ENV", None),
            ],
            || {
                let config = SessionConfig::from_env().unwrap();
                assert_eq!(config.cookie_name, "sid");
                assert_eq!(config.inactivity_days, 7);
                assert!(!config.secure);
            },
        );
    }

    #[test]
    fn test_session_config_secure_in_production() {
        temp_env::with_var("APP_ENV", Some("production"), || {
            assert!(SessionConfig::from_env().unwrap().secure);
        });
    }

    #[test]
    fn test_session_config_rejects_non_positive_days() {
        temp_env::with_var("SESSION_INACTIVITY_DAYS", Some("0"), || {
            let err = SessionConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("SESSION_INACTIVITY_DAYS"));
        });
    }

    #[test]
    fn test_for_environment() {
        assert!(SessionConfig::for_environment(&Environment::Production).secure);
        assert!(!SessionConfig::for_environment(&Environment::Development).secure);
    }
}
