use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Connection settings for one account on the remote service.
///
/// Handed to a driver when it is constructed; nothing in the core reads
/// ambient configuration.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Account subdomain, e.g. `acme` for `acme.quickbase.com`
    pub realm: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_token: Option<String>,
}

/// Credentials are redacted; configs end up in debug logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &Option<String>) -> Option<&'static str> {
            value.as_ref().map(|_| "<redacted>")
        }

        f.debug_struct("Config")
            .field("realm", &self.realm)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("app_token", &redact(&self.app_token))
            .finish()
    }
}

impl Config {
    pub const ENV_REALM: &'static str = "QB_REALM";
    pub const ENV_USERNAME: &'static str = "QB_USERNAME";
    pub const ENV_PASSWORD: &'static str = "QB_PASSWORD";
    pub const ENV_APP_TOKEN: &'static str = "QB_APP_TOKEN";

    pub fn new(realm: impl Into<String>) -> Config {
        Config {
            realm: realm.into(),
            ..Config::default()
        }
    }

    /// Read the configuration from `QB_REALM`, `QB_USERNAME`, `QB_PASSWORD`
    /// and `QB_APP_TOKEN`. Only the realm is required.
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let Some(realm) = lookup(Self::ENV_REALM).filter(|realm| !realm.trim().is_empty()) else {
            return Err(Error::invalid_argument(format!(
                "{} is not set",
                Self::ENV_REALM
            )));
        };

        Ok(Config {
            realm,
            username: lookup(Self::ENV_USERNAME),
            password: lookup(Self::ENV_PASSWORD),
            app_token: lookup(Self::ENV_APP_TOKEN),
        })
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn app_token(mut self, app_token: impl Into<String>) -> Self {
        self.app_token = Some(app_token.into());
        self
    }

    /// Base URL of the realm, `https://<realm>.quickbase.com/`.
    pub fn base_url(&self) -> Result<Url> {
        let realm = self.realm.trim();

        if realm.is_empty() {
            return Err(Error::invalid_argument("realm must not be empty"));
        }

        if !realm
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            return Err(Error::invalid_argument(format!(
                "realm `{realm}` is not a valid subdomain"
            )));
        }

        Url::parse(&format!("https://{realm}.quickbase.com/")).map_err(|err| {
            Error::invalid_argument(format!("realm `{realm}` does not form a valid URL: {err}"))
        })
    }
}
