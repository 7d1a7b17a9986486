use std::{collections::BTreeSet, fs};

use camino::Utf8Path;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result};

pub const DEFAULT_CONTAINER: &str = "root";

#[derive(Clone, Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    /// Id of the element the application is mounted into.
    pub container: String,
    /// Render twice and compare before mounting. Defaults to on in debug builds.
    pub strict: Option<bool>,
    #[serde(rename = "profile")]
    pub profiles: IndexMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        let profiles = [
            ("dev", Profile::with_base("./")),
            ("release", Profile::with_base("/testdeploy")),
        ]
        .into_iter()
        .map(|(name, profile)| (name.to_string(), profile))
        .collect();

        Self {
            container: DEFAULT_CONTAINER.to_string(),
            strict: None,
            profiles,
        }
    }
}

#[derive(Clone, Deserialize, PartialEq, Eq, Debug)]
#[serde(default)]
pub struct Profile {
    /// Public base path the rendered shell is served from.
    pub base: String,
}

impl Profile {
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::with_base("/")
    }
}

impl Config {
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;

        let (config, unused) = Self::parse(&contents)?;
        for key in unused {
            log::warn!("{path}: unused config key: {key}");
        }
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let (config, unused) = Self::parse(contents)?;
        for key in unused {
            log::warn!("unused config key: {key}");
        }
        Ok(config)
    }

    fn parse(contents: &str) -> Result<(Self, BTreeSet<String>)> {
        let mut unused = BTreeSet::new();
        let config: Self =
            serde_ignored::deserialize(toml::Deserializer::new(contents), |path| {
                unused.insert(path.to_string());
            })?;
        Ok((config, unused))
    }

    pub fn strict(&self) -> bool {
        self.strict.unwrap_or(cfg!(debug_assertions))
    }

    pub fn profile(&self, name: &str) -> Result<&Profile> {
        self.profiles
            .get(name)
            .ok_or_else(|| Error::UnknownProfile(name.to_string()))
    }

    /// Base path of the named profile, `/` when it isn't configured.
    pub fn base(&self, profile: &str) -> &str {
        self.profiles
            .get(profile)
            .map_or("/", |profile| profile.base.as_str())
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;

    use super::{Config, Profile};
    use crate::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.container, "root");
        assert_eq!(config.strict(), cfg!(debug_assertions));
        assert_eq!(config.base("dev"), "./");
        assert_eq!(config.base("release"), "/testdeploy");
        assert_eq!(config.base("staging"), "/");
    }

    #[test]
    fn profiles_replace_defaults() {
        let config = Config::from_toml(
            r#"
            container = "app"
            strict = false

            [profile.staging]
            base = "/staging/"
            "#,
        )
        .unwrap();

        assert_eq!(config.container, "app");
        assert!(!config.strict());
        assert_eq!(config.profile("staging").unwrap(), &Profile::with_base("/staging/"));
        assert!(matches!(
            config.profile("release"),
            Err(Error::UnknownProfile(name)) if name == "release"
        ));
    }

    #[test]
    fn unknown_keys_are_collected() {
        let (config, unused) = Config::parse(
            r#"
            container = "root"
            port = 3000

            [profile.dev]
            base = "./"
            open = true
            "#,
        )
        .unwrap();

        assert_eq!(config.base("dev"), "./");
        assert_eq!(
            unused.into_iter().collect::<Vec<_>>(),
            ["port", "profile.dev.open"]
        );
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(matches!(
            Config::from_toml("container = 3"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::load(Utf8Path::new("does/not/exist/masthead.toml")).unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(
            err.to_string(),
            "`does/not/exist/masthead.toml` is not a readable config file"
        );
    }
}
