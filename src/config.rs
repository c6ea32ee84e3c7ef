use eyre::{Error, WrapErr};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Default)]
pub struct Config {
    conf: toml::Table,
}

impl Config {
    pub fn load(file_name: impl AsRef<Path>) -> Result<Config, Error> {
        let file_name = file_name.as_ref();
        let content = std::fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        content.parse()
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Config, Error> {
        Ok(Config {
            conf: s.parse::<toml::Table>().wrap_err("cannot parse configuration")?,
        })
    }
}

/// Return the value of `key` in `section` as a string, whatever its TOML type.
pub fn get_config(config: &Config, section: &str, key: &str) -> Option<String> {
    config
        .conf
        .get(section)
        .and_then(|s| s.get(key))
        .map(|v| match v {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}

/// Return the parsed value of `key` in `section`, or `default` if absent.
pub fn get_config_or<T>(config: &Config, section: &str, key: &str, default: T) -> Result<T, Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    get_config(config, section, key).map_or(Ok(default), |v| {
        v.parse::<T>()
            .wrap_err_with(|| format!("cannot parse {section}.{key} configuration parameter"))
    })
}
