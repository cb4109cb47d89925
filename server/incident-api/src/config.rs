//! Process configuration, read from the environment once at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
  /// PostgreSQL connection string (`DATABASE_URL`).
  pub database_url: String,
  /// Listen address (`HOST`, `PORT`).
  pub listen_addr: SocketAddr,
  /// Pool size (`DATABASE_MAX_CONNECTIONS`).
  pub database_max_connections: u32,
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Build from any variable source; `lookup` returns `None` for unset names.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let database_url = lookup("DATABASE_URL")
      .filter(|v| !v.is_empty())
      .ok_or(ConfigError::Missing("DATABASE_URL"))?;

    let host: IpAddr = parse_or("HOST", lookup("HOST"), DEFAULT_HOST)?;
    let port: u16 = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
    let database_max_connections: u32 = parse_or(
      "DATABASE_MAX_CONNECTIONS",
      lookup("DATABASE_MAX_CONNECTIONS"),
      DEFAULT_MAX_CONNECTIONS,
    )?;
    if database_max_connections == 0 {
      return Err(ConfigError::Invalid {
        name: "DATABASE_MAX_CONNECTIONS",
        value: "0".into(),
        reason: "must be at least 1".into(),
      });
    }

    Ok(Self {
      database_url,
      listen_addr: SocketAddr::new(host, port),
      database_max_connections,
    })
  }

  /// Database URL with the password replaced, safe for logs.
  pub fn database_url_masked(&self) -> String {
    mask_password(&self.database_url)
  }
}

fn parse_or<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
{
  match raw {
    None => Ok(default),
    Some(value) => match value.parse::<T>() {
      Ok(parsed) => Ok(parsed),
      Err(e) => Err(ConfigError::Invalid {
        name,
        reason: e.to_string(),
        value,
      }),
    },
  }
}

fn mask_password(url: &str) -> String {
  let Some((scheme, rest)) = url.split_once("://") else {
    return url.to_string();
  };
  let Some((userinfo, host)) = rest.rsplit_once('@') else {
    return url.to_string();
  };
  match userinfo.split_once(':') {
    Some((user, _)) => format!("{scheme}://{user}:****@{host}"),
    None => url.to_string(),
  }
}
