use crate::query::ComparatorPolicy;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct LinguaConfig {
    pub database_url: String,
    pub pool: PoolConfig,
    pub bind_addr: String,
    pub frontend_path: PathBuf,
    pub comparator_policy: ComparatorPolicy,
    pub shutdown_grace: Duration,
}

/// Connection pool bounds. Growth beyond `min_connections` happens on demand,
/// one connection per waiting request, up to `max_connections`.
#[derive(Clone, Debug)]
pub struct PoolConfig {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_connections: 1,
            max_connections: 3,
            acquire_timeout: Duration::from_secs(60),
            idle_timeout: Duration::from_secs(60),
        }
    }
}

impl LinguaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PoolConfig::default();

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://lingua.db".to_string());

        let pool = PoolConfig {
            min_connections: parse_or(&lookup, "POOL_MIN_CONNECTIONS", defaults.min_connections),
            max_connections: parse_or(&lookup, "POOL_MAX_CONNECTIONS", defaults.max_connections),
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "POOL_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
            )),
            idle_timeout: Duration::from_secs(parse_or(
                &lookup,
                "POOL_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout.as_secs(),
            )),
        };

        if pool.min_connections > pool.max_connections {
            anyhow::bail!(
                "POOL_MIN_CONNECTIONS ({}) exceeds POOL_MAX_CONNECTIONS ({})",
                pool.min_connections,
                pool.max_connections
            );
        }

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());

        let frontend_path =
            PathBuf::from(lookup("FRONTEND_PATH").unwrap_or_else(|| "./public".to_string()));

        let comparator_policy = match lookup("COMPARATOR_POLICY") {
            Some(raw) => ComparatorPolicy::from_str(&raw)
                .with_context(|| format!("Invalid COMPARATOR_POLICY value '{}'", raw))?,
            None => ComparatorPolicy::default(),
        };

        let shutdown_grace = Duration::from_secs(parse_or(&lookup, "SHUTDOWN_GRACE_SECS", 10));

        Ok(Self {
            database_url,
            pool,
            bind_addr,
            frontend_path,
            comparator_policy,
            shutdown_grace,
        })
    }
}

// unset or unparseable values fall back to the default
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|val| val.trim().parse::<T>().ok())
        .unwrap_or(default)
}
