use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::error::AppError;
use crate::store::SupabaseConfig;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://uisyllabi.db";
pub const DEFAULT_COURSES_TABLE: &str = "courses";

#[derive(Clone, Debug)]
pub enum StoreBackend {
    Supabase(SupabaseConfig),
    Sqlite { database_url: String },
}

impl StoreBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Supabase(_) => "supabase",
            StoreBackend::Sqlite { .. } => "sqlite",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub backend: StoreBackend,
    pub courses_table: String,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::new_from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = SocketAddr::from_str(&bind_addr)
            .map_err(|e| AppError::Config(format!("BIND_ADDR {:?} is invalid: {}", bind_addr, e)))?;

        let backend = match lookup("STORE_BACKEND").as_deref().unwrap_or("supabase") {
            "supabase" => {
                let url = lookup("SUPABASE_URL")
                    .ok_or_else(|| AppError::Config("SUPABASE_URL is not set".to_string()))?;
                let anon_key = lookup("SUPABASE_ANON_KEY")
                    .ok_or_else(|| AppError::Config("SUPABASE_ANON_KEY is not set".to_string()))?;
                StoreBackend::Supabase(SupabaseConfig {
                    url: url.trim_end_matches('/').to_string(),
                    anon_key,
                })
            }
            "sqlite" => StoreBackend::Sqlite {
                database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            },
            other => {
                return Err(AppError::Config(format!(
                    "STORE_BACKEND must be \"supabase\" or \"sqlite\", got {:?}",
                    other
                )));
            }
        };

        let courses_table = lookup("COURSES_TABLE").unwrap_or_else(|| DEFAULT_COURSES_TABLE.to_string());
        crate::store::validate_table(&courses_table)
            .map_err(|e| AppError::Config(format!("COURSES_TABLE: {}", e)))?;

        Ok(Self {
            bind_addr,
            backend,
            courses_table,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_supabase_defaults() {
        let cfg = config(&[
            ("SUPABASE_URL", "https://abc.supabase.co/"),
            ("SUPABASE_ANON_KEY", "anon"),
        ])
        .expect("config");
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.courses_table, "courses");
        match cfg.backend {
            StoreBackend::Supabase(s) => {
                assert_eq!(s.url, "https://abc.supabase.co");
                assert_eq!(s.anon_key, "anon");
            }
            other => panic!("unexpected backend {:?}", other),
        }
    }

    #[test]
    fn test_supabase_requires_credentials() {
        let err = config(&[("SUPABASE_URL", "https://abc.supabase.co")]).unwrap_err();
        assert!(err.to_string().contains("SUPABASE_ANON_KEY"));
    }

    #[test]
    fn test_sqlite_backend() {
        let cfg = config(&[
            ("STORE_BACKEND", "sqlite"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("COURSES_TABLE", "syllabi"),
        ])
        .expect("config");
        assert_eq!(cfg.backend.name(), "sqlite");
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.courses_table, "syllabi");
        assert!(matches!(
            cfg.backend,
            StoreBackend::Sqlite { ref database_url } if database_url == DEFAULT_DATABASE_URL
        ));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(config(&[("STORE_BACKEND", "mongo")]).is_err());
        assert!(config(&[("STORE_BACKEND", "sqlite"), ("BIND_ADDR", "nowhere")]).is_err());
        assert!(config(&[("STORE_BACKEND", "sqlite"), ("COURSES_TABLE", "a b")]).is_err());
    }
}
