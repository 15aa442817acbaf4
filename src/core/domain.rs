use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub const DEFAULT_PORT: u16 = 3002;
pub const DEFAULT_DB_PATH: &str = "db.json";
pub const DEFAULT_ADMIN_PAGE_PATH: &str = "public/admin.html";

// Identifiable defines common traits that can be shared by persistent objects.
// Stored records are not validated, so an entity may have no usable integer id.
pub trait Identifiable: Sync + Send {
    fn id(&self) -> Option<i64>;
}

// Configuration abstracts config options for the inventory service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub port: u16,
    pub db_path: PathBuf,
    pub admin_page_path: PathBuf,
}

impl Configuration {
    pub fn new(db_path: &str) -> Self {
        Configuration {
            port: DEFAULT_PORT,
            db_path: PathBuf::from(db_path),
            admin_page_path: PathBuf::from(DEFAULT_ADMIN_PAGE_PATH),
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Unset or empty variables fall back to the defaults.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> LibraryResult<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Configuration::new(DEFAULT_DB_PATH);
        if let Some(port) = var("PORT") {
            config.port = port.trim().parse::<u16>().map_err(|err| LibraryError::validation(
                format!("invalid PORT {:?}: {}", port, err).as_str(), Some("PORT".to_string())))?;
        }
        if let Some(path) = var("BOOKS_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }
        if let Some(path) = var("ADMIN_PAGE_PATH") {
            config.admin_page_path = PathBuf::from(path);
        }
        Ok(config)
    }
}
