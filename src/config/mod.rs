use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub schema: SchemaConfig,
    pub catalog: CatalogConfig,
    pub imports: ImportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub verify_tls: bool,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    pub data_containers_csv: PathBuf,
    pub container_visibility_csv: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::defaults().with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Schema overrides
        if let Ok(v) = env::var("RIDL_SCHEMA_INPUT") {
            self.schema.input_path = PathBuf::from(v);
        }
        if let Ok(v) = env::var("RIDL_SCHEMA_OUTPUT") {
            self.schema.output_path = PathBuf::from(v);
        }

        // Catalog overrides
        if let Ok(v) = env::var("RIDL_CATALOG_VERIFY_TLS") {
            self.catalog.verify_tls = v.parse().unwrap_or(self.catalog.verify_tls);
        }
        if let Ok(v) = env::var("RIDL_CATALOG_TIMEOUT_SECS") {
            self.catalog.timeout_secs = v.parse().unwrap_or(self.catalog.timeout_secs);
        }

        // Import overrides
        if let Ok(v) = env::var("RIDL_DATA_CONTAINERS_CSV") {
            self.imports.data_containers_csv = PathBuf::from(v);
        }
        if let Ok(v) = env::var("RIDL_CONTAINER_VISIBILITY_CSV") {
            self.imports.container_visibility_csv = PathBuf::from(v);
        }

        self
    }

    fn defaults() -> Self {
        Self {
            schema: SchemaConfig {
                input_path: PathBuf::from("ckanext/unhcr/schemas/dataset.json"),
                output_path: PathBuf::from("ckanext/unhcr/schemas/deposited_dataset.json"),
            },
            catalog: CatalogConfig {
                verify_tls: true,
                timeout_secs: 30,
            },
            imports: ImportConfig {
                data_containers_csv: PathBuf::from("scripts/initial_data_container_list_feb_2018.csv"),
                container_visibility_csv: PathBuf::from("scripts/update_container_visibility_aug2020.csv"),
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = AppConfig::defaults();
        assert_eq!(config.schema.input_path, PathBuf::from("ckanext/unhcr/schemas/dataset.json"));
        assert_eq!(
            config.schema.output_path,
            PathBuf::from("ckanext/unhcr/schemas/deposited_dataset.json")
        );
        assert!(config.imports.data_containers_csv.ends_with("initial_data_container_list_feb_2018.csv"));
    }

    #[test]
    fn test_default_catalog_settings() {
        let config = AppConfig::defaults();
        assert!(config.catalog.verify_tls);
        assert_eq!(config.catalog.timeout_secs, 30);
    }
}
