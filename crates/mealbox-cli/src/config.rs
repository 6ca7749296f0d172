use std::path::{Path, PathBuf};

use anyhow::Context;
use mealbox_lib::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    path: PathBuf,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_favorites_path")]
    pub favorites_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: mealbox_home().join("config.yml"),
            api_url: default_api_url(),
            favorites_path: default_favorites_path(),
        }
    }
}

fn mealbox_home() -> PathBuf {
    match std::env::var("MEALBOX_HOME") {
        Ok(path) => PathBuf::from(path),
        Err(_) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mealbox"),
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_favorites_path() -> PathBuf {
    mealbox_home().join("favorites.json")
}

impl Config {
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> anyhow::Result<Config> {
        let config_path = match path {
            Some(p) => PathBuf::new().join(p),
            None => mealbox_home().join("config.yml"),
        };

        match std::fs::File::open(&config_path) {
            Ok(file) => {
                info!("open config from {:?}", config_path);
                let mut cfg: Self = serde_yml::from_reader(file)
                    .with_context(|| format!("invalid config at {:?}", config_path))?;
                cfg.path = config_path;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Config {
                    path: config_path,
                    ..Default::default()
                };
                cfg.save()?;
                info!("write default config at {:?}", cfg.path);
                Ok(cfg)
            }
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_yml::to_string(&self)?)?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_write_default_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yml");

        let cfg = Config::open(Some(&path)).unwrap();

        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert!(path.exists());
    }

    #[test]
    fn test_read_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(
            &path,
            "api_url: http://localhost:8080/api\nfavorites_path: /tmp/favs.json\n",
        )
        .unwrap();

        let cfg = Config::open(Some(&path)).unwrap();

        assert_eq!(cfg.api_url, "http://localhost:8080/api");
        assert_eq!(cfg.favorites_path, PathBuf::from("/tmp/favs.json"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "favorites_path: favs.json\n").unwrap();

        let cfg = Config::open(Some(&path)).unwrap();

        assert_eq!(cfg.api_url, DEFAULT_API_URL);
    }
}
