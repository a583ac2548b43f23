use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_slice, to_string_pretty};

use super::types::Config;

const CONFIG_PATH: &str = "config.json";

/// Settings persisted as JSON files in one directory
#[derive(Clone, Debug)]
pub struct Repository {
    directory: PathBuf,
}

impl Repository {
    /// Uses the platform config directory
    pub fn new() -> Result<Self, String> {
        Ok(Self::with_directory(data_directory()?))
    }

    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Missing file means default settings, a broken one is an error
    pub fn config(&self) -> Result<Config, String> {
        Ok(read(&self.directory, CONFIG_PATH)?.unwrap_or_default())
    }

    pub fn set_config(&self, config: &Config) -> Result<(), String> {
        write(&self.directory, CONFIG_PATH, config).map_err(|e| {
            log::error!("Could not save config: {e}");
            e
        })
    }
}

fn read<T: DeserializeOwned>(directory: &Path, name: &str) -> Result<Option<T>, String> {
    let data_path = directory.join(name);
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(&data_path)
        .map_err(|e| format!("Could not read {}: {e:?}", data_path.display()))?;
    let obj: T =
        from_slice(&data).map_err(|e| format!("Could not parse {}: {e}", data_path.display()))?;
    Ok(Some(obj))
}

fn write<T: Serialize>(directory: &Path, name: &str, value: &T) -> Result<(), String> {
    if !directory.exists() {
        std::fs::create_dir_all(directory)
            .map_err(|e| format!("Could not create directory {}: {e:?}", directory.display()))?;
    }
    let data_path = directory.join(name);
    let data = to_string_pretty(&value).map_err(|e| format!("Could not encode value:{e:?}"))?;
    std::fs::write(&data_path, data)
        .map_err(|e| format!("Could not write to {}: {e:?}", data_path.display()))?;
    Ok(())
}

fn data_directory() -> Result<PathBuf, String> {
    use directories_next::ProjectDirs;
    let proj_dirs = ProjectDirs::from("com", "postboard", "postboard")
        .ok_or_else(|| "Couldn't find a folder to save data".to_string())?;
    Ok(proj_dirs.config_dir().to_path_buf())
}
