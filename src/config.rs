use std::{
    fs::{create_dir_all, File},
    io::{BufReader, Write},
    path::PathBuf,
};

use frethero::FretError;
use home::home_dir;
use serde::{Deserialize, Serialize};

/// Local user preferences remembered between sessions.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    library_file: Option<PathBuf>,
    tempo_seconds: Option<f32>,
}

impl Config {
    // folder placed in $HOME directory
    const FOLDER: &'static str = ".frethero";

    pub fn get_library_file(&self) -> Option<PathBuf> {
        self.library_file.clone()
    }

    pub fn set_library_file(&mut self, new_library_file: Option<PathBuf>) -> Result<(), FretError> {
        if self.library_file == new_library_file {
            // no op
            Ok(())
        } else {
            self.library_file = new_library_file;
            self.save_config()
        }
    }

    pub const fn get_tempo_seconds(&self) -> Option<f32> {
        self.tempo_seconds
    }

    pub fn set_tempo_seconds(&mut self, new_tempo_seconds: Option<f32>) -> Result<(), FretError> {
        if self.tempo_seconds == new_tempo_seconds {
            // no op
            Ok(())
        } else {
            self.tempo_seconds = new_tempo_seconds;
            self.save_config()
        }
    }

    fn get_base_path() -> Result<PathBuf, FretError> {
        let home = home_dir()
            .ok_or_else(|| FretError::ConfigError("Could not find home directory".to_string()))?;
        let path = home.join(Self::FOLDER);
        Ok(path)
    }

    fn get_path() -> Result<PathBuf, FretError> {
        let base = Self::get_base_path()?;
        Ok(base.join("config.json"))
    }

    /// Creates config if it does not exist
    pub fn read_config() -> Result<Self, FretError> {
        let base_path = Self::get_base_path()?;
        if !base_path.exists() {
            create_dir_all(base_path)?;
        }
        let config_path = Self::get_path()?;
        if !config_path.exists() {
            // create empty config
            Config::default().save_config()?;
        }
        let file = File::open(config_path)?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader).map_err(|err| {
            FretError::ConfigError(format!("Could not read local configuration {err:}"))
        })?;
        Ok(config)
    }

    /// Assumes the config folder exists
    pub fn save_config(&self) -> Result<(), FretError> {
        let config_path = Self::get_path()?;
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            FretError::ConfigError(format!("Could not save local configuration {err:}"))
        })?;
        let mut file = File::create(config_path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
