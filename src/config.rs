//! Configuración del reproductor, leída de YAML.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::auto_advance::DEFAULT_ADVANCE_DELAY_MS;
use crate::error::{CourseError, CourseResult};

pub const CONFIG_ENV_VAR: &str = "COURSE_PLAYER_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Curso que se abre al arrancar
    pub course_id: String,
    /// Catálogo YAML alternativo; si falta se usa el embebido
    pub course_file: Option<PathBuf>,
    pub auto_advance_delay_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            course_id: "curso-c".to_owned(),
            course_file: None,
            auto_advance_delay_ms: DEFAULT_ADVANCE_DELAY_MS,
        }
    }
}

impl PlayerConfig {
    pub fn from_yaml_str(text: &str) -> CourseResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> CourseResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| CourseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        info!("Configuración cargada de {}", path.display());
        Ok(config)
    }

    /// Lee la ruta de `COURSE_PLAYER_CONFIG`. Sin variable o sin fichero: valores por defecto.
    pub fn from_env() -> CourseResult<Self> {
        let Ok(path) = env::var(CONFIG_ENV_VAR) else {
            return Ok(Self::default());
        };
        let path = PathBuf::from(path);
        if !path.exists() {
            warn!("{} no existe, se usa la configuración por defecto", path.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = PlayerConfig::from_yaml_str("course_id: rust-basico\n").unwrap();
        assert_eq!(cfg.course_id, "rust-basico");
        assert_eq!(cfg.auto_advance_delay_ms, 1_500);
        assert_eq!(cfg.course_file, None);
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let err = PlayerConfig::from_yaml_str("auto_advance_delay_ms: [1, 2").unwrap_err();
        assert!(matches!(err, CourseError::Parse(_)));
    }

    #[test]
    fn unreadable_file_reports_its_path() {
        let err = PlayerConfig::load(Path::new("/no/existe/player.yaml")).unwrap_err();
        assert!(err.to_string().contains("/no/existe/player.yaml"));
    }
}
