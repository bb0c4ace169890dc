//! Errores del reproductor de cursos.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fallos al obtener o leer datos del curso y de la configuración.
#[derive(Error, Debug)]
pub enum CourseError {
    #[error("No se pudo leer {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("YAML inválido: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Curso no encontrado: {0}")]
    CourseNotFound(String),

    /// Para implementaciones remotas de la API
    #[error("Servicio de cursos no disponible: {0}")]
    Unavailable(String),
}

pub type CourseResult<T> = Result<T, CourseError>;
