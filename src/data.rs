// src/data.rs

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CourseError, CourseResult};
use crate::model::{CourseDetail, LessonId, QuizRef};

/// API del curso tal como la consume la sesión. Las implementaciones pueden
/// bloquear: la sesión las llama fuera del hilo de la interfaz.
pub trait CourseApi: Send + Sync {
    fn fetch_course_detail(&self, course_id: &str) -> CourseResult<CourseDetail>;
    fn fetch_lesson_quizzes(&self, lesson_id: &LessonId) -> CourseResult<Vec<QuizRef>>;
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CourseCatalog {
    #[serde(default)]
    pub courses: Vec<CourseDetail>,
    /// lección -> quizzes, servidos por `fetch_lesson_quizzes`
    #[serde(default)]
    pub quizzes: HashMap<LessonId, Vec<QuizRef>>,
}

/// Catálogo de cursos en YAML (embebido o desde fichero).
#[derive(Debug, Clone)]
pub struct YamlCourseApi {
    catalog: CourseCatalog,
}

impl YamlCourseApi {
    pub fn new(catalog: CourseCatalog) -> Self {
        Self { catalog }
    }

    pub fn from_yaml_str(text: &str) -> CourseResult<Self> {
        Ok(Self::new(serde_yaml::from_str(text)?))
    }

    /// Carga el catálogo embebido en el binario
    pub fn embedded() -> CourseResult<Self> {
        Self::from_yaml_str(include_str!("data/course.yaml"))
    }

    pub fn load(path: &Path) -> CourseResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| CourseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }
}

impl CourseApi for YamlCourseApi {
    fn fetch_course_detail(&self, course_id: &str) -> CourseResult<CourseDetail> {
        self.catalog
            .courses
            .iter()
            .find(|c| c.id == course_id)
            .cloned()
            .ok_or_else(|| CourseError::CourseNotFound(course_id.to_owned()))
    }

    fn fetch_lesson_quizzes(&self, lesson_id: &LessonId) -> CourseResult<Vec<QuizRef>> {
        Ok(self
            .catalog
            .quizzes
            .get(lesson_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses_and_serves_quizzes() {
        let api = YamlCourseApi::embedded().unwrap();
        let detail = api.fetch_course_detail("curso-c").unwrap();
        assert!(!detail.topics.is_empty());
        let with_quiz = api.catalog().quizzes.keys().next().cloned().unwrap();
        assert!(!api.fetch_lesson_quizzes(&with_quiz).unwrap().is_empty());
    }

    #[test]
    fn unknown_course_is_not_found() {
        let api = YamlCourseApi::from_yaml_str("courses: []").unwrap();
        let err = api.fetch_course_detail("nada").unwrap_err();
        assert!(matches!(err, CourseError::CourseNotFound(id) if id == "nada"));
        assert!(api.fetch_lesson_quizzes(&LessonId::from("x")).unwrap().is_empty());
    }
}
