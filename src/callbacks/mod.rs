//! Contrato de efectos hacia la capa de presentación.

use crate::model::{LessonId, QuizOpen};

#[cfg(test)]
pub(crate) mod mock;

/// Efectos que la sesión dispara mientras avanza su máquina de estados.
/// La vista los implementa (reproductor, indicador de carga, apertura de quizzes).
pub trait PlayerCallbacks {
    fn on_select_video(&mut self, video_url: &str, lesson_id: &LessonId);
    fn on_select_lesson_id(&mut self, lesson_id: &LessonId);
    fn on_init_first_video(&mut self, video_url: &str, lesson_id: &LessonId);
    fn on_total_lessons(&mut self, count: usize);
    fn set_is_loading_next(&mut self, loading: bool);
    fn on_open_lesson_quiz(&mut self, quiz: QuizOpen);

    fn on_open_document(&mut self, _url: &str) {}
}
