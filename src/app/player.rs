use super::*;

/// Estado del reproductor que reciben los callbacks de la sesión.
#[derive(Default, Debug, Clone)]
pub struct PlayerState {
    pub video_url: Option<String>,
    pub lesson_id: Option<LessonId>,
    pub loading_next: bool,
    pub total_lessons: usize,
    pub open_quiz: Option<QuizOpen>,
    /// Documento a abrir en el próximo frame
    pub pending_url: Option<String>,
    pub message: String,
}

impl PlayerCallbacks for PlayerState {
    fn on_select_video(&mut self, video_url: &str, lesson_id: &LessonId) {
        self.video_url = Some(video_url.to_owned());
        self.lesson_id = Some(lesson_id.clone());
        self.open_quiz = None;
    }

    fn on_select_lesson_id(&mut self, lesson_id: &LessonId) {
        self.lesson_id = Some(lesson_id.clone());
        self.message.clear();
    }

    fn on_init_first_video(&mut self, video_url: &str, lesson_id: &LessonId) {
        self.video_url = Some(video_url.to_owned());
        self.lesson_id = Some(lesson_id.clone());
    }

    fn on_total_lessons(&mut self, count: usize) {
        self.total_lessons = count;
    }

    fn set_is_loading_next(&mut self, loading: bool) {
        self.loading_next = loading;
    }

    fn on_open_lesson_quiz(&mut self, quiz: QuizOpen) {
        self.open_quiz = Some(quiz);
    }

    fn on_open_document(&mut self, url: &str) {
        self.pending_url = Some(url.to_owned());
    }
}
