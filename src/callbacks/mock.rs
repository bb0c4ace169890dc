use super::PlayerCallbacks;
use crate::model::{LessonId, QuizOpen};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    SelectVideo(String, LessonId),
    SelectLesson(LessonId),
    InitFirstVideo(String, LessonId),
    TotalLessons(usize),
    LoadingNext(bool),
    OpenQuiz(QuizOpen),
    OpenDocument(String),
}

/// Guarda cada llamada en orden para inspeccionarla en los tests.
#[derive(Default, Debug)]
pub(crate) struct RecordingCallbacks {
    pub calls: Vec<Call>,
}

impl RecordingCallbacks {
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl PlayerCallbacks for RecordingCallbacks {
    fn on_select_video(&mut self, video_url: &str, lesson_id: &LessonId) {
        self.calls
            .push(Call::SelectVideo(video_url.to_owned(), lesson_id.clone()));
    }

    fn on_select_lesson_id(&mut self, lesson_id: &LessonId) {
        self.calls.push(Call::SelectLesson(lesson_id.clone()));
    }

    fn on_init_first_video(&mut self, video_url: &str, lesson_id: &LessonId) {
        self.calls
            .push(Call::InitFirstVideo(video_url.to_owned(), lesson_id.clone()));
    }

    fn on_total_lessons(&mut self, count: usize) {
        self.calls.push(Call::TotalLessons(count));
    }

    fn set_is_loading_next(&mut self, loading: bool) {
        self.calls.push(Call::LoadingNext(loading));
    }

    fn on_open_lesson_quiz(&mut self, quiz: QuizOpen) {
        self.calls.push(Call::OpenQuiz(quiz));
    }

    fn on_open_document(&mut self, url: &str) {
        self.calls.push(Call::OpenDocument(url.to_owned()));
    }
}
