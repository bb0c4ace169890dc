//! Sesión de reproducción de un curso: índice de contenido, desbloqueo,
//! selección, avance automático, búsqueda y marcadores.
//!
//! Se construye al abrir un curso y se descarta al salir de él. Todas las
//! guardas (carga única del curso y de los quizzes, avance automático) son
//! campos de la sesión.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use log::{debug, info, warn};

use crate::auto_advance::{AutoAdvanceScheduler, CompletionOutcome};
use crate::callbacks::PlayerCallbacks;
use crate::content_index::ContentIndex;
use crate::data::CourseApi;
use crate::error::CourseResult;
use crate::model::{ContentItem, CourseDetail, LessonId, QuizOpen, QuizRef};
use crate::search::Bookmarks;
use crate::selection::SelectionController;
use crate::unlock::UnlockPolicy;

// Submódulos
pub mod completion;
pub mod fetch;
pub mod navigation;
pub mod queries;
pub mod view_models;


/// Respuestas de la API que vuelven al hilo de la interfaz.
#[derive(Debug)]
pub enum FetchResult {
    Course(String, CourseResult<CourseDetail>),
    Quizzes(LessonId, CourseResult<Vec<QuizRef>>),
}

pub struct CourseSession {
    course_id: String,
    api: Arc<dyn CourseApi>,
    course: Option<CourseDetail>,
    quizzes: HashMap<LessonId, Vec<QuizRef>>,
    index: ContentIndex,
    unlock: UnlockPolicy,
    completed: HashSet<LessonId>,
    bookmarks: Bookmarks,
    selection: SelectionController,
    advance: AutoAdvanceScheduler,
    course_requested: bool,
    quiz_requested: HashSet<LessonId>,
    first_video_initialized: bool,
    // Lección a restaurar cuando llegue el curso
    restore_lesson: Option<LessonId>,
    fetch_error: Option<String>,
    tx: Sender<FetchResult>,
    rx: Receiver<FetchResult>,
}

impl CourseSession {
    pub fn new(course_id: impl Into<String>, api: Arc<dyn CourseApi>, advance_delay_ms: u64) -> Self {
        let (tx, rx) = channel();
        Self {
            course_id: course_id.into(),
            api,
            course: None,
            quizzes: HashMap::new(),
            index: ContentIndex::default(),
            unlock: UnlockPolicy::default(),
            completed: HashSet::new(),
            bookmarks: Bookmarks::default(),
            selection: SelectionController::default(),
            advance: AutoAdvanceScheduler::new(advance_delay_ms),
            course_requested: false,
            quiz_requested: HashSet::new(),
            first_video_initialized: false,
            restore_lesson: None,
            fetch_error: None,
            tx,
            rx,
        }
    }

    /// Estado guardado de una sesión anterior (marcadores y última lección).
    pub fn restore(&mut self, bookmarks: Bookmarks, last_lesson: Option<LessonId>) {
        self.bookmarks = bookmarks;
        self.restore_lesson = last_lesson;
    }

    /// Reconstruye el índice completo. Nunca se modifica en sitio.
    fn rebuild_index(&mut self, callbacks: &mut impl PlayerCallbacks) {
        let topics = self
            .course
            .as_ref()
            .map(|c| c.topics.as_slice())
            .unwrap_or(&[]);
        self.index = ContentIndex::build(topics, &self.quizzes);
        self.unlock = UnlockPolicy::new(&self.index.video_sequence);
        debug!(
            "Índice reconstruido: {} filas, {} vídeos",
            self.index.items.len(),
            self.index.video_sequence.len()
        );
        callbacks.on_total_lessons(self.index.total_lessons());
        self.init_first_video(callbacks);
    }

    /// Elige el primer vídeo a mostrar una única vez por sesión: la lección
    /// restaurada si sigue existiendo, si no el primer vídeo desbloqueado sin
    /// completar, y si todo está hecho el primero del curso.
    fn init_first_video(&mut self, callbacks: &mut impl PlayerCallbacks) {
        if self.first_video_initialized || self.selection.selected().is_some() {
            return;
        }

        let restored = self
            .restore_lesson
            .as_ref()
            .and_then(|id| self.index.video_of(id))
            .filter(|item| self.unlock.is_unlocked(item.lesson_id(), &self.completed));
        let resume = self.index.items.iter().find(|item| {
            item.is_video()
                && !self.completed.contains(item.lesson_id())
                && self.unlock.is_unlocked(item.lesson_id(), &self.completed)
        });

        let Some(item) = restored.or(resume).or_else(|| self.index.first_video()) else {
            return;
        };
        let (Some(url), lesson_id, topic) = (
            item.video_url().map(str::to_owned),
            item.lesson_id().clone(),
            item.topic_index(),
        ) else {
            return;
        };

        self.first_video_initialized = true;
        info!("Primer vídeo: {lesson_id}");
        callbacks.on_init_first_video(&url, &lesson_id);
        self.selection.select(lesson_id, topic);
    }
}
