use crate::callbacks::PlayerCallbacks;
use crate::config::PlayerConfig;
use crate::data::CourseApi;
use crate::model::{ContentItem, LessonId, QuizOpen};
use crate::search::Bookmarks;
use crate::session::CourseSession;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// Submódulos
pub mod actions;
pub mod player;

pub use player::PlayerState;

/// Lo que se guarda entre ejecuciones (vía almacenamiento de eframe).
#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
pub struct SavedProgress {
    /// Lecciones completadas; el seguimiento de progreso es dueño de esta lista
    pub completed: Vec<LessonId>,
    pub bookmarks: Bookmarks,
    pub last_lesson: Option<LessonId>,
}

pub struct CoursePlayerApp {
    pub session: CourseSession,
    pub player: PlayerState,
    pub completed: Vec<LessonId>,
    pub search: String,
    pub saved_only: bool,
    pub config: PlayerConfig,
}

impl CoursePlayerApp {
    pub fn new(config: PlayerConfig, api: Arc<dyn CourseApi>, saved: SavedProgress) -> Self {
        let mut session = CourseSession::new(
            config.course_id.clone(),
            api,
            config.auto_advance_delay_ms,
        );
        let mut player = PlayerState::default();
        session.restore(saved.bookmarks, saved.last_lesson);
        session.set_completed(saved.completed.iter().cloned(), 0, &mut player);
        session.request_course();

        Self {
            session,
            player,
            completed: saved.completed,
            search: String::new(),
            saved_only: false,
            config,
        }
    }

    /// Entrypoint desde eframe: recupera el progreso guardado si existe
    pub fn from_creation_context(
        cc: &eframe::CreationContext<'_>,
        config: PlayerConfig,
        api: Arc<dyn CourseApi>,
    ) -> Self {
        let saved: SavedProgress = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::new(config, api, saved)
    }

    pub fn saved_progress(&self) -> SavedProgress {
        SavedProgress {
            completed: self.completed.clone(),
            bookmarks: self.session.bookmarks().clone(),
            last_lesson: self.session.selected_lesson().cloned(),
        }
    }
}
