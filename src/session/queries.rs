use super::*;
use crate::search::{self, FilteredView};
use crate::selection::SelectionState;

/// Avance del alumno en los vídeos del curso.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CourseProgress {
    pub completed_videos: usize,
    pub total_videos: usize,
}

impl CourseProgress {
    pub fn fraction(&self) -> f32 {
        if self.total_videos == 0 {
            0.0
        } else {
            self.completed_videos as f32 / self.total_videos as f32
        }
    }

    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }
}

impl CourseSession {
    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn course(&self) -> Option<&CourseDetail> {
        self.course.as_ref()
    }

    pub fn is_loading_course(&self) -> bool {
        self.course_requested && self.course.is_none()
    }

    /// Último error al cargar el curso, para mostrarlo en la vista.
    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    pub fn index(&self) -> &ContentIndex {
        &self.index
    }

    pub fn is_unlocked(&self, lesson_id: &LessonId) -> bool {
        self.unlock.is_unlocked(lesson_id, &self.completed)
    }

    pub fn is_completed(&self, lesson_id: &LessonId) -> bool {
        self.completed.contains(lesson_id)
    }

    pub fn completed(&self) -> &HashSet<LessonId> {
        &self.completed
    }

    pub fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    pub fn selected_lesson(&self) -> Option<&LessonId> {
        self.selection.selected()
    }

    pub fn take_scroll_request(&mut self) -> Option<LessonId> {
        self.selection.take_scroll_request()
    }

    pub fn advance(&self) -> &AutoAdvanceScheduler {
        &self.advance
    }

    /// Milisegundos hasta el avance automático pendiente, si lo hay.
    pub fn advance_remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.advance.remaining_ms(now_ms)
    }

    pub fn progress(&self) -> CourseProgress {
        let completed_videos = self
            .index
            .video_sequence
            .iter()
            .filter(|id| self.completed.contains(*id))
            .count();
        CourseProgress {
            completed_videos,
            total_videos: self.index.total_videos(),
        }
    }

    /// Filas a mostrar según la búsqueda y el filtro de guardados.
    pub fn filtered(&self, query: &str, saved_only: bool) -> FilteredView {
        search::view(&self.index.items, query, saved_only, &self.bookmarks)
    }
}
