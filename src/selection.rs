//! Lección seleccionada y paneles abiertos de la barra lateral.

use serde::{Deserialize, Serialize};

use crate::model::LessonId;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_lesson: Option<LessonId>,
    /// Solo un tema abierto a la vez
    pub open_topic: Option<usize>,
    /// Grupo de lección abierto dentro de `open_topic`
    pub open_lesson_group: Option<LessonId>,
}

#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
    scroll_request: Option<LessonId>,
}

impl SelectionController {
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected(&self) -> Option<&LessonId> {
        self.state.selected_lesson.as_ref()
    }

    /// Selecciona una lección: abre su tema y su grupo, y pide scroll hasta ella.
    /// Repetir la misma lección vuelve a abrir los paneles pero no pide otro scroll.
    /// Devuelve `true` si la selección cambió.
    pub fn select(&mut self, lesson_id: LessonId, topic_index: usize) -> bool {
        let changed = self.state.selected_lesson.as_ref() != Some(&lesson_id);

        self.state.open_topic = Some(topic_index);
        self.state.open_lesson_group = Some(lesson_id.clone());

        if changed {
            self.scroll_request = Some(lesson_id.clone());
            self.state.selected_lesson = Some(lesson_id);
        }
        changed
    }

    /// Abre o cierra un tema. Cualquier cambio de tema cierra el grupo de lección.
    pub fn toggle_topic(&mut self, topic_index: usize) {
        if self.state.open_topic == Some(topic_index) {
            self.state.open_topic = None;
        } else {
            self.state.open_topic = Some(topic_index);
        }
        self.state.open_lesson_group = None;
    }

    pub fn toggle_lesson_group(&mut self, lesson_id: &LessonId) {
        if self.state.open_lesson_group.as_ref() == Some(lesson_id) {
            self.state.open_lesson_group = None;
        } else {
            self.state.open_lesson_group = Some(lesson_id.clone());
        }
    }

    /// Consume la petición de scroll pendiente (la vista la atiende una sola vez).
    pub fn take_scroll_request(&mut self) -> Option<LessonId> {
        self.scroll_request.take()
    }

    pub fn is_topic_open(&self, topic_index: usize) -> bool {
        self.state.open_topic == Some(topic_index)
    }

    pub fn is_group_open(&self, lesson_id: &LessonId) -> bool {
        self.state.open_lesson_group.as_ref() == Some(lesson_id)
    }

    pub fn clear(&mut self) {
        self.state = SelectionState::default();
        self.scroll_request = None;
    }
}
