use super::*;

impl CourseSession {
    /// La vista padre informa de la lección seleccionada (por ejemplo, tras un
    /// cambio de ruta). Abre su tema y su grupo. Si es otra lección distinta de
    /// la actual, la navegación manual invalida el avance pendiente.
    pub fn sync_selected_lesson(&mut self, lesson_id: &LessonId, callbacks: &mut impl PlayerCallbacks) -> bool {
        let Some(topic) = self.index.topic_of(lesson_id) else {
            debug!("Selección de {lesson_id} ignorada: no está en el índice");
            return false;
        };
        if self.selection.selected() != Some(lesson_id) {
            self.advance.cancel(callbacks);
        }
        self.selection.select(lesson_id.clone(), topic);
        true
    }

    /// El alumno pulsa el vídeo de una lección. Se rechaza si está bloqueada.
    pub fn play_lesson(&mut self, lesson_id: &LessonId, callbacks: &mut impl PlayerCallbacks) -> bool {
        if !self.is_unlocked(lesson_id) {
            debug!("{lesson_id} bloqueada: no se reproduce");
            return false;
        }
        let Some((url, topic)) = self
            .index
            .video_of(lesson_id)
            .and_then(|item| item.video_url().map(|u| (u.to_owned(), item.topic_index())))
        else {
            return false;
        };

        self.advance.cancel(callbacks);
        callbacks.on_select_video(&url, lesson_id);
        callbacks.on_select_lesson_id(lesson_id);
        self.selection.select(lesson_id.clone(), topic);
        true
    }

    pub fn next_video(&mut self, callbacks: &mut impl PlayerCallbacks) -> bool {
        let Some(target) = self
            .selection
            .selected()
            .and_then(|id| self.index.next_video_after(id))
            .map(|item| item.lesson_id().clone())
        else {
            return false;
        };
        self.play_lesson(&target, callbacks)
    }

    pub fn previous_video(&mut self, callbacks: &mut impl PlayerCallbacks) -> bool {
        let Some(target) = self
            .selection
            .selected()
            .and_then(|id| self.index.previous_video_before(id))
            .map(|item| item.lesson_id().clone())
        else {
            return false;
        };
        self.play_lesson(&target, callbacks)
    }

    pub fn toggle_topic(&mut self, topic_index: usize) {
        self.selection.toggle_topic(topic_index);
    }

    pub fn toggle_lesson_group(&mut self, lesson_id: &LessonId) {
        self.selection.toggle_lesson_group(lesson_id);
    }

    /// Descarga/abre un documento. En lecciones bloqueadas no hace nada.
    pub fn open_document(&self, item: &ContentItem, callbacks: &mut impl PlayerCallbacks) -> bool {
        let ContentItem::Document {
            lesson_id,
            document_url,
            ..
        } = item
        else {
            return false;
        };
        if !self.is_unlocked(lesson_id) {
            debug!("Documento de {lesson_id} bloqueado");
            return false;
        }
        callbacks.on_open_document(document_url);
        true
    }

    /// Abre un quiz. En lecciones bloqueadas no hace nada.
    pub fn open_quiz(&self, item: &ContentItem, callbacks: &mut impl PlayerCallbacks) -> bool {
        let ContentItem::Quiz {
            lesson_id, quiz_id, ..
        } = item
        else {
            return false;
        };
        if !self.is_unlocked(lesson_id) {
            debug!("Quiz {quiz_id} de {lesson_id} bloqueado");
            return false;
        }
        callbacks.on_open_lesson_quiz(QuizOpen {
            lesson_id: lesson_id.clone(),
            quiz_id: quiz_id.clone(),
        });
        true
    }

    /// Marca o desmarca la lección. Devuelve `true` si queda marcada.
    pub fn toggle_bookmark(&mut self, lesson_id: &LessonId) -> bool {
        self.bookmarks.toggle(lesson_id)
    }

    /// Cierra la sesión descartando cualquier avance pendiente.
    pub fn close(mut self, callbacks: &mut impl PlayerCallbacks) {
        self.advance.cancel(callbacks);
        info!("Sesión de {} cerrada", self.course_id);
    }
}
