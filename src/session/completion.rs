use super::*;

impl CourseSession {
    /// Sustituye el conjunto de lecciones completadas (lo gestiona el seguimiento
    /// de progreso externo). Cada lección nueva se evalúa como una señal de
    /// finalización, en el orden recibido.
    pub fn set_completed(
        &mut self,
        lessons: impl IntoIterator<Item = LessonId>,
        now_ms: u64,
        callbacks: &mut impl PlayerCallbacks,
    ) {
        let mut fresh = Vec::new();
        let mut next = HashSet::new();
        for id in lessons {
            if !self.completed.contains(&id) && !next.contains(&id) {
                fresh.push(id.clone());
            }
            next.insert(id);
        }
        self.completed = next;

        for id in fresh {
            self.signal_completion(&id, now_ms, callbacks);
        }
    }

    /// Una lección acaba de completarse.
    pub fn lesson_completed(
        &mut self,
        lesson_id: &LessonId,
        now_ms: u64,
        callbacks: &mut impl PlayerCallbacks,
    ) -> CompletionOutcome {
        self.completed.insert(lesson_id.clone());
        self.signal_completion(lesson_id, now_ms, callbacks)
    }

    fn signal_completion(
        &mut self,
        lesson_id: &LessonId,
        now_ms: u64,
        callbacks: &mut impl PlayerCallbacks,
    ) -> CompletionOutcome {
        let outcome = self.advance.on_completion(
            lesson_id,
            self.selection.selected(),
            &self.index,
            &self.completed,
            now_ms,
            callbacks,
        );
        debug!("Completada {lesson_id}: {outcome:?}");
        outcome
    }

    /// Avanza el reloj cooperativo. Devuelve `true` si la selección cambió.
    pub fn tick(&mut self, now_ms: u64, callbacks: &mut impl PlayerCallbacks) -> bool {
        let Some(target) = self.advance.tick(now_ms, callbacks) else {
            return false;
        };
        match self.index.topic_of(&target) {
            Some(topic) => {
                self.selection.select(target, topic);
                true
            }
            None => false,
        }
    }
}
