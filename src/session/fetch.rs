use super::*;

impl CourseSession {
    /// Pide el detalle del curso una sola vez por sesión.
    pub fn request_course(&mut self) {
        if self.course_requested {
            return;
        }
        self.course_requested = true;

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let course_id = self.course_id.clone();
        debug!("Pidiendo curso {course_id}");
        spawn_fetch(move || {
            let result = api.fetch_course_detail(&course_id);
            let _ = tx.send(FetchResult::Course(course_id, result));
        });
    }

    /// Pide los quizzes de cada lección con vídeo que aún no estén en el mapa local.
    fn request_missing_quizzes(&mut self) {
        let missing: Vec<LessonId> = self
            .index
            .video_sequence
            .iter()
            .filter(|id| !self.quizzes.contains_key(*id) && !self.quiz_requested.contains(*id))
            .cloned()
            .collect();

        for lesson_id in missing {
            self.quiz_requested.insert(lesson_id.clone());
            let api = Arc::clone(&self.api);
            let tx = self.tx.clone();
            spawn_fetch(move || {
                let result = api.fetch_lesson_quizzes(&lesson_id);
                let _ = tx.send(FetchResult::Quizzes(lesson_id, result));
            });
        }
    }

    /// Recoge las respuestas pendientes sin bloquear. Devuelve `true` si el índice cambió.
    pub fn poll_fetches(&mut self, callbacks: &mut impl PlayerCallbacks) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            changed |= self.apply_fetch_result(result, callbacks);
        }
        changed
    }

    pub fn apply_fetch_result(
        &mut self,
        result: FetchResult,
        callbacks: &mut impl PlayerCallbacks,
    ) -> bool {
        match result {
            FetchResult::Course(course_id, Ok(detail)) => {
                if course_id != self.course_id {
                    debug!("Respuesta de otro curso ({course_id}), se descarta");
                    return false;
                }
                self.apply_course_detail(detail, callbacks);
                true
            }
            FetchResult::Course(course_id, Err(err)) => {
                warn!("No se pudo cargar el curso {course_id}: {err}");
                self.fetch_error = Some(err.to_string());
                false
            }
            FetchResult::Quizzes(lesson_id, Ok(quizzes)) => {
                self.apply_lesson_quizzes(lesson_id, quizzes, callbacks);
                true
            }
            FetchResult::Quizzes(lesson_id, Err(err)) => {
                // La guarda se queda puesta: sin reintento automático
                warn!("No se pudieron cargar los quizzes de {lesson_id}: {err}");
                false
            }
        }
    }

    pub fn apply_course_detail(&mut self, detail: CourseDetail, callbacks: &mut impl PlayerCallbacks) {
        info!("Curso cargado: {} ({} temas)", detail.title, detail.topics.len());
        self.course_requested = true;
        self.fetch_error = None;
        self.course = Some(detail);
        self.rebuild_index(callbacks);
        self.request_missing_quizzes();
    }

    pub fn apply_lesson_quizzes(
        &mut self,
        lesson_id: LessonId,
        quizzes: Vec<QuizRef>,
        callbacks: &mut impl PlayerCallbacks,
    ) {
        debug!("{} quizzes para {lesson_id}", quizzes.len());
        self.quiz_requested.insert(lesson_id.clone());
        self.quizzes.insert(lesson_id, quizzes);
        self.rebuild_index(callbacks);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_fetch(job: impl FnOnce() + Send + 'static) {
    std::thread::spawn(job);
}

#[cfg(target_arch = "wasm32")]
fn spawn_fetch(job: impl FnOnce() + 'static) {
    wasm_bindgen_futures::spawn_local(async move { job() });
}
