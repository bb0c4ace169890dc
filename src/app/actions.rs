use super::*;
use log::debug;

/// Acciones de la barra lateral, recogidas mientras se pinta y aplicadas después.
#[derive(Clone, Debug, PartialEq)]
pub enum SidebarAction {
    ToggleTopic(usize),
    ToggleGroup(LessonId),
    Play(LessonId),
    Open(ContentItem),
    ToggleBookmark(LessonId),
}

impl CoursePlayerApp {
    pub fn apply_sidebar_action(&mut self, action: SidebarAction) {
        match action {
            SidebarAction::ToggleTopic(ti) => self.session.toggle_topic(ti),
            SidebarAction::ToggleGroup(id) => self.session.toggle_lesson_group(&id),
            SidebarAction::Play(id) => {
                if !self.session.play_lesson(&id, &mut self.player) {
                    self.player.message = "🔒 Completa la lección anterior para desbloquearla.".into();
                }
            }
            SidebarAction::Open(item) => {
                let opened = match &item {
                    ContentItem::Video { lesson_id, .. } => {
                        self.session.play_lesson(lesson_id, &mut self.player)
                    }
                    ContentItem::Document { .. } => {
                        self.session.open_document(&item, &mut self.player)
                    }
                    ContentItem::Quiz { .. } => self.session.open_quiz(&item, &mut self.player),
                };
                if !opened {
                    debug!("Acción rechazada sobre {}", item.lesson_id());
                }
            }
            SidebarAction::ToggleBookmark(id) => {
                self.session.toggle_bookmark(&id);
            }
        }
    }

    /// El reproductor terminó (o el alumno marcó) la lección actual.
    pub fn complete_current_lesson(&mut self, now_ms: u64) {
        let Some(lesson_id) = self.player.lesson_id.clone() else {
            return;
        };
        if !self.completed.contains(&lesson_id) {
            self.completed.push(lesson_id);
        }
        self.session
            .set_completed(self.completed.iter().cloned(), now_ms, &mut self.player);
    }

    pub fn next_video(&mut self) {
        if !self.session.next_video(&mut self.player) {
            self.player.message = "No hay siguiente vídeo disponible.".into();
        }
    }

    pub fn previous_video(&mut self) {
        self.session.previous_video(&mut self.player);
    }

    /// Un frame del bucle de la interfaz: respuestas de la API y reloj del avance.
    pub fn pump(&mut self, now_ms: u64) -> bool {
        let fetched = self.session.poll_fetches(&mut self.player);
        let advanced = self.session.tick(now_ms, &mut self.player);
        fetched || advanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::YamlCourseApi;
    use crate::model::CourseDetail;

    fn app() -> CoursePlayerApp {
        let api = Arc::new(YamlCourseApi::embedded().unwrap());
        let mut app = CoursePlayerApp::new(PlayerConfig::default(), api, SavedProgress::default());
        let detail: CourseDetail = YamlCourseApi::embedded()
            .unwrap()
            .fetch_course_detail("curso-c")
            .unwrap();
        app.session.apply_course_detail(detail, &mut app.player);
        app
    }

    #[test]
    fn completing_current_lesson_auto_advances_the_player() {
        let mut app = app();
        assert_eq!(app.player.lesson_id, Some(LessonId::from("c-hola")));

        app.complete_current_lesson(0);
        assert!(app.player.loading_next);
        app.pump(2_000);

        assert!(!app.player.loading_next);
        assert_eq!(app.player.lesson_id, Some(LessonId::from("c-variables")));
        assert_eq!(
            app.player.video_url.as_deref(),
            Some("https://videos.example.com/c/variables.mp4")
        );
        assert_eq!(app.saved_progress().completed, vec![LessonId::from("c-hola")]);
    }

    #[test]
    fn clicking_a_locked_lesson_shows_a_message() {
        let mut app = app();
        app.apply_sidebar_action(SidebarAction::Play(LessonId::from("c-memoria")));
        assert!(app.player.message.contains("🔒"));
        assert_eq!(app.player.lesson_id, Some(LessonId::from("c-hola")));
    }

    #[test]
    fn saved_progress_round_trips_bookmarks_and_last_lesson() {
        let mut app = app();
        app.apply_sidebar_action(SidebarAction::ToggleBookmark(LessonId::from("c-bucles")));
        let saved = app.saved_progress();
        assert!(saved.bookmarks.contains(&LessonId::from("c-bucles")));
        assert_eq!(saved.last_lesson, Some(LessonId::from("c-hola")));
    }
}
