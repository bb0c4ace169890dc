use super::*;
use crate::view_models::{ItemRow, LessonGroupInfo, TopicInfo};

impl CourseSession {
    pub fn item_row(&self, item: &ContentItem) -> ItemRow {
        let lesson_id = item.lesson_id();
        ItemRow {
            item: item.clone(),
            unlocked: self.is_unlocked(lesson_id),
            completed: self.completed.contains(lesson_id),
            selected: self.selection.selected() == Some(lesson_id),
            bookmarked: self.bookmarks.contains(lesson_id),
        }
    }

    pub fn item_rows(&self, items: &[ContentItem]) -> Vec<ItemRow> {
        items.iter().map(|item| self.item_row(item)).collect()
    }

    /// Temas con sus grupos de lección precalculados, para no mantener el
    /// préstamo de la sesión mientras se pinta.
    pub fn topic_infos(&self) -> Vec<TopicInfo> {
        let Some(course) = &self.course else {
            return Vec::new();
        };
        let state = self.selection.state();

        course
            .topics
            .iter()
            .enumerate()
            .map(|(ti, topic)| {
                let groups: Vec<LessonGroupInfo> = self
                    .index
                    .by_topic_then_lesson
                    .get(&ti)
                    .map(|groups| {
                        groups
                            .iter()
                            .map(|group| LessonGroupInfo {
                                lesson_id: group.lesson_id.clone(),
                                title: group.lesson_title.clone(),
                                unlocked: self.is_unlocked(&group.lesson_id),
                                completed: self.completed.contains(&group.lesson_id),
                                bookmarked: self.bookmarks.contains(&group.lesson_id),
                                selected: state.selected_lesson.as_ref() == Some(&group.lesson_id),
                                open: state.open_lesson_group.as_ref() == Some(&group.lesson_id),
                                rows: self.item_rows(&group.items),
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                TopicInfo {
                    index: ti,
                    title: topic.title.clone(),
                    open: state.open_topic == Some(ti),
                    completed_lessons: groups.iter().filter(|g| g.completed).count(),
                    groups,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callbacks::mock::RecordingCallbacks;
    use crate::content_index::tests::{doc, lesson, topic};
    use crate::data::{CourseCatalog, YamlCourseApi};

    #[test]
    fn topic_infos_reflect_selection_and_locks() {
        let mut l2 = lesson("L2", Some("v2"));
        l2.documents.push(doc("apuntes"));
        let detail = CourseDetail {
            id: "c".into(),
            title: "Curso".into(),
            topics: vec![
                topic("T1", vec![lesson("L1", Some("v1"))]),
                topic("T2", vec![l2]),
                topic("T3", vec![lesson("vacía", None)]),
            ],
        };
        let api = Arc::new(YamlCourseApi::new(CourseCatalog::default()));
        let mut session = CourseSession::new("c", api, 1_500);
        let mut cb = RecordingCallbacks::default();
        session.apply_course_detail(detail, &mut cb);

        let infos = session.topic_infos();
        assert_eq!(infos.len(), 3);
        assert!(infos[0].open);
        assert!(infos[0].groups[0].selected && infos[0].groups[0].open);
        assert!(!infos[1].open);
        assert!(!infos[1].groups[0].unlocked);
        assert!(infos[1].groups[0].rows.iter().all(|r| r.label().ends_with("🔒")));
        assert!(infos[2].groups.is_empty());
        assert_eq!(infos[0].label(), "⏷ Tema T1 (0/1)");
    }
}
