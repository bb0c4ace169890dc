//! Índice plano del contenido del curso (temas → lecciones → vídeo/documentos/quizzes).

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::model::{ContentItem, LessonId, QuizRef, Topic};

/// Todas las filas de una lección dentro de un tema.
#[derive(Clone, Debug, PartialEq)]
pub struct LessonGroup {
    pub lesson_id: LessonId,
    pub lesson_title: String,
    /// Menor índice global entre sus filas
    pub first_index: usize,
    pub items: Vec<ContentItem>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentIndex {
    pub items: Vec<ContentItem>,
    pub by_topic: BTreeMap<usize, Vec<ContentItem>>,
    pub by_topic_then_lesson: BTreeMap<usize, Vec<LessonGroup>>,
    /// Lecciones con vídeo, en orden. Es la única secuencia que decide el bloqueo.
    pub video_sequence: Vec<LessonId>,
}

impl ContentIndex {
    /// Aplana los temas en orden estable: tema, lección, y dentro de la lección
    /// vídeo, documentos y quizzes. Los quizzes de `quizzes_by_lesson` sustituyen
    /// a los que traiga la propia lección.
    pub fn build(topics: &[Topic], quizzes_by_lesson: &HashMap<LessonId, Vec<QuizRef>>) -> Self {
        let mut items = Vec::new();

        for (topic_index, topic) in topics.iter().enumerate() {
            for lesson in &topic.lessons {
                if let Some(url) = lesson.video_url.as_ref().filter(|u| !u.trim().is_empty()) {
                    items.push(ContentItem::Video {
                        lesson_id: lesson.id.clone(),
                        lesson_title: lesson.title.clone(),
                        topic_index,
                        video_url: url.clone(),
                    });
                }

                for (position, doc) in lesson.documents.iter().enumerate() {
                    items.push(ContentItem::Document {
                        lesson_id: lesson.id.clone(),
                        lesson_title: lesson.title.clone(),
                        topic_index,
                        position,
                        document_url: doc.url.clone(),
                        display_name: doc.display_name.clone(),
                    });
                }

                let quizzes = quizzes_by_lesson
                    .get(&lesson.id)
                    .unwrap_or(&lesson.quizzes);
                for quiz in quizzes {
                    items.push(ContentItem::Quiz {
                        lesson_id: lesson.id.clone(),
                        lesson_title: lesson.title.clone(),
                        topic_index,
                        quiz_id: quiz.id.clone(),
                        title: quiz.title.clone(),
                        score: quiz.score,
                        submitted_at: quiz.submitted_at.clone(),
                    });
                }
            }
        }

        let video_sequence = items
            .iter()
            .filter(|item| item.is_video())
            .map(|item| item.lesson_id().clone())
            .collect();

        let mut by_topic: BTreeMap<usize, Vec<ContentItem>> = BTreeMap::new();
        for item in &items {
            by_topic
                .entry(item.topic_index())
                .or_default()
                .push(item.clone());
        }

        let by_topic_then_lesson = group_by_lesson(&items);

        Self {
            items,
            by_topic,
            by_topic_then_lesson,
            video_sequence,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Número de lecciones distintas con al menos una fila
    pub fn total_lessons(&self) -> usize {
        self.items
            .iter()
            .map(|item| item.lesson_id())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn total_videos(&self) -> usize {
        self.video_sequence.len()
    }

    pub fn contains_lesson(&self, lesson_id: &LessonId) -> bool {
        self.items.iter().any(|item| item.lesson_id() == lesson_id)
    }

    pub fn topic_of(&self, lesson_id: &LessonId) -> Option<usize> {
        self.items
            .iter()
            .find(|item| item.lesson_id() == lesson_id)
            .map(|item| item.topic_index())
    }

    pub fn lesson_title(&self, lesson_id: &LessonId) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.lesson_id() == lesson_id)
            .map(|item| item.lesson_title())
    }

    pub fn first_video(&self) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.is_video())
    }

    pub fn video_of(&self, lesson_id: &LessonId) -> Option<&ContentItem> {
        self.items
            .iter()
            .find(|item| item.is_video() && item.lesson_id() == lesson_id)
    }

    /// Siguiente vídeo tras el vídeo de `lesson_id` en el índice plano.
    /// `None` si la lección no tiene vídeo o es el último.
    pub fn next_video_after(&self, lesson_id: &LessonId) -> Option<&ContentItem> {
        let pos = self
            .items
            .iter()
            .position(|item| item.is_video() && item.lesson_id() == lesson_id)?;
        self.items[pos + 1..].iter().find(|item| item.is_video())
    }

    pub fn previous_video_before(&self, lesson_id: &LessonId) -> Option<&ContentItem> {
        let pos = self
            .items
            .iter()
            .position(|item| item.is_video() && item.lesson_id() == lesson_id)?;
        self.items[..pos].iter().rev().find(|item| item.is_video())
    }
}

fn group_by_lesson(items: &[ContentItem]) -> BTreeMap<usize, Vec<LessonGroup>> {
    let mut result: BTreeMap<usize, Vec<LessonGroup>> = BTreeMap::new();
    // (tema, lección) -> posición del grupo dentro del tema
    let mut slots: HashMap<(usize, LessonId), usize> = HashMap::new();

    for (index, item) in items.iter().enumerate() {
        let topic = item.topic_index();
        let groups = result.entry(topic).or_default();
        let key = (topic, item.lesson_id().clone());
        match slots.get(&key) {
            Some(&slot) => {
                let group = &mut groups[slot];
                group.first_index = group.first_index.min(index);
                group.items.push(item.clone());
            }
            None => {
                slots.insert(key, groups.len());
                groups.push(LessonGroup {
                    lesson_id: item.lesson_id().clone(),
                    lesson_title: item.lesson_title().to_owned(),
                    first_index: index,
                    items: vec![item.clone()],
                });
            }
        }
    }

    for groups in result.values_mut() {
        groups.sort_by_key(|g| g.first_index);
    }
    result
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::{DocumentRef, Lesson};

    pub(crate) fn lesson(id: &str, video: Option<&str>) -> Lesson {
        Lesson {
            id: LessonId::from(id),
            title: format!("Lección {id}"),
            video_url: video.map(str::to_owned),
            documents: vec![],
            quizzes: vec![],
        }
    }

    pub(crate) fn topic(id: &str, lessons: Vec<Lesson>) -> Topic {
        Topic {
            id: id.to_owned(),
            title: format!("Tema {id}"),
            lessons,
        }
    }

    pub(crate) fn doc(name: &str) -> DocumentRef {
        DocumentRef {
            url: format!("https://cdn.example/{name}.pdf"),
            display_name: name.to_owned(),
        }
    }

    pub(crate) fn quiz(id: &str, title: &str) -> QuizRef {
        QuizRef {
            id: id.to_owned(),
            title: title.to_owned(),
            score: None,
            submitted_at: None,
        }
    }

    fn sample_topics() -> Vec<Topic> {
        let mut l1 = lesson("L1", Some("v1"));
        l1.documents.push(doc("apuntes-1"));
        l1.quizzes.push(quiz("q1", "Test de punteros"));
        let l2 = lesson("L2", Some("v2"));
        let mut l3 = lesson("L3", None);
        l3.documents.push(doc("chuleta"));
        let l4 = lesson("L4", None);
        let l5 = lesson("L5", Some("v5"));
        vec![topic("T1", vec![l1, l2]), topic("T2", vec![l3, l4, l5])]
    }

    #[test]
    fn flatten_keeps_topic_lesson_and_kind_order() {
        let index = ContentIndex::build(&sample_topics(), &HashMap::new());
        let keys: Vec<String> = index
            .items
            .iter()
            .map(|item| match item {
                ContentItem::Video { lesson_id, .. } => format!("v:{lesson_id}"),
                ContentItem::Document { lesson_id, .. } => format!("d:{lesson_id}"),
                ContentItem::Quiz { lesson_id, .. } => format!("q:{lesson_id}"),
            })
            .collect();
        assert_eq!(keys, vec!["v:L1", "d:L1", "q:L1", "v:L2", "d:L3", "v:L5"]);
        assert_eq!(
            index.video_sequence,
            vec![LessonId::from("L1"), LessonId::from("L2"), LessonId::from("L5")]
        );
    }

    #[test]
    fn build_is_deterministic() {
        let topics = sample_topics();
        let mut quizzes = HashMap::new();
        quizzes.insert(LessonId::from("L2"), vec![quiz("q2", "Repaso")]);
        let a = ContentIndex::build(&topics, &quizzes);
        let b = ContentIndex::build(&topics, &quizzes);
        assert_eq!(a, b);
    }

    #[test]
    fn lesson_without_content_is_omitted() {
        let index = ContentIndex::build(&sample_topics(), &HashMap::new());
        assert!(!index.contains_lesson(&LessonId::from("L4")));
        assert_eq!(index.total_lessons(), 4);
    }

    #[test]
    fn document_only_lesson_is_a_single_document_row() {
        let mut l = lesson("D1", None);
        l.documents.push(doc("guia"));
        let index = ContentIndex::build(&[topic("T", vec![l])], &HashMap::new());
        assert_eq!(index.items.len(), 1);
        assert!(matches!(index.items[0], ContentItem::Document { .. }));
        assert!(index.video_sequence.is_empty());
    }

    #[test]
    fn fetched_quizzes_replace_embedded_ones() {
        let mut quizzes = HashMap::new();
        quizzes.insert(
            LessonId::from("L1"),
            vec![quiz("qa", "Nuevo"), quiz("qb", "Otro")],
        );
        let index = ContentIndex::build(&sample_topics(), &quizzes);
        let titles: Vec<&str> = index
            .items
            .iter()
            .filter_map(|item| match item {
                ContentItem::Quiz { title, .. } => Some(title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, vec!["Nuevo", "Otro"]);
    }

    #[test]
    fn groups_are_per_topic_and_sorted_by_first_index() {
        let index = ContentIndex::build(&sample_topics(), &HashMap::new());
        let t1 = &index.by_topic_then_lesson[&0];
        assert_eq!(t1.len(), 2);
        assert_eq!(t1[0].lesson_id, LessonId::from("L1"));
        assert_eq!(t1[0].first_index, 0);
        assert_eq!(t1[0].items.len(), 3);
        assert_eq!(t1[1].first_index, 3);

        let t2 = &index.by_topic_then_lesson[&1];
        assert_eq!(
            t2.iter().map(|g| g.lesson_id.as_str()).collect::<Vec<_>>(),
            vec!["L3", "L5"]
        );
        assert_eq!(index.by_topic[&1].len(), 2);
    }

    #[test]
    fn next_video_skips_documents_and_crosses_topics() {
        let index = ContentIndex::build(&sample_topics(), &HashMap::new());
        let next = index.next_video_after(&LessonId::from("L2")).map(|i| i.lesson_id().clone());
        assert_eq!(next, Some(LessonId::from("L5")));
        assert!(index.next_video_after(&LessonId::from("L5")).is_none());
        assert!(index.next_video_after(&LessonId::from("L3")).is_none());
        let prev = index
            .previous_video_before(&LessonId::from("L5"))
            .map(|i| i.lesson_id().clone());
        assert_eq!(prev, Some(LessonId::from("L2")));
    }

    #[test]
    fn blank_video_url_counts_as_no_video() {
        let index = ContentIndex::build(
            &[topic("T", vec![lesson("A", Some("  ")), lesson("B", Some("vb"))])],
            &HashMap::new(),
        );
        assert_eq!(index.video_sequence, vec![LessonId::from("B")]);
    }
}
