use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador de lección tal y como lo entrega la API del curso.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(transparent)]
pub struct LessonId(pub String);

impl LessonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LessonId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DocumentRef {
    pub url: String,
    pub display_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizRef {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub score: Option<f32>,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub documents: Vec<DocumentRef>,
    // Normalmente llegan aparte (fetch por lección), pero el detalle puede traerlos
    #[serde(default)]
    pub quizzes: Vec<QuizRef>,
}

/// Tema del curso. El orden es la posición dentro de `CourseDetail::topics`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CourseDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// Identidad estable de una fila del índice.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum ItemKey {
    Video(LessonId),
    Document(LessonId, usize),
    Quiz(LessonId, String),
}

/// Fila renderizable del índice plano: vídeo, documento o quiz de una lección.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentItem {
    Video {
        lesson_id: LessonId,
        lesson_title: String,
        topic_index: usize,
        video_url: String,
    },
    Document {
        lesson_id: LessonId,
        lesson_title: String,
        topic_index: usize,
        position: usize,
        document_url: String,
        display_name: String,
    },
    Quiz {
        lesson_id: LessonId,
        lesson_title: String,
        topic_index: usize,
        quiz_id: String,
        title: String,
        score: Option<f32>,
        submitted_at: Option<String>,
    },
}

impl ContentItem {
    pub fn key(&self) -> ItemKey {
        match self {
            ContentItem::Video { lesson_id, .. } => ItemKey::Video(lesson_id.clone()),
            ContentItem::Document {
                lesson_id, position, ..
            } => ItemKey::Document(lesson_id.clone(), *position),
            ContentItem::Quiz {
                lesson_id, quiz_id, ..
            } => ItemKey::Quiz(lesson_id.clone(), quiz_id.clone()),
        }
    }

    pub fn lesson_id(&self) -> &LessonId {
        match self {
            ContentItem::Video { lesson_id, .. }
            | ContentItem::Document { lesson_id, .. }
            | ContentItem::Quiz { lesson_id, .. } => lesson_id,
        }
    }

    pub fn lesson_title(&self) -> &str {
        match self {
            ContentItem::Video { lesson_title, .. }
            | ContentItem::Document { lesson_title, .. }
            | ContentItem::Quiz { lesson_title, .. } => lesson_title,
        }
    }

    pub fn topic_index(&self) -> usize {
        match self {
            ContentItem::Video { topic_index, .. }
            | ContentItem::Document { topic_index, .. }
            | ContentItem::Quiz { topic_index, .. } => *topic_index,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, ContentItem::Video { .. })
    }

    pub fn video_url(&self) -> Option<&str> {
        match self {
            ContentItem::Video { video_url, .. } => Some(video_url.as_str()),
            _ => None,
        }
    }

    /// Textos contra los que se compara la búsqueda libre.
    pub fn search_fields(&self) -> Vec<&str> {
        match self {
            ContentItem::Video { lesson_title, .. } => vec![lesson_title.as_str()],
            ContentItem::Document {
                lesson_title,
                display_name,
                ..
            } => vec![lesson_title.as_str(), display_name.as_str()],
            ContentItem::Quiz {
                lesson_title, title, ..
            } => vec![lesson_title.as_str(), title.as_str()],
        }
    }
}

/// Petición de abrir un quiz concreto de una lección.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOpen {
    pub lesson_id: LessonId,
    pub quiz_id: String,
}
