// src/view_models.rs

use crate::model::{ContentItem, LessonId};

/// Una fila del índice lista para pintar.
#[derive(Clone, Debug)]
pub struct ItemRow {
    pub item: ContentItem,
    pub unlocked: bool,
    pub completed: bool,
    pub selected: bool,
    pub bookmarked: bool,
}

#[derive(Clone, Debug)]
pub struct LessonGroupInfo {
    pub lesson_id: LessonId,
    pub title: String,
    pub unlocked: bool,
    pub completed: bool,
    pub bookmarked: bool,
    pub selected: bool,
    pub open: bool,
    pub rows: Vec<ItemRow>,
}

#[derive(Clone, Debug)]
pub struct TopicInfo {
    pub index: usize,
    pub title: String,
    pub open: bool,
    pub completed_lessons: usize,
    pub groups: Vec<LessonGroupInfo>,
}

impl ItemRow {
    pub fn label(&self) -> String {
        let base = match &self.item {
            ContentItem::Video { lesson_title, .. } => format!("▶ {lesson_title}"),
            ContentItem::Document { display_name, .. } => format!("📄 {display_name}"),
            ContentItem::Quiz {
                title,
                score,
                submitted_at,
                ..
            } => match (score, submitted_at) {
                (Some(score), Some(date)) => format!("📝 {title} ({score:.1} · {date})"),
                (Some(score), None) => format!("📝 {title} ({score:.1})"),
                _ => format!("📝 {title}"),
            },
        };
        if !self.unlocked {
            format!("{base} 🔒")
        } else if self.completed && self.item.is_video() {
            format!("{base} ✅")
        } else {
            base
        }
    }
}

impl LessonGroupInfo {
    pub fn label(&self) -> String {
        if self.completed {
            format!("{} ✅", self.title)
        } else if self.unlocked {
            self.title.clone()
        } else {
            format!("{} 🔒", self.title)
        }
    }
}

impl TopicInfo {
    pub fn label(&self) -> String {
        let arrow = if self.open { "⏷" } else { "⏵" };
        format!(
            "{arrow} {} ({}/{})",
            self.title,
            self.completed_lessons,
            self.groups.len()
        )
    }
}
