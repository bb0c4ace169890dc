//! Búsqueda libre y marcadores sobre el índice de contenido.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{ContentItem, LessonId};

/// Modo de la lista lateral. Son excluyentes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViewMode {
    #[default]
    All,
    Saved,
    Search,
}

impl ViewMode {
    /// Una búsqueda no vacía manda sobre el filtro de guardados.
    pub fn resolve(query: &str, saved_only: bool) -> Self {
        if !query.trim().is_empty() {
            ViewMode::Search
        } else if saved_only {
            ViewMode::Saved
        } else {
            ViewMode::All
        }
    }
}

/// Filas cuyo título de lección, nombre de documento o título de quiz contiene
/// `query` (sin distinguir mayúsculas). Una consulta vacía no filtra nada.
pub fn filter_by_search(items: &[ContentItem], query: &str) -> Vec<ContentItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Filas de lecciones marcadas, en el orden original.
pub fn filter_by_saved(items: &[ContentItem], bookmarks: &Bookmarks) -> Vec<ContentItem> {
    items
        .iter()
        .filter(|item| bookmarks.contains(item.lesson_id()))
        .cloned()
        .collect()
}

/// Marcadores a nivel de lección: afectan a todas sus filas a la vez.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmarks {
    lessons: BTreeSet<LessonId>,
}

impl Bookmarks {
    /// Devuelve `true` si la lección queda marcada.
    pub fn toggle(&mut self, lesson_id: &LessonId) -> bool {
        if self.lessons.remove(lesson_id) {
            false
        } else {
            self.lessons.insert(lesson_id.clone());
            true
        }
    }

    pub fn contains(&self, lesson_id: &LessonId) -> bool {
        self.lessons.contains(lesson_id)
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LessonId> {
        self.lessons.iter()
    }
}

impl FromIterator<LessonId> for Bookmarks {
    fn from_iter<I: IntoIterator<Item = LessonId>>(iter: I) -> Self {
        Self {
            lessons: iter.into_iter().collect(),
        }
    }
}

/// Resultado listo para pintar: el modo va con las filas para distinguir
/// "búsqueda sin resultados" de "no hay guardados".
#[derive(Clone, Debug, PartialEq)]
pub struct FilteredView {
    pub mode: ViewMode,
    pub items: Vec<ContentItem>,
}

pub fn view(items: &[ContentItem], query: &str, saved_only: bool, bookmarks: &Bookmarks) -> FilteredView {
    let mode = ViewMode::resolve(query, saved_only);
    let items = match mode {
        ViewMode::All => items.to_vec(),
        ViewMode::Saved => filter_by_saved(items, bookmarks),
        ViewMode::Search => filter_by_search(items, query),
    };
    FilteredView { mode, items }
}
