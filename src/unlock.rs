//! Regla de desbloqueo secuencial por vídeos.
//!
//! Una lección se desbloquea cuando la lección anterior con vídeo está completada.
//! Documentos y quizzes heredan el estado de su lección.

use std::collections::{HashMap, HashSet};

use crate::model::LessonId;

/// - Posición 0 en la secuencia: siempre desbloqueada.
/// - Posición i > 0: desbloqueada si `video_sequence[i-1]` está completada.
/// - Fuera de la secuencia (lección sin vídeo): siempre desbloqueada.
pub fn is_unlocked(
    lesson_id: &LessonId,
    video_sequence: &[LessonId],
    completed: &HashSet<LessonId>,
) -> bool {
    match video_sequence.iter().position(|id| id == lesson_id) {
        None | Some(0) => true,
        Some(i) => completed.contains(&video_sequence[i - 1]),
    }
}

/// Igual que [`is_unlocked`] pero con las posiciones precalculadas,
/// para las vistas que consultan todas las filas en cada frame.
#[derive(Clone, Debug, Default)]
pub struct UnlockPolicy {
    predecessor: HashMap<LessonId, Option<LessonId>>,
}

impl UnlockPolicy {
    pub fn new(video_sequence: &[LessonId]) -> Self {
        let mut predecessor = HashMap::with_capacity(video_sequence.len());
        for (i, id) in video_sequence.iter().enumerate() {
            // Si un id se repitiera, cuenta su primera aparición (igual que `position`)
            predecessor
                .entry(id.clone())
                .or_insert_with(|| i.checked_sub(1).map(|p| video_sequence[p].clone()));
        }
        Self { predecessor }
    }

    pub fn is_unlocked(&self, lesson_id: &LessonId, completed: &HashSet<LessonId>) -> bool {
        match self.predecessor.get(lesson_id) {
            None | Some(None) => true,
            Some(Some(prev)) => completed.contains(prev),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<LessonId> {
        list.iter().map(|s| LessonId::from(*s)).collect()
    }

    fn set(list: &[&str]) -> HashSet<LessonId> {
        list.iter().map(|s| LessonId::from(*s)).collect()
    }

    #[test]
    fn first_lesson_is_unlocked_and_second_is_not() {
        let seq = ids(&["L1", "L2"]);
        let done = set(&[]);
        assert!(is_unlocked(&LessonId::from("L1"), &seq, &done));
        assert!(!is_unlocked(&LessonId::from("L2"), &seq, &done));
    }

    #[test]
    fn completing_predecessor_unlocks_next() {
        let seq = ids(&["L1", "L2"]);
        assert!(is_unlocked(&LessonId::from("L2"), &seq, &set(&["L1"])));
    }

    #[test]
    fn lesson_without_video_is_always_unlocked() {
        let seq = ids(&["L1", "L2"]);
        assert!(is_unlocked(&LessonId::from("DOCS"), &seq, &set(&[])));
        assert!(is_unlocked(&LessonId::from("DOCS"), &seq, &set(&["L1", "L2"])));
    }

    #[test]
    fn only_immediate_predecessor_matters() {
        let seq = ids(&["A", "B", "C", "D"]);
        let done = set(&["A", "C"]);
        let unlocked: Vec<bool> = seq.iter().map(|id| is_unlocked(id, &seq, &done)).collect();
        assert_eq!(unlocked, vec![true, true, false, true]);
    }

    #[test]
    fn every_position_follows_the_predecessor_rule() {
        let seq = ids(&["A", "B", "C", "D", "E"]);
        let done = set(&["B", "D"]);
        let policy = UnlockPolicy::new(&seq);
        for (i, id) in seq.iter().enumerate() {
            let expected = i == 0 || done.contains(&seq[i - 1]);
            assert_eq!(is_unlocked(id, &seq, &done), expected, "posición {i}");
            assert_eq!(policy.is_unlocked(id, &done), expected, "posición {i}");
        }
    }
}
