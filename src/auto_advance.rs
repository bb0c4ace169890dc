//! Avance automático al siguiente vídeo tras completar la lección actual.
//!
//! Modelo cooperativo: la vista llama a [`AutoAdvanceScheduler::tick`] con su reloj
//! en cada frame y la transición se dispara cuando vence el plazo. No hay hilos.

use std::collections::HashSet;

use log::{debug, info};

use crate::callbacks::PlayerCallbacks;
use crate::content_index::ContentIndex;
use crate::model::LessonId;
use crate::unlock::is_unlocked;

pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 1_500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdvanceState {
    Idle,
    PendingAdvance {
        completed: LessonId,
        target: LessonId,
        video_url: String,
        due_at_ms: u64,
    },
    Advanced {
        from: LessonId,
        to: LessonId,
    },
}

/// Resultado de evaluar una señal de lección completada.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionOutcome {
    Scheduled,
    NotSelected,
    NotInSequence,
    AlreadyAdvanced,
    AlreadyPending,
    EndOfCourse,
    NextLocked,
}

#[derive(Clone, Debug)]
pub struct AutoAdvanceScheduler {
    state: AdvanceState,
    /// Última lección cuya finalización ya provocó un avance
    guard: Option<LessonId>,
    delay_ms: u64,
}

impl Default for AutoAdvanceScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_ADVANCE_DELAY_MS)
    }
}

impl AutoAdvanceScheduler {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            state: AdvanceState::Idle,
            guard: None,
            delay_ms,
        }
    }

    pub fn state(&self) -> &AdvanceState {
        &self.state
    }

    pub fn guard(&self) -> Option<&LessonId> {
        self.guard.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, AdvanceState::PendingAdvance { .. })
    }

    /// Milisegundos hasta que vence el avance pendiente (para pedir repintado).
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        match &self.state {
            AdvanceState::PendingAdvance { due_at_ms, .. } => Some(due_at_ms.saturating_sub(now_ms)),
            _ => None,
        }
    }

    /// Evalúa una señal de "lección completada". Solo la lección seleccionada puede
    /// programar un avance, y solo una vez (guarda + avance pendiente).
    /// `completed` debe incluir ya la lección recién completada.
    pub fn on_completion(
        &mut self,
        lesson_id: &LessonId,
        selected: Option<&LessonId>,
        index: &ContentIndex,
        completed: &HashSet<LessonId>,
        now_ms: u64,
        callbacks: &mut impl PlayerCallbacks,
    ) -> CompletionOutcome {
        if selected != Some(lesson_id) {
            return CompletionOutcome::NotSelected;
        }
        if !index.video_sequence.contains(lesson_id) {
            debug!("Completada {lesson_id} sin vídeo: se ignora");
            return CompletionOutcome::NotInSequence;
        }
        if self.guard.as_ref() == Some(lesson_id) {
            return CompletionOutcome::AlreadyAdvanced;
        }
        if let AdvanceState::PendingAdvance { completed: pending, .. } = &self.state {
            if pending == lesson_id {
                return CompletionOutcome::AlreadyPending;
            }
        }

        let Some(next) = index.next_video_after(lesson_id) else {
            info!("Fin del curso tras {lesson_id}");
            return CompletionOutcome::EndOfCourse;
        };
        let target = next.lesson_id().clone();
        if !is_unlocked(&target, &index.video_sequence, completed) {
            debug!("{target} sigue bloqueada tras completar {lesson_id}");
            return CompletionOutcome::NextLocked;
        }
        let Some(video_url) = next.video_url() else {
            return CompletionOutcome::EndOfCourse;
        };

        debug!("Avance programado {lesson_id} -> {target} en {} ms", self.delay_ms);
        self.state = AdvanceState::PendingAdvance {
            completed: lesson_id.clone(),
            target,
            video_url: video_url.to_owned(),
            due_at_ms: now_ms.saturating_add(self.delay_ms),
        };
        callbacks.set_is_loading_next(true);
        CompletionOutcome::Scheduled
    }

    /// Completa el avance pendiente si ya venció. Devuelve la lección destino.
    pub fn tick(&mut self, now_ms: u64, callbacks: &mut impl PlayerCallbacks) -> Option<LessonId> {
        let due = match &self.state {
            AdvanceState::PendingAdvance { due_at_ms, .. } => *due_at_ms,
            _ => return None,
        };
        if now_ms < due {
            return None;
        }

        let AdvanceState::PendingAdvance {
            completed,
            target,
            video_url,
            ..
        } = std::mem::replace(&mut self.state, AdvanceState::Idle)
        else {
            return None;
        };

        callbacks.on_select_video(&video_url, &target);
        callbacks.on_select_lesson_id(&target);
        callbacks.set_is_loading_next(false);
        info!("Avance automático {completed} -> {target}");

        self.guard = Some(completed.clone());
        self.state = AdvanceState::Advanced {
            from: completed,
            to: target.clone(),
        };
        Some(target)
    }

    /// Descarta el avance pendiente (navegación manual o cierre de la sesión).
    pub fn cancel(&mut self, callbacks: &mut impl PlayerCallbacks) -> bool {
        if !self.is_pending() {
            return false;
        }
        debug!("Avance automático cancelado");
        self.state = AdvanceState::Idle;
        callbacks.set_is_loading_next(false);
        true
    }
}
