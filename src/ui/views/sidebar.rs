use egui::{Align, Button, Color32, Context, RichText, ScrollArea, TextEdit, Ui, Vec2};
use crate::app::CoursePlayerApp;
use crate::app::actions::SidebarAction;
use crate::model::{ContentItem, LessonId};
use crate::search::ViewMode;
use crate::ui::helpers::{bookmark_toggle, content_row};
use crate::view_models::{ItemRow, TopicInfo};

pub fn ui_sidebar(app: &mut CoursePlayerApp, ctx: &Context) {
    let mut actions: Vec<SidebarAction> = Vec::new();
    let scroll_to = app.session.take_scroll_request();

    egui::SidePanel::left("content_sidebar")
        .resizable(true)
        .default_width(340.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    TextEdit::singleline(&mut app.search)
                        .hint_text("🔍 Buscar lección, documento o quiz")
                        .desired_width(220.0),
                );
                if ui.selectable_label(app.saved_only, "★ Guardados").clicked() {
                    app.saved_only = !app.saved_only;
                }
            });
            ui.separator();

            if let Some(err) = app.session.fetch_error() {
                ui.colored_label(Color32::LIGHT_RED, format!("No se pudo cargar el curso: {err}"));
                return;
            }
            if app.session.is_loading_course() {
                ui.spinner();
                return;
            }

            let width = ui.available_width();
            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match ViewMode::resolve(&app.search, app.saved_only) {
                    ViewMode::All => {
                        // Precomputar para no mantener el préstamo de la sesión al pintar
                        let topics = app.session.topic_infos();
                        topics_tree(ui, &topics, width, scroll_to.as_ref(), &mut actions);
                    }
                    mode => {
                        let view = app.session.filtered(&app.search, app.saved_only);
                        let rows = app.session.item_rows(&view.items);
                        flat_list(ui, mode, &rows, width, &mut actions);
                    }
                });
        });

    for action in actions {
        app.apply_sidebar_action(action);
    }
}

fn topics_tree(
    ui: &mut Ui,
    topics: &[TopicInfo],
    width: f32,
    scroll_to: Option<&LessonId>,
    actions: &mut Vec<SidebarAction>,
) {
    for topic in topics {
        let header = Button::new(RichText::new(topic.label()).strong())
            .min_size(Vec2::new(width, 28.0));
        if ui.add(header).clicked() {
            actions.push(SidebarAction::ToggleTopic(topic.index));
        }
        if !topic.open {
            continue;
        }

        ui.indent(("topic", topic.index), |ui| {
            if topic.groups.is_empty() {
                ui.label(RichText::new("Sin contenido todavía").weak());
            }
            for group in &topic.groups {
                let row = ui.horizontal(|ui| {
                    let clicked =
                        content_row(ui, group.label(), width - 60.0, true, group.selected).clicked();
                    if bookmark_toggle(ui, group.bookmarked) {
                        actions.push(SidebarAction::ToggleBookmark(group.lesson_id.clone()));
                    }
                    clicked
                });
                if row.inner {
                    actions.push(SidebarAction::ToggleGroup(group.lesson_id.clone()));
                }
                if scroll_to == Some(&group.lesson_id) {
                    row.response.scroll_to_me(Some(Align::Center));
                }

                if group.open {
                    ui.indent(("group", &group.lesson_id), |ui| {
                        for item in &group.rows {
                            item_row(ui, item, width - 80.0, actions);
                        }
                    });
                }
            }
        });
        ui.add_space(4.0);
    }
}

fn flat_list(
    ui: &mut Ui,
    mode: ViewMode,
    rows: &[ItemRow],
    width: f32,
    actions: &mut Vec<SidebarAction>,
) {
    if rows.is_empty() {
        let msg = match mode {
            ViewMode::Search => "Ningún contenido coincide con la búsqueda.",
            ViewMode::Saved => "Todavía no has guardado ninguna lección.",
            ViewMode::All => "Este curso no tiene contenido.",
        };
        ui.label(RichText::new(msg).weak());
        return;
    }

    for row in rows {
        ui.horizontal(|ui| {
            item_row(ui, row, width - 30.0, actions);
            if bookmark_toggle(ui, row.bookmarked) {
                actions.push(SidebarAction::ToggleBookmark(row.item.lesson_id().clone()));
            }
        });
    }
}

// Las filas bloqueadas se ven pero no se pueden pulsar
fn item_row(ui: &mut Ui, row: &ItemRow, width: f32, actions: &mut Vec<SidebarAction>) {
    let selected = row.selected && row.item.is_video();
    // Id estable aunque cambie el orden de las filas al filtrar
    let response = ui
        .push_id(row.item.key(), |ui| {
            content_row(ui, row.label(), width, row.unlocked, selected)
        })
        .inner;
    let response = if row.unlocked {
        response
    } else {
        response.on_disabled_hover_text("Completa la lección anterior para desbloquear")
    };
    if response.clicked() {
        let action = match &row.item {
            ContentItem::Video { lesson_id, .. } => SidebarAction::Play(lesson_id.clone()),
            item => SidebarAction::Open(item.clone()),
        };
        actions.push(action);
    }
}
