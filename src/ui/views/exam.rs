use crate::ExamApp;
use crate::ui::helpers::record_image;
use crate::ui::layout::two_button_row;
use crate::view_models::format_time;
use egui::{CentralPanel, Color32, Context, RichText, ScrollArea};

pub fn ui_exam(app: &mut ExamApp, ctx: &Context) {
    // Copias para no pelearse con el borrow checker dentro de los closures
    let Some(q) = app.current_question().cloned() else {
        // Sin sesión no hay nada que pintar: de vuelta al inicio
        app.volver_al_inicio();
        return;
    };
    let time_left = app.time_left();
    let low_time = app.low_time();
    let index = app.current_index();
    let total = app.exam_len();
    let is_last = app.is_last_question();
    let cells = app.progress_cells();
    let is_multi = q.question.is_multi();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 680.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(24, 12))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("☁ Mock Cloud+ Exam");

                    let timer_text =
                        RichText::new(format!("⏱ Tiempo restante: {}", format_time(time_left)))
                            .strong();
                    ui.label(if low_time {
                        timer_text.color(Color32::LIGHT_RED)
                    } else {
                        timer_text
                    });
                    ui.add_space(6.0);

                    // Rejilla de progreso: ✔ respondida, ✖ vista, □ sin tocar
                    ui.horizontal_wrapped(|ui| {
                        for cell in &cells {
                            if ui.selectable_label(cell.current, cell.label()).clicked() {
                                app.ir_a_pregunta(cell.idx);
                            }
                        }
                    });
                    ui.add_space(10.0);

                    ScrollArea::vertical().max_height(380.0).show(ui, |ui| {
                        ui.set_width(panel_width);

                        // El enunciado puede traer saltos de línea del banco
                        ui.label(
                            RichText::new(format!("{}. {}", index + 1, q.question.prompt))
                                .strong(),
                        );
                        if is_multi {
                            ui.label("(Selecciona todas las que correspondan)");
                        }
                        ui.add_space(6.0);

                        record_image(ui, q.question.image.as_deref());

                        // Opciones en el orden barajado de la sesión
                        for key in &q.option_order {
                            let Some(text) = q.question.options.get(key) else {
                                continue;
                            };
                            let label = format!("{key}. {text}");
                            let selected = app.is_selected(&q.question.id, key);

                            if is_multi {
                                let mut checked = selected;
                                if ui.checkbox(&mut checked, label).changed() {
                                    app.seleccionar_opcion(&q.question.id, key);
                                }
                            } else if ui.radio(selected, label).clicked() {
                                app.seleccionar_opcion(&q.question.id, key);
                            }
                        }
                    });

                    ui.add_space(10.0);

                    let (anterior, siguiente) =
                        two_button_row(ui, panel_width, "⬅ Anterior", "Siguiente ➡");
                    if anterior {
                        app.pregunta_anterior();
                    }
                    if siguiente {
                        app.siguiente_pregunta();
                    }

                    if is_last {
                        ui.add_space(8.0);
                        if ui
                            .add_sized([panel_width / 2.0, 36.0], egui::Button::new("✅ Entregar examen"))
                            .clicked()
                        {
                            app.entregar_examen();
                        }
                    } else {
                        ui.add_space(4.0);
                        ui.label(format!("Pregunta {} de {}", index + 1, total));
                    }

                    ui.add_space(8.0);
                    if !app.message.is_empty() {
                        ui.label(&app.message);
                    }
                });
            });
    });
}
