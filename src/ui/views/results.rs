use crate::ExamApp;
use crate::ui::helpers::record_image;
use egui::{Button, CentralPanel, Color32, Context, RichText, ScrollArea};

pub fn ui_results(app: &mut ExamApp, ctx: &Context) {
    let score = app.session_score();
    let total = app.exam_len();
    let rows = app.result_rows();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 680.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 12))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.heading("Resultados");
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("Has acertado {score} de {total}."))
                            .heading()
                            .strong(),
                    );
                    if !app.message.is_empty() {
                        ui.label(&app.message);
                    }
                    ui.add_space(10.0);

                    ScrollArea::vertical().max_height(520.0).show(ui, |ui| {
                        for row in &rows {
                            ui.label(
                                RichText::new(format!("{}. {}", row.number, row.prompt)).strong(),
                            );
                            record_image(ui, row.image.as_deref());

                            let color = if row.is_correct {
                                Color32::LIGHT_GREEN
                            } else {
                                Color32::LIGHT_RED
                            };
                            ui.label(
                                RichText::new(format!("Tu respuesta: {}", row.user_text))
                                    .color(color),
                            );
                            ui.label(format!("Correcta: {}", row.correct_text));
                            if let Some(explanation) = &row.explanation {
                                ui.label(
                                    RichText::new(format!("Explicación: {explanation}")).italics(),
                                );
                            }
                            ui.add_space(12.0);
                        }
                    });

                    ui.add_space(10.0);
                    if ui
                        .add_sized([panel_width / 3.0, 36.0], Button::new("🏠 Volver al inicio"))
                        .clicked()
                    {
                        app.volver_al_inicio();
                    }
                });
        });
    });
}
