use crate::ExamApp;
use egui::{Align, Button, CentralPanel, Context, ScrollArea};

pub fn ui_home(app: &mut ExamApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 540.0;
        let content_width = ui.available_width().min(max_width);

        // Centrar verticalmente
        let estimated_h = 320.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.horizontal_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.heading("☁ Mock Cloud+ Exam");
                        ui.add_space(6.0);
                        ui.label(format!(
                            "{} preguntas, {} minutos",
                            app.config.question_count,
                            app.config.duration_secs / 60
                        ));
                        ui.add_space(18.0);

                        let btn_w = (content_width * 0.9).clamp(120.0, 400.0);
                        let btn_h = 40.0;

                        if ui
                            .add_sized([btn_w, btn_h], Button::new("▶ Empezar examen"))
                            .clicked()
                        {
                            app.empezar_examen();
                        }

                        ui.add_space(24.0);
                        ui.heading("Historial");
                        ui.add_space(6.0);

                        let rows = app.history_rows();
                        if rows.is_empty() {
                            ui.label("Todavía no hay intentos.");
                        } else {
                            ScrollArea::vertical().max_height(180.0).show(ui, |ui| {
                                for row in &rows {
                                    ui.label(row);
                                }
                            });
                            ui.add_space(8.0);
                            if ui
                                .add_sized([btn_w / 2.0, 32.0], Button::new("🗑 Borrar historial"))
                                .clicked()
                            {
                                app.confirm_clear = true;
                            }
                        }

                        if !app.message.is_empty() {
                            ui.add_space(10.0);
                            ui.label(&app.message);
                        }
                    });
                });
        });

        ui.add_space(vs / 2.0);
    });
}
