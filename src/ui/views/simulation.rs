use crate::ExamApp;
use crate::model::AnswerKey;
use crate::ui::helpers::record_image;
use crate::ui::layout::simple_panel;
use crate::ui::views::notes::note_content;
use egui::{Context, RichText, ScrollArea};

pub fn ui_simulation(app: &mut ExamApp, ctx: &Context) {
    simple_panel(ctx, 680.0, |ui| {
        ui.heading("🧪 Simulación");
        ui.add_space(8.0);

        ScrollArea::vertical().max_height(560.0).show(ui, |ui| {
            if app.simulations.is_empty() {
                ui.label("No hay simulaciones cargadas.");
            }
            for sim in &app.simulations {
                if let Some(label) = &sim.label {
                    ui.label(RichText::new(label).strong());
                }
                record_image(ui, sim.image.as_deref());
                if let Some(instructions) = &sim.instructions {
                    note_content(ui, instructions);
                }
                if let Some(question) = &sim.question {
                    ui.add_space(4.0);
                    ui.label(RichText::new(question).italics());
                }
                if let Some(options) = &sim.options {
                    for (key, text) in options {
                        ui.label(format!("{key}. {text}"));
                    }
                }
                if let Some(answer) = &sim.answer {
                    let keys = match answer {
                        AnswerKey::Single(k) => k.clone(),
                        AnswerKey::Multiple(ks) => ks.join(", "),
                    };
                    ui.label(format!("Respuesta: {keys}"));
                }
                if let Some(explanation) = &sim.explanation {
                    ui.label(RichText::new(explanation).italics());
                }
                ui.add_space(14.0);
            }
        });

        ui.add_space(8.0);
        if ui.button("⬅ Volver").clicked() {
            app.volver_de_recursos();
        }
    });
}
