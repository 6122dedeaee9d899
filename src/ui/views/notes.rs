use crate::ExamApp;
use crate::model::NoteContent;
use crate::ui::helpers::record_image;
use crate::ui::layout::simple_panel;
use egui::{Context, RichText, ScrollArea, Ui};

pub fn ui_notes(app: &mut ExamApp, ctx: &Context) {
    simple_panel(ctx, 680.0, |ui| {
        ui.heading("📑 Apuntes");
        ui.add_space(8.0);

        ScrollArea::vertical().max_height(560.0).show(ui, |ui| {
            if app.notes.is_empty() {
                ui.label("No hay apuntes cargados.");
            }
            for note in &app.notes {
                ui.label(RichText::new(&note.title).strong());
                record_image(ui, note.image.as_deref());
                note_content(ui, &note.content);
                ui.add_space(12.0);
            }
        });

        ui.add_space(8.0);
        if ui.button("⬅ Volver").clicked() {
            app.volver_de_recursos();
        }
    });
}

pub fn note_content(ui: &mut Ui, content: &NoteContent) {
    match content {
        NoteContent::Text(text) => {
            ui.label(text);
        }
        NoteContent::Bullets(items) => {
            for item in items {
                ui.label(format!("• {item}"));
            }
        }
    }
}
