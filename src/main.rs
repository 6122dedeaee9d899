use mock_exam::ExamApp;
use mock_exam::history::LocalStore;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Mock Cloud+ Exam",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ExamApp::new(Box::new(LocalStore::default()))))
        }),
    )
}

// Entrada web: el examen corre en el navegador sobre un canvas
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("sin window")
            .document()
            .expect("sin document");
        let canvas = document
            .get_element_by_id("exam_canvas")
            .expect("falta el canvas #exam_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("#exam_canvas no es un canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| {
                    egui_extras::install_image_loaders(&cc.egui_ctx);
                    Ok(Box::new(ExamApp::new(Box::new(LocalStore::default()))))
                }),
            )
            .await
            .expect("no se pudo arrancar eframe");
    });
}
