// src/ui/helpers.rs
use egui::Ui;
use std::path::{Path, PathBuf};

/// Directorio base de las imágenes del banco.
pub const IMAGE_BASE: &str = "assets/images";
/// Sustituto cuando falta la imagen referenciada.
pub const PLACEHOLDER: &str = "assets/placeholder.png";

/// Resuelve la imagen de un registro contra el directorio base. Si el
/// fichero no existe, se sustituye por el placeholder en vez de romper el
/// render. En la web no se puede comprobar: se deja la ruta tal cual.
pub fn resolve_image(image: Option<&str>) -> Option<PathBuf> {
    resolve_in(Path::new(IMAGE_BASE), Path::new(PLACEHOLDER), image)
}

fn resolve_in(base: &Path, placeholder: &Path, image: Option<&str>) -> Option<PathBuf> {
    let name = image?;
    let path = base.join(name);
    #[cfg(not(target_arch = "wasm32"))]
    if !path.exists() {
        return Some(placeholder.to_path_buf());
    }
    #[cfg(target_arch = "wasm32")]
    let _ = placeholder;
    Some(path)
}

/// Pinta la imagen de un registro, si la tiene.
pub fn record_image(ui: &mut Ui, image: Option<&str>) {
    if let Some(path) = resolve_image(image) {
        let uri = format!("file://{}", path.display());
        ui.add(egui::Image::new(uri).max_width(ui.available_width().min(480.0)));
        ui.add_space(8.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_image_resolves_to_nothing() {
        assert_eq!(resolve_image(None), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn missing_file_falls_back_to_the_placeholder() {
        let base = std::env::temp_dir().join("mock_exam_images");
        std::fs::create_dir_all(&base).expect("dir de prueba");
        let placeholder = Path::new("assets/placeholder.png");

        let resolved = resolve_in(&base, placeholder, Some("no-existe.png"));
        assert_eq!(resolved, Some(placeholder.to_path_buf()));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn existing_file_resolves_to_its_path() {
        let base = std::env::temp_dir().join("mock_exam_images");
        std::fs::create_dir_all(&base).expect("dir de prueba");
        let file = base.join("diagrama.png");
        std::fs::write(&file, b"png").expect("fichero de prueba");

        let resolved = resolve_in(&base, Path::new("assets/placeholder.png"), Some("diagrama.png"));
        assert_eq!(resolved, Some(file.clone()));

        std::fs::remove_file(file).ok();
    }
}
