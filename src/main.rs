use std::sync::Arc;

use course_player::CoursePlayerApp;
use course_player::config::PlayerConfig;
use course_player::data::{CourseApi, CourseCatalog, YamlCourseApi};

fn course_api(config: &PlayerConfig) -> Arc<dyn CourseApi> {
    let loaded = match &config.course_file {
        Some(path) => YamlCourseApi::load(path),
        None => YamlCourseApi::embedded(),
    };
    match loaded {
        Ok(api) => Arc::new(api),
        Err(err) => {
            log::error!("No se pudo cargar el catálogo de cursos: {err}");
            Arc::new(YamlCourseApi::new(CourseCatalog::default()))
        }
    }
}

fn main() -> eframe::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let config = PlayerConfig::from_env().unwrap_or_else(|err| {
        log::warn!("Configuración inválida, se usan valores por defecto: {err}");
        PlayerConfig::default()
    });
    let api = course_api(&config);

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Reproductor de cursos",
        options,
        Box::new(move |cc| Ok(Box::new(CoursePlayerApp::from_creation_context(cc, config, api)))),
    )
}
