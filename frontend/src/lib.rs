use leptos::prelude::*;
use roadmap_app::App;
use roadmap_core::{Catalog, Config};
use wasm_bindgen::prelude::wasm_bindgen;

const SITE_CONFIG: &str = include_str!("../../roadmap.toml");

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = Config::from_toml_str(SITE_CONFIG).unwrap_or_else(|err| {
        log::error!("invalid roadmap.toml, using defaults: {err}");
        Config::default()
    });

    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("failed to load roadmap content: {err}");
            return;
        }
    };
    log::info!(
        "loaded {} groups, {} topics",
        catalog.groups().len(),
        catalog.item_count()
    );

    leptos::mount::mount_to_body(move || view! { <App catalog=catalog config=config /> });
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use log::{LevelFilter, Log, Metadata, Record};

    use super::*;

    struct Capture(Mutex<Vec<String>>);

    impl Log for Capture {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            if let Ok(mut targets) = self.0.lock() {
                targets.push(record.target().to_string());
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    #[test]
    fn test_library_tracing_reaches_log() {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(LevelFilter::Trace);

        let catalog = Catalog::from_yaml_str(
            "groups:\n  - id: g\n    title: G\n    items:\n      - id: i\n        slug: i\n        title: I\n        summary: S\n",
        )
        .unwrap();
        assert_eq!(catalog.item_count(), 1);

        let targets = CAPTURE.0.lock().unwrap();
        assert!(
            targets.iter().any(|t| t.starts_with("roadmap_core")),
            "no roadmap_core record in {targets:?}"
        );
    }
}
