//! Browser entry point. On native targets use `masthead-render` to produce a static page.

#[cfg(target_family = "wasm")]
fn main() {
    use masthead::{web::WebDocument, Config};
    use masthead_app::{App, DEFAULT_CONFIG};

    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed, which is fine to keep.
    let _ = console_log::init_with_level(log::Level::Debug);

    let app = match Config::from_toml(DEFAULT_CONFIG).and_then(App::new) {
        Ok(app) => app,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };

    let Some(document) = WebDocument::current() else {
        log::debug!("no browser document, nothing to mount");
        return;
    };

    if app.boot(&document).is_some() {
        log::info!("mounted into #{}", app.config().container);
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    println!("Build for wasm32-unknown-unknown to run in a browser, or run `masthead-render` for a static page.");
}
