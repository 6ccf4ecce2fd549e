use dsa_tracker::TrackerApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 800.0])
            .with_title("DSA Interview Tracker"),
        ..Default::default()
    };

    eframe::run_native(
        "DSA Interview Tracker",
        options,
        Box::new(|cc| Ok(Box::new(TrackerApp::new(cc)))),
    )
}

// ===== SOLO PARA WEB =====
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let document = web_sys::window()
            .expect("no hay objeto window")
            .document()
            .expect("no hay document");

        let canvas = document
            .get_element_by_id("dsa_tracker_canvas")
            .expect("falta el canvas dsa_tracker_canvas en el HTML")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("dsa_tracker_canvas no es un canvas");

        if let Err(e) = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(TrackerApp::new(cc)))),
            )
            .await
        {
            log::error!("no se pudo arrancar la app web: {e:?}");
        }
    });
}
