use attention_quiz::QuizApp;
use attention_quiz::data::read_quiz_embedded;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    // El banco se valida antes de abrir la ventana: si está mal, no arrancamos
    let bank = match read_quiz_embedded() {
        Ok(bank) => bank,
        Err(e) => {
            log::error!("{e}");
            return Err(eframe::Error::AppCreation(Box::new(e)));
        }
    };

    let title = bank.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.as_str())
            .with_inner_size([900.0, 960.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(QuizApp::new(bank)))
        }),
    )
}

// ===== SOLO PARA WEB =====
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no hay document en esta ventana");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("falta el canvas #the_canvas_id");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    egui_extras::install_image_loaders(&cc.egui_ctx);
                    let bank = read_quiz_embedded()?;
                    Ok(Box::new(QuizApp::new(bank)))
                }),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("no se pudo arrancar eframe: {e:?}");
        }
    });
}
