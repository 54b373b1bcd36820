// src/main.rs
//
// Calculatrice: point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------
// - NATIF (Linux/Windows/macOS) : env_logger + réglages d’environnement + run_native
// - WEB  (wasm32)              : WebLogger + WebRunner sur un <canvas>
//
// Côté WEB : index.html doit contenir `<canvas id="the_canvas_id"></canvas>`.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::{AppCalc, Reglages};

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // RUST_LOG=debug pour suivre jetons / RPN / pile
    env_logger::init();

    let reglages = Reglages::depuis_env();
    log::info!("démarrage: mode {} / thème {}", reglages.mode, reglages.theme);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([360.0, 640.0])
            .with_min_inner_size([320.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::depuis_reglages(reglages)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // Le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        // pas d’environnement côté navigateur : réglages par défaut
        eframe::WebLogger::init(log::LevelFilter::Debug).ok();

        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
