#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use bars_wasm::frame::paint_frame;
use bars_wasm::palette::PaletteGenerator;
use bars_wasm::rng::Rng;
use bars_wasm::surface::Surface;
use bars_wasm::theme::{KeyValueStore, Theme, ThemeController};
use bars_wasm::{Canvas2dSurface, DocumentTheme, LocalStore, VisualizerConfig};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn fresh_canvas() -> web_sys::HtmlCanvasElement {
    let canvas = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    document().body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn canvas_fills_viewport() {
    let surface = Canvas2dSurface::new(fresh_canvas()).unwrap();
    surface.fit_to_window().unwrap();

    let window = web_sys::window().unwrap();
    let (w, h) = surface.size();
    assert_eq!(w, window.inner_width().unwrap().as_f64().unwrap().floor());
    assert_eq!(h, window.inner_height().unwrap().as_f64().unwrap().floor());
}

#[wasm_bindgen_test]
fn frame_paints_and_clears() {
    let canvas = fresh_canvas();
    canvas.set_width(64);
    canvas.set_height(32);
    let mut surface = Canvas2dSurface::new(canvas.clone()).unwrap();
    let palette = PaletteGenerator::generate(&mut Rng::new_with_seed(1));
    paint_frame(
        &mut surface,
        &[255; 128],
        &palette,
        &mut Rng::new_with_seed(1),
        &VisualizerConfig::default(),
    );

    let ctx = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .unwrap();
    let alpha_at_bottom_left = ctx.get_image_data(0.0, 31.0, 1.0, 1.0).unwrap().data()[3];
    assert!(alpha_at_bottom_left > 0);

    surface.clear();
    let alpha_after_clear = ctx.get_image_data(0.0, 31.0, 1.0, 1.0).unwrap().data()[3];
    assert_eq!(alpha_after_clear, 0);
}

#[wasm_bindgen_test]
fn theme_persists_in_local_storage() {
    let window = web_sys::window().unwrap();
    let key = "bars-wasm-test-theme";
    let mut store = LocalStore::open(&window);
    store.set(key, "light").unwrap();

    let root = document().document_element().unwrap();
    let button = document().create_element("button").unwrap();
    let mut target = DocumentTheme::new(root.clone(), button.clone());

    let mut theme = ThemeController::init(store, key, &mut target);
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(button.text_content().as_deref(), Some("Dark Mode"));

    assert_eq!(theme.toggle(&mut target), Theme::Dark);
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(button.text_content().as_deref(), Some("Light Mode"));
    assert_eq!(
        LocalStore::open(&window).get(key).unwrap().as_deref(),
        Some("dark")
    );

    window
        .local_storage()
        .unwrap()
        .unwrap()
        .remove_item(key)
        .unwrap();
    assert_eq!(LocalStore::open(&window).get(key).unwrap(), None);
}
