#![cfg(target_arch = "wasm32")]
// Browser smoke test, run with `wasm-pack test --headless --chrome adastra-web`.

use wasm_bindgen_test::*;
use yew::Renderer;

use adastra_web::app::App;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = web_sys::window()
        .expect("window")
        .document()
        .expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
fn app_mounts_on_the_landing_page() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    let doc = web_sys::window().unwrap().document().unwrap();
    let astronaut = doc
        .query_selector("[data-testid='choose-astronaut']")
        .expect("query choose-astronaut");
    assert!(astronaut.is_some());
}
