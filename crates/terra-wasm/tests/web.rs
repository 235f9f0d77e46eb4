#![cfg(target_arch = "wasm32")]

use terra_wasm::WasmTerrain;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn generate_fills_buffers() {
    let mut terrain = WasmTerrain::new(Some(r#"{ "grid_width": 4, "grid_depth": 3 }"#.into()), 7).unwrap();
    terrain.generate().unwrap();
    assert_eq!(terrain.vertices().length(), 4 * 3 * 3);
    assert_eq!(terrain.indices().length(), 6 * 3 * 2);
    assert_eq!(terrain.normals().length(), terrain.vertices().length());
}

#[wasm_bindgen_test]
fn zero_detail_is_rejected_and_keeps_buffers() {
    let mut terrain = WasmTerrain::new(None, 1).unwrap();
    terrain.generate().unwrap();
    let before = terrain.indices().length();
    terrain.set_detail(0.0);
    assert!(terrain.generate().is_err());
    assert_eq!(terrain.indices().length(), before);
}
