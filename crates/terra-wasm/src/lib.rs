//! Browser bindings: a JS renderer acts as the terrain's render target.
//!
//! JS holds a `WasmTerrain`, drives the setters from its UI, calls
//! `generate()`, then uploads `vertices()` / `indices()` / `normals()`.
use js_sys::{Float32Array, Uint32Array};
use serde::Serialize;
use terra_mesh::{TerrainConfig, TerrainGenerator};
use wasm_bindgen::prelude::*;

/// Summary returned from `generate()`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationInfo {
    vertex_count: usize,
    triangle_count: usize,
    anchor: [f32; 3],
    orbit_radius: f32,
    orbit_height: f32,
    offset: (f64, f64),
}

#[wasm_bindgen]
pub struct WasmTerrain {
    inner: TerrainGenerator,
}

#[wasm_bindgen]
impl WasmTerrain {
    /// `config_json` may be partial; omitted fields take defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>, seed: u32) -> Result<WasmTerrain, JsValue> {
        let config = match config_json {
            Some(json) => TerrainConfig::from_json(&json).map_err(to_js)?,
            None => TerrainConfig::default(),
        };
        Ok(Self { inner: TerrainGenerator::seeded(config, seed as u64) })
    }

    #[wasm_bindgen(js_name = setPointSpacing)]
    pub fn set_point_spacing(&mut self, value: f32) {
        self.inner.set_point_spacing(value);
    }

    /// Slider values arrive as floats; truncated like any integer slider.
    #[wasm_bindgen(js_name = setDetail)]
    pub fn set_detail(&mut self, value: f64) {
        self.inner.set_detail(value.max(0.0) as u32);
    }

    #[wasm_bindgen(js_name = setMaxHeight)]
    pub fn set_max_height(&mut self, value: f32) {
        self.inner.set_max_height(value);
    }

    #[wasm_bindgen(js_name = setNoiseStep)]
    pub fn set_noise_step(&mut self, value: f64) {
        self.inner.set_noise_step(value);
    }

    #[wasm_bindgen(js_name = setGridSize)]
    pub fn set_grid_size(&mut self, width: u32, depth: u32) {
        self.inner.set_grid_size(width, depth);
    }

    /// Regenerate; on error the previously generated buffers stay available.
    pub fn generate(&mut self) -> Result<JsValue, JsValue> {
        self.inner.generate().map_err(to_js)?;

        let store = self
            .inner
            .render_target()
            .ok_or_else(|| JsValue::from_str("render target detached"))?;
        let mesh = store.mesh().ok_or_else(|| JsValue::from_str("no mesh published"))?;
        let orbit = self.inner.orbit();
        let info = GenerationInfo {
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            anchor: store.anchor(),
            orbit_radius: orbit.radius,
            orbit_height: orbit.height,
            offset: self.inner.last_offset().unwrap_or_default(),
        };
        serde_wasm_bindgen::to_value(&info).map_err(JsValue::from)
    }

    /// Flattened `x, y, z` positions of the current mesh.
    pub fn vertices(&self) -> Float32Array {
        let flat: Vec<f32> = self
            .inner
            .render_target()
            .and_then(|s| s.mesh())
            .map(|m| m.vertices.iter().flatten().copied().collect())
            .unwrap_or_default();
        Float32Array::from(flat.as_slice())
    }

    pub fn indices(&self) -> Uint32Array {
        let indices = self
            .inner
            .render_target()
            .and_then(|s| s.mesh())
            .map(|m| m.indices.as_slice())
            .unwrap_or(&[]);
        Uint32Array::from(indices)
    }

    /// Flattened per-vertex normals matching `vertices()`.
    pub fn normals(&self) -> Float32Array {
        let flat: Vec<f32> = self
            .inner
            .render_target()
            .map(|s| s.normals().iter().flatten().copied().collect())
            .unwrap_or_default();
        Float32Array::from(flat.as_slice())
    }
}

fn to_js(e: terra_mesh::TerrainError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
