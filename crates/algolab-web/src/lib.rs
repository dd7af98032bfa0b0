//! WASM binding for **algolab**.
//!
//! [`Lab`] wraps an [`AlgoLab`] for JavaScript. The page reads the render
//! buffer straight out of linear memory:
//!
//! ```js
//! import init, { Lab } from './pkg/algolab_web.js';
//! const wasm = await init();
//! const lab = new Lab(60, 40);
//! lab.set_start(0);
//! lab.set_end(60 * 40 - 1);
//! const result = lab.run_astar();
//! console.log(result.path_found, result.nodes_explored);
//! const cells = new Uint8Array(wasm.memory.buffer,
//!                               lab.render_buffer_ptr(),
//!                               lab.render_buffer_len());
//! ```
//!
//! The pointer is only valid until the next call into the lab; re-fetch it
//! (and re-create the view, since memory may have grown) after every
//! mutation.

use algolab::{AlgoLab, Algorithm, LabConfig, MazeKind, SearchReport};
use wasm_bindgen::prelude::*;

/// Seed for the maze generators, drawn from `Math.random()`.
fn js_seed() -> u64 {
    let hi = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let lo = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (hi << 32) | lo
}

/// Statistics of one search run, handed to JavaScript by value.
#[wasm_bindgen]
pub struct RunResult {
    report: SearchReport,
}

#[wasm_bindgen]
impl RunResult {
    /// Display name of the algorithm that ran.
    #[wasm_bindgen(getter)]
    pub fn algorithm(&self) -> String {
        self.report.algorithm().name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn path_found(&self) -> bool {
        self.report.path_found()
    }

    #[wasm_bindgen(getter)]
    pub fn path_length(&self) -> u32 {
        self.report.path_length()
    }

    #[wasm_bindgen(getter)]
    pub fn path_cost(&self) -> f64 {
        self.report.path_cost()
    }

    #[wasm_bindgen(getter)]
    pub fn nodes_explored(&self) -> u32 {
        self.report.nodes_explored()
    }

    /// Wall-clock duration of the run in milliseconds.
    #[wasm_bindgen(getter)]
    pub fn execution_time(&self) -> f64 {
        self.report.execution_ms()
    }
}

impl From<SearchReport> for RunResult {
    fn from(report: SearchReport) -> Self {
        Self { report }
    }
}

/// An algolab engine exported to JavaScript.
#[wasm_bindgen]
pub struct Lab {
    inner: AlgoLab,
}

#[wasm_bindgen]
impl Lab {
    /// Create a lab of `width` x `height` empty cells.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<Lab, JsError> {
        let config = LabConfig::new(width, height).with_maze_seed(js_seed());
        let inner = AlgoLab::with_config(config)?;
        Ok(Self { inner })
    }

    pub fn width(&self) -> usize {
        self.inner.width()
    }

    pub fn height(&self) -> usize {
        self.inner.height()
    }

    // Mutators take f64 because JS numbers may be negative or fractional;
    // anything that is not a valid index is ignored by the engine.

    pub fn set_wall(&mut self, idx: f64, active: bool) {
        self.inner.set_wall(js_index(idx), active);
    }

    pub fn set_terrain(&mut self, idx: f64, cost: f32) {
        self.inner.set_terrain(js_index(idx), cost);
    }

    pub fn set_start(&mut self, idx: f64) {
        self.inner.set_start(js_index(idx));
    }

    pub fn set_end(&mut self, idx: f64) {
        self.inner.set_end(js_index(idx));
    }

    pub fn reset_search(&mut self) {
        self.inner.reset_search();
    }

    pub fn reset_all(&mut self) {
        self.inner.reset_all();
    }

    pub fn run_bfs(&mut self) -> RunResult {
        self.inner.run(Algorithm::Bfs).into()
    }

    pub fn run_dfs(&mut self) -> RunResult {
        self.inner.run(Algorithm::Dfs).into()
    }

    pub fn run_dijkstra(&mut self) -> RunResult {
        self.inner.run(Algorithm::Dijkstra).into()
    }

    pub fn run_astar(&mut self) -> RunResult {
        self.inner.run(Algorithm::AStar).into()
    }

    /// Returns the number of open cells, or 0 if the grid is too small.
    pub fn generate_maze_backtracker(&mut self) -> usize {
        self.maze(MazeKind::Backtracker)
    }

    /// Returns the number of open cells, or 0 if the grid is too small.
    pub fn generate_maze_prims(&mut self) -> usize {
        self.maze(MazeKind::Prims)
    }

    pub fn render_buffer_ptr(&mut self) -> *const u8 {
        self.inner.render_buffer_ptr()
    }

    pub fn render_buffer_len(&self) -> usize {
        self.inner.render_buffer_len()
    }
}

impl Lab {
    fn maze(&mut self, kind: MazeKind) -> usize {
        match self.inner.generate_maze(kind) {
            Ok(open) => open,
            Err(err) => {
                web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
                0
            }
        }
    }
}

/// Map a JS number onto the engine's signed index space. NaN and
/// fractional values map to -1, which the engine refuses.
fn js_index(idx: f64) -> i64 {
    if idx.is_nan() || idx.fract() != 0.0 {
        -1
    } else {
        // Saturating cast; out-of-range values are refused downstream.
        idx as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_result_exposes_report() {
        let mut lab = AlgoLab::new(3, 3).unwrap();
        lab.set_start(0);
        lab.set_end(8);
        let result = RunResult::from(lab.run(Algorithm::Bfs));
        assert!(result.path_found());
        assert_eq!(result.path_length(), 4);
        assert!(result.nodes_explored() <= 9);
        assert_eq!(result.path_cost(), 4.0);
        assert_eq!(result.algorithm(), "BFS");
        assert!(result.execution_time() >= 0.0);
    }

    #[test]
    fn js_numbers_map_to_indices() {
        assert_eq!(js_index(4.0), 4);
        assert_eq!(js_index(-1.0), -1);
        assert_eq!(js_index(2.5), -1);
        assert_eq!(js_index(f64::NAN), -1);
        assert_eq!(js_index(f64::INFINITY), -1);
    }
}
