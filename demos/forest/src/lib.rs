use wasm_bindgen::prelude::*;
use hopper_engine::*;

mod level;
use level::ForestLevel;

hopper_web::export_level!(ForestLevel, "forest");
