//! Wireframe cube frame generator (workspace facade crate).
//!
//! This package keeps the `wirecube::{types, geom, render}` public API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use wirecube_geom as geom;
pub use wirecube_render as render;
pub use wirecube_types as types;
