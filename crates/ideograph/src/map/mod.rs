//! The mind-map engine
//!
//! Components mirror the data flow: the [`store`] owns the tree and its
//! mutations, [`layout`] places new children, the [`viewport`] owns the
//! zoom/pan transform, [`scene`] turns the current state into drawable
//! primitives, [`export`] serializes a scene to SVG, and [`editor`] binds
//! it all into one owned state value for presentation adapters.

pub mod editor;
pub mod export;
pub mod layout;
pub mod scene;
pub mod store;
pub mod viewport;

pub use editor::{Draft, Editor};
pub use export::{write_svg, EXPORT_FILENAME, EXPORT_MIME};
pub use layout::{place, PLACEMENT_RADIUS, SECTOR_COUNT};
pub use scene::{Primitive, Scene, Shape, BRANCH_RADIUS, CANVAS_HEIGHT, CANVAS_WIDTH, ROOT_RADIUS};
pub use store::{MindMap, DEFAULT_ROOT_LABEL, DEFAULT_ROOT_POSITION, ROOT_ID};
pub use viewport::{Transition, ViewTransform, Viewport, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
