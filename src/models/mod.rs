// Data model module
// View models and configuration consumed by the layout and rendering layers

pub mod event;
pub mod matrix;
pub mod options;
