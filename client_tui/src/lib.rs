//! Terminal front-end for the paddle duel: scene flow, frame driver, input
//! mapping, drawing, and audio cue dispatch. The binary in `main.rs` wires
//! these onto a real terminal; tests drive them headless.

pub mod app;
pub mod audio;
pub mod input;
pub mod paths;
pub mod render;
