pub mod collision;
pub mod input;
pub mod movement;
pub mod ramp;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use ramp::*;
pub use scoring::*;
