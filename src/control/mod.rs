pub mod surface;

pub use surface::{ControlEvent, ControlSurface};
