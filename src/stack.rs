mod base;
mod error;
mod frames;
mod layers;
mod persist;
mod view;


pub use base::Stack;
pub use error::{Result, StackError};
pub use persist::{COMPOSITION_MODE, IMAGE, LAYERS, NEXT_LAYER_ID, REGIONS, SKY_CS};
