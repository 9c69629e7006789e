mod layers;

pub use layers::*;
