pub mod gradients;
pub mod icons;
pub mod model;
pub mod patch;
pub mod prompt;
pub mod shared;
