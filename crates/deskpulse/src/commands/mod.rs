pub mod daily;
pub mod index;
pub mod synth;
