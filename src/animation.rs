pub mod ease;
pub mod motion;
