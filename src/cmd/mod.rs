pub mod analyze;
pub mod calibrate;
pub mod compare;
pub mod layouts;
pub mod score;
