pub mod config;
pub mod consts;
pub mod core_types;
pub mod corpus;
pub mod error;
pub mod geometry;
pub mod layouts;
pub mod scorer;
// cmd and reports are binary modules, declared in main.rs.
