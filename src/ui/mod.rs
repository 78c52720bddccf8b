//! UI module - reusable widgets and display formatting

pub mod components;
