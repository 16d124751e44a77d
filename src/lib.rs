// FamCal Core Library
// Exports the color and countdown engine shared by the calendar apps

pub mod models;
pub mod services;
pub mod utils;
