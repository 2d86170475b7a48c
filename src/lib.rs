#[allow(non_snake_case)]
pub mod Joback;
pub mod cli;
pub mod logging;
pub mod settings;
pub mod web;
