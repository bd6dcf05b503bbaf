//! Backend bridge: command queue from the UI thread to the prediction worker.

pub mod commands;
pub mod runtime;
