//! UI layer.
//!
//! `core` holds the tree model, `widgets` the concrete leaves, `backend` the
//! display adapters and `runtime` the loop glue that feeds tokens in and
//! pushes frames out.

pub mod core;

pub mod backend;

pub mod runtime;

pub mod widgets;
