//! Runtime module
//!
//! Task handles shared by the endpoint client and the form.

pub mod async_task;

pub use async_task::AsyncTask;
