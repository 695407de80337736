//! UI queue implementations.

mod main_queue;

pub use main_queue::{InlineUiQueue, MainQueue, MainQueueRunner};
