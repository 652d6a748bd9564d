//! Backend adapters
//!
//! One module per notification mechanism, each rendering a notification
//! through its port. None of them report failure to the caller.

pub mod desktop;
pub mod native;
pub mod third_party;
pub mod tray;
