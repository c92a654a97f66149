pub mod error;
pub mod flags;
pub mod logging;
pub mod shell;

pub mod core;
pub mod fs;
pub mod highlight;
pub mod identity;
pub mod input;
pub mod path;
