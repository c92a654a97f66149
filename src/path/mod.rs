mod resolver;

pub use resolver::{basename, is_plain_name, normalize, PathResolver};
