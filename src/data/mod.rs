mod builtin;
mod persistence;

pub use builtin::builtin_diet;
pub use persistence::{load_diet, save_diet};
