mod markup;

pub use markup::{escape, Render};
