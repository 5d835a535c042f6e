//! Complete grammars built on the combinators, usable as they are and as
//! worked examples.
//!
//! Each grammar is assembled once by its constructor and can then parse any
//! number of inputs, from any number of threads.

pub mod calc;
pub mod html;
pub mod json;

pub use calc::Calc;
pub use html::{Element, Html, HtmlTag};
pub use json::Json;
