pub mod error;
pub mod from_json;
pub mod json;
pub mod path;
pub mod render;
pub mod tree;
pub mod util;

pub use error::{JsonError, PathError};
pub use from_json::{from_json, from_json_value};
pub use json::{to_json, to_json_pretty, to_json_value};
pub use render::{render, render_with, RenderOptions};
pub use tree::{Data, Domain, Tag, Value};
pub use util::{escape_string, indent_string};
