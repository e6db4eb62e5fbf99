pub mod html;
pub mod redirect;

pub use html::escape_html;
pub use redirect::{see_other, to_index, with_error};
