mod link;
pub use link::{Link, FIRST_REL, LAST_REL, NEXT_REL, PREV_REL};
mod serialize;
pub use serialize::{serialize, serialize_value};
mod header;
pub use header::{append_to, to_header};
mod error;
pub use error::Error;
