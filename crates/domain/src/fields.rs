//! Wire names of the movie fields.
//!
//! The HTTP contract (request bodies, query parameters and response objects)
//! uses these names, and validation errors report them back to clients.

pub const TITLE: &str = "titulo";
pub const DIRECTOR: &str = "diretor";
pub const YEAR: &str = "ano";
pub const RATING: &str = "nota";
