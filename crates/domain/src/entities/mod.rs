//! Domain entities

mod movie;

pub use movie::{Movie, NewMovie};
