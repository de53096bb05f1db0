pub mod query;

pub use query::{optional, parse_int_or, required, QueryPairs};
