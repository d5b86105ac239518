//! Miscellaneous utility functionality.
//!
//! Specifically, nothing in here is tied to the notation itself, even though
//! it might be useful outside of this crate.
use macro_pub::macro_pub;

/// Builds a [`HashMap`](std::collections::HashMap) from `key => value` pairs,
/// sized exactly for the given entries.
#[macro_pub]
macro_rules! lookup_table {
    ($($key:expr => $value:expr),* $(,)?) => {
        ::std::collections::HashMap::from([$(($key, $value)),*])
    }
}
