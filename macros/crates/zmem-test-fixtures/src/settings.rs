//! `Optional<T>` as a field of a fixed aggregate: two independently constructed absent
//! `Optional<u32>`s, nested inside two fixed structs, produce identical all-zero bytes for the
//! flag, padding, and value region.

use zmem::{Optional, ZmemLayout};

#[derive(Clone, Copy, Debug, PartialEq, ZmemLayout)]
pub struct Settings {
    pub retry_budget: Optional<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, ZmemLayout)]
pub struct Wrapper {
    pub a: Settings,
    pub b: Settings,
}
