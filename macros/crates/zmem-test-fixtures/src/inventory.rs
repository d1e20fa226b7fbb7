//! `MapFixed` and `MapVariable` fields: keys sorted ascending regardless of insertion order.

use zmem::{FixedMap, FixedStr, VarMap, ZmemLayout};

use crate::entity::Entity;

#[derive(Clone, Debug, PartialEq, ZmemLayout)]
pub struct Inventory {
    pub stock: FixedMap<FixedStr<8>, u32>,
}

/// A map whose values are themselves variable-layout ("u64 total-size header, u64
/// count, entries with inline refs, variable section").
#[derive(Clone, Debug, PartialEq, ZmemLayout)]
pub struct Catalog {
    pub entries: VarMap<FixedStr<8>, Entity>,
}
