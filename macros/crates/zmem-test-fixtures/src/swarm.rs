//! A `VectorVariable` field over a variable-layout element: each `Entity` in the vector is
//! self-contained and independently decodable from its own byte sub-range.

use zmem::{VarVec, ZmemLayout};

use crate::entity::Entity;

#[derive(Clone, Debug, PartialEq, ZmemLayout)]
pub struct Swarm {
    pub entities: VarVec<Entity>,
}
