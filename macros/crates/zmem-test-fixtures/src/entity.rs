//! A variable aggregate with a `VectorFixed` field, e.g. `Entity{id=123,
//! weights=[1.0, 2.0, 3.0]}`; also the self-contained element type used by `swarm::Swarm`.

use zmem::{FixedVec, ZmemLayout};

#[derive(Clone, Debug, PartialEq, ZmemLayout)]
pub struct Entity {
    pub id: u64,
    pub weights: FixedVec<f32>,
}
