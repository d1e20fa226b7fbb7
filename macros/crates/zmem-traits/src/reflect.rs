use crate::kind::Kind;

/// A single field's name and wire-layout kind, as produced by the reflection collaborator.
///
/// ZMEM has no runtime reflection to lean on, so this is the ordered `(name, kind)` list the
/// derive macro synthesizes at compile time by walking the struct's fields with `syn` — or that a
/// hand-written [`Reflect`] impl supplies for a type that can't derive ("An
/// implementation that lacks compile-time reflection can require per-type manifests to be
/// registered by the user").
#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub name: &'static str,
    pub kind: Kind,
}

/// The reflection collaborator's contract: an ordered list of fields for an aggregate type.
///
/// Field names exist only for `Debug` output and the (unimplemented, see `SPEC_FULL.md`
/// Non-goals) optional type-signature derivation; the codec core itself consumes only
/// [`crate::layout::Layout::KIND`] and the generated accessors, never `Field::name`.
pub trait Reflect {
    const FIELDS: &'static [Field];
}
