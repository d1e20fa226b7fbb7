/// Controls whether a read enforces the wire format's canonical encodings or accepts the
/// permissive superset ("Strict vs permissive reads").
///
/// Defaults to [`ReadMode::Permissive`] everywhere: the common case is a buffer this process
/// (or a trusted peer running the same codec) just wrote, where canonical-form violations can't
/// occur and checking for them is wasted work on the hot path. Switch to [`ReadMode::Strict`]
/// when decoding input from an untrusted source.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum ReadMode {
    /// Accept any nonzero byte as a boolean `true`; don't validate optional present-flags or
    /// map key ordering beyond what's needed to locate payloads.
    #[default]
    Permissive,
    /// Reject non-canonical booleans, invalid optional flags, and unsorted or duplicate map
    /// keys.
    Strict,
}

impl ReadMode {
    #[inline(always)]
    pub const fn is_strict(self) -> bool {
        matches!(self, ReadMode::Strict)
    }
}
