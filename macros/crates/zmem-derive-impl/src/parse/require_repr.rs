//! See [`repr_ident`].

use syn::{punctuated::Punctuated, Attribute, Ident, Meta, Token};

use crate::parse::parsing_error::ParsingError;

const REPR_IDENT: &str = "repr";
const RECOGNIZED_WIDTHS: &[&str] = &["u8", "u16", "u32", "u64"];

/// Finds a fieldless enum's `#[repr(uN)]` attribute and returns the repr identifier (`u8`, `u16`,
/// `u32`, or `u64`) it names — the width of the integer the enum's discriminant, or a tagged
/// union's leading tag byte, is stored as on the wire.
pub fn repr_ident(attrs: &[Attribute]) -> Result<Ident, ParsingError> {
    for attr in attrs {
        if !attr.path().is_ident(REPR_IDENT) {
            continue;
        }
        let Ok(nested) = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
        else {
            continue;
        };
        for meta in &nested {
            if let Some(ident) = meta.path().get_ident() {
                if RECOGNIZED_WIDTHS.contains(&ident.to_string().as_str()) {
                    return Ok(ident.clone());
                }
            }
        }
    }
    Err(ParsingError::ExpectedReprInteger)
}
