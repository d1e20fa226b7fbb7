//! Parses a `#[derive(ZmemLayout)]` input into the validated intermediate model [`render`](
//! crate::render) generates code from.

pub mod field_kind;
pub mod parsed_enum;
pub mod parsed_struct;
pub mod parsing_error;
pub mod require_repr;
