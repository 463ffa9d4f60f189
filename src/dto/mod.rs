//! Wire representations and request body codecs.
//!
//! Each resource module defines the JSON shape the API emits (`*Dto`), the list
//! query parameters it accepts, and a `decode` function that turns a parsed
//! JSON body into validated write parameters. Decoding is field-by-field over a
//! `serde_json::Value` so that every missing or malformed field is reported,
//! not just the first.

pub mod api;
pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod field;
pub mod page;
pub mod pilot;
pub mod toy;
