//! HTTP controllers: one module per resource.
//!
//! Controllers parse the request, run the auth guard where the resource
//! requires it, delegate to the service layer, and shape the result into the
//! wire representation. Write bodies are decoded field-by-field so validation
//! failures report every bad field at once.

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
pub mod root;
pub mod toy;

#[cfg(test)]
mod test;
