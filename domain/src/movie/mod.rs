//! Movie subdomain: catalog entries and the filtered catalog.

pub mod catalog;
pub mod entities;
