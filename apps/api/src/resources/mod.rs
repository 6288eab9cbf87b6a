// Resource directory: static legal-aid reference data with area and text filters.

pub mod directory;
pub mod handlers;
pub mod search;
