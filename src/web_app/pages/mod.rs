// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - PaginaInicial: tabbed inventory interface (search, register, upload)

pub mod inicio;

// Re-export page components
pub use inicio::PaginaInicial;
