// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Alerta, CampoTexto, etc.)
// - busca.rs: Search panel and product cards
// - cadastro.rs: Product registration panel
// - upload.rs: Spreadsheet upload panel

pub mod common;
pub mod busca;
pub mod cadastro;
pub mod upload;

// Re-export commonly used components for convenience
pub use common::*;
pub use busca::*;
pub use cadastro::*;
pub use upload::*;
