// web_app/api/mod.rs - API module for server-side logic
//
// This module holds the HTTP client that talks to the inventory REST
// backend on behalf of the server functions.

pub mod backend;
