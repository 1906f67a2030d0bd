// Start of file: /src/utils/mod.rs

/*
    * Re-exports for all utility modules like error handling,
    * the response envelope and shared helpers.
*/

pub mod error_handler;
pub mod response_handler;
pub mod utils;

// End of file: /src/utils/mod.rs
