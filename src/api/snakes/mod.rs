pub mod handler;
pub mod routes;

pub use routes::all_snake_routes;
