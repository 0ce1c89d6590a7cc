// Library target so integration tests can reach the domain modules.
pub mod domains;
pub mod routes;
pub mod shared;
