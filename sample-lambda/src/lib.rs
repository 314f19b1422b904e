pub mod router;
pub mod endpoints;
