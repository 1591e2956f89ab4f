pub mod employees;
pub mod energy_statements;
pub mod health;
pub mod metrics;
pub mod offices;
pub mod request_id;
