pub mod cnf;
pub mod error;
pub mod lit;
pub mod model;
pub mod response;
pub mod utils;
pub mod var;
