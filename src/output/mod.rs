pub mod response;

pub use response::{print_result, print_success, CliResponse};
