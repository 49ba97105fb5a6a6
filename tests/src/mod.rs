#[cfg(test)]
pub mod check_flow_tests;
#[cfg(test)]
pub mod utils;
