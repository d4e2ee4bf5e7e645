pub mod backtrack;
pub mod scatter;
