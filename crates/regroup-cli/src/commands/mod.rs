pub mod check;
pub mod dump;
pub mod exec;
pub mod loader;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod loader_tests;
