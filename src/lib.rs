pub mod demo;
pub mod env;
pub mod link;
pub mod scenario;

#[cfg(test)]
mod test;
