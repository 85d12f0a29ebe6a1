pub mod auth;
pub mod delivery;
#[cfg(test)]
pub mod testing;
pub mod usecase;
