//! Database repository layer.
//!
//! Repositories handle all database operations and return domain models, converting
//! SeaORM entity models internally so database structures never leak into the service
//! and controller layers.

pub mod guild_command;

#[cfg(test)]
mod test;
