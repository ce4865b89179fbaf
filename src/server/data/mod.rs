//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table each and return domain models. Every
//! method returns `Result<_, DbErr>`; callers decide how a failure surfaces. There are no
//! transactions spanning tables: each call is an independent read or write.

pub mod booking;
pub mod cabin;
pub mod guest;

#[cfg(test)]
mod test;
