//! External service integrations

pub mod okx;
