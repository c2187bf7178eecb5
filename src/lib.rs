pub mod auth;
pub mod catalog;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod provision;
pub mod selection;
pub mod state;
pub mod statistics;

#[cfg(test)]
mod testing;
