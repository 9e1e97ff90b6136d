//! Physics shapes published for sprites

pub mod collision;
