//! Data models for the Adroute API

pub mod decision;
pub mod target;
pub mod visitor;
