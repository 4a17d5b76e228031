//! Gamehub server application core modules.
//!
//! This crate contains the backend for the Gamehub gaming community platform:
//! HTTP routing, the Steam-backed game catalog cache, database operations,
//! and the scheduled cache refresh job. The catalog cache mirrors Steam store
//! data locally with a freshness window so repeated page loads never hammer
//! the storefront API.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
