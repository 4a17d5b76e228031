//! Tests for game catalog controller endpoints.
//!
//! Integration tests for game retrieval, cache statistics, and the manual
//! refresh trigger endpoints.

mod get_cache_status;
mod get_game;
mod refresh_expired;
mod refresh_popular;

use super::*;
