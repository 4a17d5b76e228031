//! Tests for HTTP controller endpoints.
//!
//! Integration tests for the application's HTTP controllers, verifying
//! request handling, response formatting, and error handling for the game
//! catalog endpoints.

mod game;

use gamehub_test_utils::prelude::*;
