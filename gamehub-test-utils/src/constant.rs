pub static TEST_USER_AGENT: &str = "gamehub-tests/0.1 (test@gamehub.example)";
