//! A three-layer match-data service used to exercise faults end to end

// Each test binary uses a different part of the harness
#![allow(dead_code)]

pub mod app;
pub mod logs;

use fault_config::Config;
use fault_http::Responder;

/// Configuration every test starts from
pub fn config() -> Config {
    Config::from_toml_str(indoc::indoc! {r#"
        [errors]
        service = "sheazuzu"

        [logging]
        level = "debug"
        format = "console"
    "#})
    .expect("test configuration must be valid")
}

/// Responder for the configured service
pub fn responder() -> Responder {
    Responder::new(config().errors.service)
}
