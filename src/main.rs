//! Khodroban landing entry point
//!
//! On the web the library's `web::start` runs when the module loads. Natively
//! this binary checks a landing config file and prints the effective settings.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use khodroban_landing::LandingConfig;

    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Checking landing config {}", path);
            let json = match std::fs::read_to_string(&path) {
                Ok(json) => json,
                Err(e) => {
                    log::error!("Cannot read {}: {}", path, e);
                    std::process::exit(2);
                }
            };
            match LandingConfig::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("{}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            log::info!("No config given, showing defaults");
            LandingConfig::default()
        }
    };

    println!("{}", config.to_json_pretty());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is khodroban_landing::web::start, this is just to satisfy the compiler
}
