fn main() {
    load_wifi_credentials();

    // JSON override read by `FloodlightConfig::load` via `option_env!`.
    println!("cargo:rerun-if-env-changed=FLOODLIGHT_CONFIG");

    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}

/// Export `WIFI_SSID` / `WIFI_PASSWORD` to the compilation.
///
/// Environment variables win over a `.env` file in the crate root.
fn load_wifi_credentials() {
    use std::env;
    use std::path::Path;

    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=WIFI_SSID");
    println!("cargo:rerun-if-env-changed=WIFI_PASSWORD");

    if Path::new(".env").exists() {
        if let Err(e) = dotenvy::dotenv() {
            println!("cargo:warning=Failed to load .env file: {e}");
        }
    }

    let ssid = env::var("WIFI_SSID").unwrap_or_default().trim().to_string();
    let password = env::var("WIFI_PASSWORD").unwrap_or_default().trim().to_string();

    println!("cargo:rustc-env=WIFI_SSID={ssid}");
    println!("cargo:rustc-env=WIFI_PASSWORD={password}");

    if ssid.is_empty() {
        println!("cargo:warning=WIFI_SSID is empty - station will not associate");
    }
}
