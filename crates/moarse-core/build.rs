fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/alphabet/default_alphabet.toml",
        include_str!("src/alphabet/default_alphabet.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    println!("cargo:rerun-if-changed={path}");
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
