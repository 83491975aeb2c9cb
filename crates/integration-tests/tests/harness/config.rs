//! Configuration fixtures shared by the integration tests

use std::io::Write;

use indoc::indoc;
use tempfile::NamedTempFile;
use watson_config::Config;

/// Config naming all three services, each at a local URL
pub const ALL_SERVICES: &str = indoc! {r#"
    [discovery]
    url = "http://localhost:8080/discovery"
    version = "2020-08-30"
    headers = { X-Watson-Learning-Opt-Out = "true" }

    [speech_to_text]
    url = "https://stt.example.com"

    [text_to_speech]
    url = "https://tts.example.com/api"
    headers = { X-Watson-Metadata = "customer_id=abc" }

    [logging]
    filter = "watson_core=debug"
"#};

/// Write `contents` to a temporary TOML file
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Load [`ALL_SERVICES`] through a file on disk
pub fn load_all_services() -> Config {
    let file = write_config(ALL_SERVICES);
    Config::load(file.path()).unwrap()
}
