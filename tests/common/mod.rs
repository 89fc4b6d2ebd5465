#![allow(dead_code)]

use std::collections::HashMap;

use spotcue::config::Config;

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";

// Helper function to build a configuration pointing at a mock server
pub fn test_config(server_url: &str, extra: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("CLIENT_ID".to_string(), CLIENT_ID.to_string()),
        ("CLIENT_SECRET".to_string(), CLIENT_SECRET.to_string()),
        (
            "REDIRECT_URI".to_string(),
            "http://localhost:{PORT}/callback".to_string(),
        ),
        ("PORT".to_string(), "8888".to_string()),
        ("REFRESH_TOKEN".to_string(), "refresh-token".to_string()),
        ("SPOTIFY_API_URL".to_string(), format!("{}/v1", server_url)),
        (
            "SPOTIFY_API_TOKEN_URL".to_string(),
            format!("{}/api/token", server_url),
        ),
    ]);
    for (key, value) in extra {
        vars.insert(key.to_string(), value.to_string());
    }

    Config::from_lookup(|key| vars.get(key).cloned()).expect("valid test config")
}

// Helper function to build a successful token endpoint body
pub fn token_body(access_token: &str) -> String {
    format!(
        r#"{{"access_token":"{}","token_type":"Bearer","expires_in":3600,"scope":"user-modify-playback-state"}}"#,
        access_token
    )
}

pub fn basic_header() -> String {
    spotcue::types::Credentials::new(CLIENT_ID, CLIENT_SECRET).basic_authorization()
}
