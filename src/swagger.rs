use rocket_okapi::swagger_ui::SwaggerUIConfig;

// Points the UI at the openapi.json generated for the /api mount.
pub fn swagger_ui() -> SwaggerUIConfig {
    SwaggerUIConfig {
        url: "/api/openapi.json".to_string(),
        ..Default::default()
    }
}
