use poem::middleware::Cors;
use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://localhost:8080";

/// CORS for the catalog admin front-ends
///
/// `CORS_ALLOWED_ORIGINS` holds a comma-separated origin list. Blank entries
/// are ignored; an empty list falls back to the local development origins.
pub fn init_cors() -> Cors {
    let origins = allowed_origins(env::var("CORS_ALLOWED_ORIGINS").ok());
    tracing::debug!(?origins, "CORS origins");

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type"])
        .allow_credentials(true)
}

fn allowed_origins(raw: Option<String>) -> Vec<String> {
    let parse = |value: &str| {
        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>()
    };

    match raw.map(|value| parse(&value)) {
        Some(origins) if !origins.is_empty() => origins,
        _ => parse(DEFAULT_ORIGINS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_and_skip_blank_origins() {
        let origins = allowed_origins(Some(" https://admin.example.com , ,https://shop.example.com".to_string()));

        assert_eq!(origins, vec!["https://admin.example.com", "https://shop.example.com"]);
    }

    #[test]
    fn should_fall_back_to_development_origins() {
        assert_eq!(allowed_origins(Some(" , ".to_string())).len(), 2);
        assert_eq!(allowed_origins(None)[0], "http://localhost:5173");
    }
}
