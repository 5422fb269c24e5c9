use actix_cors::Cors;
use actix_web::http::Uri;

/// Origin entry that opens the API to every origin.
pub const ANY_ORIGIN: &str = "*";

/// True for `*` or an absolute origin such as `http://localhost:8080`.
pub fn is_valid_origin(origin: &str) -> bool {
    if origin == ANY_ORIGIN {
        return true;
    }
    match origin.parse::<Uri>() {
        Ok(uri) => uri.scheme().is_some() && uri.host().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// CORS policy for the web client: configured origins, any method and header, credentials allowed.
///
/// A `*` entry allows every origin; the request origin is echoed back so credentials keep working.
pub fn cors(allowed_origins: &[String]) -> Cors {
    let base =
        Cors::default().allow_any_method().allow_any_header().supports_credentials().max_age(3600);

    if allowed_origins.iter().any(|o| o == ANY_ORIGIN) {
        return base.allow_any_origin();
    }
    allowed_origins.iter().fold(base, |cors, origin| cors.allowed_origin(origin))
}
