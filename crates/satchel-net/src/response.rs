use std::io;

use chrono::Local;
use console::style;
use http::header::{self, HeaderValue};
use http::{Response, StatusCode};

fn plain_text(status: StatusCode, body: String) -> Response<String> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

/// A 400 Bad Request carrying `reason` as a plain-text body.
pub fn bad_request(reason: &str) -> Response<String> {
    plain_text(StatusCode::BAD_REQUEST, format!("{reason}\n"))
}

/// Records a timestamped, colored access-denial line on the supplied sink
/// and returns a 401 response naming the denied origin.
///
/// The sink is injected so callers control where the record lands; write
/// failures on the sink are ignored rather than turned into a second
/// failure on the denial path.
pub fn deny_access(origin: &str, log: &mut dyn io::Write) -> Response<String> {
    let record = format!(
        "[{}] Access Denied From: {}",
        Local::now().to_rfc2822(),
        style(origin).blue().bright()
    );
    let _ = writeln!(log, "{}", style(record).red().bright());
    plain_text(
        StatusCode::UNAUTHORIZED,
        format!("You can't access this from {origin}\n"),
    )
}

/// A 302 redirect to `/`.
pub fn redirect_to_home() -> Response<String> {
    let mut response = Response::new(String::new());
    *response.status_mut() = StatusCode::FOUND;
    response
        .headers_mut()
        .insert(header::LOCATION, HeaderValue::from_static("/"));
    response
}
