//! Prowl API XML responses.
//!
//! Prowl answers every call with a small XML document:
//!
//! ```xml
//! <prowl><success code="200" remaining="999" resetdate="1700000000"/></prowl>
//! <prowl><error code="401">Invalid API key</error></prowl>
//! ```

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProwlSuccess {
    pub code: u16,
    /// Calls left in the current rate-limit window.
    pub remaining: Option<u64>,
    /// Unix timestamp when the rate-limit window resets.
    pub reset_date: Option<i64>,
}

/// An error reported by Prowl in the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProwlErrorBody {
    pub code: u16,
    pub message: String,
}

/// Parsed Prowl response document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProwlResponse {
    Success(ProwlSuccess),
    Error(ProwlErrorBody),
}

/// Parse a Prowl response body.
///
/// Returns `None` when the body contains neither a `success` nor an `error`
/// element.
pub fn parse_response(xml: &str) -> Option<ProwlResponse> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut pending_error: Option<ProwlErrorBody> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"success" => return Some(ProwlResponse::Success(success_from(&e))),
                b"error" => {
                    return Some(ProwlResponse::Error(ProwlErrorBody {
                        code: attr_value(&e, b"code")
                            .and_then(|v| v.parse().ok())
                            .unwrap_or_default(),
                        message: String::new(),
                    }));
                }
                _ => {}
            },
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"success" => return Some(ProwlResponse::Success(success_from(&e))),
                b"error" => {
                    pending_error = Some(ProwlErrorBody {
                        code: attr_value(&e, b"code")
                            .and_then(|v| v.parse().ok())
                            .unwrap_or_default(),
                        message: String::new(),
                    });
                }
                _ => {}
            },
            Ok(Event::Text(t)) => {
                if let Some(error) = pending_error.as_mut() {
                    let text = t
                        .unescape()
                        .map(|s| s.into_owned())
                        .unwrap_or_else(|_| String::from_utf8_lossy(&t).into_owned());
                    error.message.push_str(&text);
                }
            }
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"error"
                    && let Some(mut error) = pending_error.take()
                {
                    error.message = error.message.trim().to_string();
                    return Some(ProwlResponse::Error(error));
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    None
}

fn success_from(e: &BytesStart<'_>) -> ProwlSuccess {
    ProwlSuccess {
        code: attr_value(e, b"code")
            .and_then(|v| v.parse().ok())
            .unwrap_or(200),
        remaining: attr_value(e, b"remaining").and_then(|v| v.parse().ok()),
        reset_date: attr_value(e, b"resetdate").and_then(|v| v.parse().ok()),
    }
}

fn attr_value(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == name)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}
