//! LibraryThing Common Knowledge work lookup.
//!
//! The service answers in XML. Only the first `rating` element below the
//! document root is used. A failed request or a non-success status yields no
//! rating; a body that is not well-formed XML is a parse error and aborts the
//! run.

use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::Url;
use reqwest::blocking::Client;

use crate::error::AppError;

const BASE_URL: &str = "http://www.librarything.com/services/rest/1.1/";
const RATING_TAG: &[u8] = b"rating";

pub struct LibraryThingClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LibraryThingClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, BASE_URL)
    }

    pub fn with_base_url(client: Client, api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Community rating text for `title`, if the service has one.
    pub fn fetch_rating(&self, title: &str) -> Result<Option<String>, AppError> {
        let url = work_url(&self.base_url, title, &self.api_key)?;

        let resp = match self.client.get(url).send() {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(timeout = e.is_timeout(), "community rating request failed");
                return Ok(None);
            }
        };
        if !resp.status().is_success() {
            tracing::debug!(status = %resp.status(), "community rating unavailable");
            return Ok(None);
        }

        let body = resp
            .text()
            .map_err(|e| AppError::transport(format!("Failed to read community rating for '{title}': {e}")))?;

        find_rating(&body)
            .map_err(|e| AppError::parse(format!("Malformed community rating XML for '{title}': {e}")))
    }
}

pub fn work_url(base_url: &str, title: &str, api_key: &str) -> Result<Url, AppError> {
    Url::parse_with_params(
        base_url,
        &[
            ("method", "librarything.ck.getwork"),
            ("title", title),
            ("apikey", api_key),
        ],
    )
    .map_err(|e| AppError::resource(format!("Invalid community rating URL: {e}")))
}

/// Text of the first `rating` element at any depth below the root.
///
/// The whole document is read, so trailing garbage is still an error even
/// after a rating has been found. An empty element counts as absent.
pub fn find_rating(xml: &str) -> Result<Option<String>, String> {
    let mut reader = Reader::from_str(xml);

    let mut depth = 0usize;
    let mut seen_root = false;
    let mut capture: Option<String> = None;
    let mut found: Option<String> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("{e} at byte {}", reader.buffer_position()))?;

        match event {
            Event::Start(e) => {
                if depth == 0 {
                    if seen_root {
                        return Err("content after the document element".to_string());
                    }
                    seen_root = true;
                }
                // Only the element's own leading text counts, not its children's.
                if let Some(text) = capture.take() {
                    found = Some(text);
                }
                if depth > 0 && found.is_none() && e.name().as_ref() == RATING_TAG {
                    capture = Some(String::new());
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 {
                    if seen_root {
                        return Err("content after the document element".to_string());
                    }
                    seen_root = true;
                }
                if let Some(text) = capture.take() {
                    found = Some(text);
                }
                if depth > 0 && found.is_none() && e.name().as_ref() == RATING_TAG {
                    found = Some(String::new());
                }
            }
            Event::Text(t) => {
                if let Some(buf) = capture.as_mut() {
                    let text = t.unescape().map_err(|e| e.to_string())?;
                    buf.push_str(&text);
                } else if depth == 0 && !t.iter().all(u8::is_ascii_whitespace) {
                    return Err("text outside the document element".to_string());
                }
            }
            Event::CData(c) => {
                if let Some(buf) = capture.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Event::End(_) => {
                if let Some(text) = capture.take() {
                    found = Some(text);
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err("no document element".to_string());
    }
    if depth != 0 {
        return Err("unclosed element at end of document".to_string());
    }

    Ok(found
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty()))
}
