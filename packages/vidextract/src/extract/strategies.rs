//! The individual extraction strategies.
//!
//! Each strategy is a pure function from raw content to an optional candidate
//! URL. Failures inside a strategy (malformed JSON, missing attributes) are
//! swallowed as `None` so the chain falls through to the next one.

use lazy_static::lazy_static;
use regex::Regex;

use super::json_scan;
use crate::types::RawContent;

/// Hosts accepted by the raw-text scan. Restricting to known video CDNs
/// keeps unrelated `.mp4` matches out of the results.
const ALLOWED_MP4_HOSTS: &[&str] = &["video.twimg.com", "amp.twimg.com"];

lazy_static! {
    // JSON payloads embedded in markup
    static ref SCRIPT_JSON_RE: Regex = Regex::new(
        r#"(?is)<script[^>]*type\s*=\s*["'](?:application/json|application/ld\+json)["'][^>]*>(.*?)</script>"#
    )
    .unwrap();

    // Any script body, for the inline-literal scan
    static ref SCRIPT_ANY_RE: Regex = Regex::new(r"(?is)<script[^>]*>(.*?)</script>").unwrap();

    // <video ...> open tags and their src/data-src attributes. The leading
    // whitespace requirement on `src` keeps it from matching inside
    // `data-src`.
    static ref VIDEO_TAG_RE: Regex = Regex::new(r"(?is)<video\b[^>]*>").unwrap();
    static ref SRC_ATTR_RE: Regex =
        Regex::new(r#"(?i)\ssrc\s*=\s*["']([^"']+)["']"#).unwrap();
    static ref DATA_SRC_ATTR_RE: Regex =
        Regex::new(r#"(?i)\sdata-src\s*=\s*["']([^"']+)["']"#).unwrap();

    // <meta ...> tags, attribute order independent
    static ref META_TAG_RE: Regex = Regex::new(r"(?is)<meta\b[^>]*>").unwrap();
    static ref META_KEY_RE: Regex =
        Regex::new(r#"(?i)(?:property|name)\s*=\s*["']([^"']+)["']"#).unwrap();
    static ref META_CONTENT_RE: Regex =
        Regex::new(r#"(?i)\scontent\s*=\s*["']([^"']+)["']"#).unwrap();

    // Bare mp4 URLs anywhere in the body
    static ref MP4_URL_RE: Regex =
        Regex::new(r#"https?://[^"'\s<>]*\.mp4[^"'\s<>]*"#).unwrap();

    // JSON string literals carrying a video URL inside script content
    static ref VIDEO_URL_LITERAL_RE: Regex =
        Regex::new(r#""video_url"\s*:\s*"([^"]+)""#).unwrap();
    static ref URL_MP4_LITERAL_RE: Regex =
        Regex::new(r#""url"\s*:\s*"([^"]*\.mp4[^"]*)""#).unwrap();
}

/// Strategy 1: structured proxy-API payload — `media_extended` list, first
/// entry typed `video`, take its `url`.
pub(super) fn api_media_list(content: &RawContent) -> Option<String> {
    let RawContent::Json(payload) = content else {
        return None;
    };

    payload
        .get("media_extended")?
        .as_array()?
        .iter()
        .find(|media| media.get("type").and_then(|t| t.as_str()) == Some("video"))?
        .get("url")?
        .as_str()
        .map(str::to_string)
}

/// Strategy 2: JSON payloads in `application/json` / `ld+json` script tags,
/// searched depth-first for any `.mp4` string value.
pub(super) fn script_json(content: &RawContent) -> Option<String> {
    let html = content.as_html()?;

    for cap in SCRIPT_JSON_RE.captures_iter(html) {
        let body = cap.get(1)?.as_str();
        let Ok(payload) = serde_json::from_str::<serde_json::Value>(body) else {
            continue;
        };
        if let Some(url) = json_scan::find_mp4(&payload) {
            return Some(url);
        }
    }
    None
}

/// Strategy 3: `<video>` elements with a `.mp4` in `src` or `data-src`.
pub(super) fn video_tag(content: &RawContent) -> Option<String> {
    let html = content.as_html()?;

    for tag in VIDEO_TAG_RE.find_iter(html) {
        for attr_re in [&*SRC_ATTR_RE, &*DATA_SRC_ATTR_RE] {
            if let Some(cap) = attr_re.captures(tag.as_str()) {
                let src = cap[1].to_string();
                if src.contains(".mp4") {
                    return Some(src);
                }
            }
        }
    }
    None
}

/// Strategy 4: known meta properties carrying a direct video URL, preferred
/// in the order `og:video`, `og:video:url`, `twitter:player:stream`.
pub(super) fn meta_tag(content: &RawContent) -> Option<String> {
    let html = content.as_html()?;

    let mut og_video = None;
    let mut og_video_url = None;
    let mut player_stream = None;

    for tag in META_TAG_RE.find_iter(html) {
        let tag = tag.as_str();
        let Some(key) = META_KEY_RE.captures(tag).map(|c| c[1].to_lowercase()) else {
            continue;
        };
        let Some(value) = META_CONTENT_RE.captures(tag).map(|c| c[1].to_string()) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        match key.as_str() {
            "og:video" => og_video.get_or_insert(value),
            "og:video:url" => og_video_url.get_or_insert(value),
            "twitter:player:stream" => player_stream.get_or_insert(value),
            _ => continue,
        };
    }

    og_video.or(og_video_url).or(player_stream)
}

/// Strategy 5: every `https?://…mp4…` substring in the raw body, filtered to
/// the video-CDN allow-list.
pub(super) fn raw_mp4(content: &RawContent) -> Option<String> {
    let html = content.as_html()?;

    MP4_URL_RE
        .find_iter(html)
        .map(|m| m.as_str())
        .find(|url| ALLOWED_MP4_HOSTS.iter().any(|host| url.contains(host)))
        .map(str::to_string)
}

/// Strategy 6: `"video_url":"…"` / `"url":"…mp4…"` literals inside script
/// content, with JSON escapes decoded (notably `\u0026` → `&`).
pub(super) fn inline_literal(content: &RawContent) -> Option<String> {
    let html = content.as_html()?;

    for cap in SCRIPT_ANY_RE.captures_iter(html) {
        let body = cap.get(1)?.as_str();
        for literal_re in [&*VIDEO_URL_LITERAL_RE, &*URL_MP4_LITERAL_RE] {
            if let Some(m) = literal_re.captures(body) {
                let url = unescape_json_literal(&m[1]);
                if !url.is_empty() {
                    return Some(url);
                }
            }
        }
    }
    None
}

/// Decode the escapes that show up inside inline JSON string literals:
/// `\uXXXX` sequences and escaped slashes.
fn unescape_json_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('u') => {
                chars.next();
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = if hex.len() == 4 {
                    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
                } else {
                    None
                };
                match decoded {
                    Some(decoded) => out.push(decoded),
                    None => {
                        // Not a valid escape; keep the original text
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some('/') => {
                chars.next();
                out.push('/');
            }
            _ => out.push(c),
        }
    }
    out
}
