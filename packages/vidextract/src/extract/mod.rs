//! The multi-strategy extraction chain.
//!
//! `extract` runs a fixed, ordered list of heuristics over raw content and
//! stops at the first one that yields a non-empty URL. Priority order is the
//! only disambiguation rule when strategies would disagree; it matches the
//! order the strategies are declared in [`STRATEGIES`].

mod json_scan;
mod strategies;

use tracing::debug;

use crate::types::{ExtractionResult, RawContent};

/// Origin prepended to root-relative URLs during normalization.
const CANONICAL_ORIGIN: &str = "https://twitter.com";

/// Caller-facing explanation when every strategy comes up empty.
const NO_VIDEO_DIAGNOSTIC: &str = "No video found. This might be due to:\n\
    • Private/protected tweet\n\
    • Age-restricted content\n\
    • Twitter API limitations\n\
    • The tweet might not contain a video\n\n\
    Try a different public tweet with a video.";

type Strategy = fn(&RawContent) -> Option<String>;

/// The chain, in priority order. First non-empty hit wins.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("api-media-list", strategies::api_media_list),
    ("script-json", strategies::script_json),
    ("video-tag", strategies::video_tag),
    ("meta-tag", strategies::meta_tag),
    ("raw-mp4", strategies::raw_mp4),
    ("inline-literal", strategies::inline_literal),
];

/// Run the strategy chain over fetched content.
///
/// Pure and bounded: no I/O, and every strategy terminates on malformed or
/// adversarial input. Extracted URLs are normalized to absolute form before
/// being returned.
pub fn extract(content: &RawContent) -> ExtractionResult {
    for (name, strategy) in STRATEGIES {
        let Some(candidate) = strategy(content) else {
            continue;
        };
        if candidate.is_empty() {
            continue;
        }
        let url = normalize(&candidate);
        debug!(strategy = %name, url = %url, "video URL extracted");
        return ExtractionResult::hit(url);
    }

    debug!("no strategy produced a video URL");
    ExtractionResult::miss(NO_VIDEO_DIAGNOSTIC)
}

/// Make an extracted URL absolute: scheme-relative URLs get `https:`,
/// root-relative paths get the canonical site origin.
fn normalize(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("//") {
        format!("https://{rest}")
    } else if url.starts_with('/') {
        format!("{CANONICAL_ORIGIN}{url}")
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn html(s: &str) -> RawContent {
        RawContent::Html(s.to_string())
    }

    #[test]
    fn json_media_list_is_extracted() {
        let content = RawContent::Json(json!({
            "media_extended": [
                { "type": "video", "url": "https://video.twimg.com/vid/v.mp4" }
            ]
        }));
        let result = extract(&content);
        assert!(result.found());
        assert_eq!(
            result.video_url(),
            Some("https://video.twimg.com/vid/v.mp4")
        );
    }

    #[test]
    fn video_tag_src_is_extracted_exactly() {
        let result = extract(&html(r#"<html><video src="https://cdn/a.mp4"></video></html>"#));
        assert_eq!(result.video_url(), Some("https://cdn/a.mp4"));
    }

    #[test]
    fn empty_page_misses_with_diagnostic() {
        let result = extract(&html("<html><body><p>just text</p></body></html>"));
        assert!(!result.found());
        assert!(result.diagnostic().contains("Private/protected tweet"));
        assert!(result.diagnostic().contains("Age-restricted"));
    }

    #[test]
    fn scheme_relative_urls_are_normalized() {
        let result = extract(&html(r#"<video src="//cdn/a.mp4">"#));
        assert_eq!(result.video_url(), Some("https://cdn/a.mp4"));
    }

    #[test]
    fn root_relative_urls_get_canonical_origin() {
        let result = extract(&html(r#"<video src="/a.mp4">"#));
        assert_eq!(result.video_url(), Some("https://twitter.com/a.mp4"));
    }

    #[test]
    fn absolute_urls_are_untouched() {
        assert_eq!(normalize("https://cdn/x.mp4"), "https://cdn/x.mp4");
        assert_eq!(normalize("http://cdn/x.mp4"), "http://cdn/x.mp4");
    }

    #[test]
    fn earlier_strategies_take_priority() {
        // Both a <video> tag and a meta tag are present; the tag scan runs
        // first and wins.
        let page = html(concat!(
            r#"<meta property="og:video" content="https://cdn/meta.mp4">"#,
            r#"<video src="https://cdn/tag.mp4">"#,
        ));
        assert_eq!(extract(&page).video_url(), Some("https://cdn/tag.mp4"));
    }

    #[test]
    fn script_json_outranks_raw_text_scan() {
        let page = html(concat!(
            r#"<script type="application/json">"#,
            r#"{"player": {"source": "https://cdn.host/json.mp4"}}"#,
            r#"</script>"#,
            r#"<p>https://video.twimg.com/raw.mp4</p>"#,
        ));
        assert_eq!(extract(&page).video_url(), Some("https://cdn.host/json.mp4"));
    }

    #[test]
    fn non_allow_listed_mp4_in_plain_text_is_ignored() {
        let result = extract(&html("see https://files.example.net/clip.mp4 here"));
        assert!(!result.found());
    }

    #[test]
    fn json_payload_without_media_list_misses() {
        let result = extract(&RawContent::Json(json!({ "tweet": { "text": "hi" } })));
        assert!(!result.found());
    }
}
