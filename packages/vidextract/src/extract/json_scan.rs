//! Bounded depth-first scan over untrusted JSON.

use serde_json::Value;

// Traversal budgets. Payloads come from third parties and can be arbitrarily
// large or deeply nested; the scan must terminate in bounded work whether or
// not a match exists.
const MAX_DEPTH: usize = 64;
const NODE_BUDGET: usize = 10_000;

/// Find the first string value anywhere in `value` that contains `.mp4`.
///
/// Depth-first over object values and array items, stopping at the first hit
/// or when the node budget runs out.
pub fn find_mp4(value: &Value) -> Option<String> {
    let mut budget = NODE_BUDGET;
    walk(value, 0, &mut budget)
}

fn walk(value: &Value, depth: usize, budget: &mut usize) -> Option<String> {
    if depth > MAX_DEPTH || *budget == 0 {
        return None;
    }
    *budget -= 1;

    match value {
        Value::String(s) if s.contains(".mp4") => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(|v| walk(v, depth + 1, budget)),
        Value::Object(map) => map.values().find_map(|v| walk(v, depth + 1, budget)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_nested_mp4_string() {
        let v = json!({
            "a": 1,
            "b": { "c": [ { "d": "https://video.twimg.com/vid/a.mp4" } ] }
        });
        assert_eq!(
            find_mp4(&v).as_deref(),
            Some("https://video.twimg.com/vid/a.mp4")
        );
    }

    #[test]
    fn first_match_wins() {
        // serde_json's default map sorts keys, so "a" is visited before "z"
        let v = json!({
            "z": "https://cdn.example/second.mp4",
            "a": "https://cdn.example/first.mp4"
        });
        assert_eq!(find_mp4(&v).as_deref(), Some("https://cdn.example/first.mp4"));
    }

    #[test]
    fn terminates_on_deep_nesting_without_match() {
        let mut v = json!("leaf");
        for _ in 0..100 {
            v = json!({ "next": v });
        }
        assert_eq!(find_mp4(&v), None);
    }

    #[test]
    fn terminates_on_wide_structure_without_match() {
        let items: Vec<Value> = (0..50_000).map(|i| json!(format!("item-{i}"))).collect();
        let v = Value::Array(items);
        assert_eq!(find_mp4(&v), None);
    }

    #[test]
    fn non_string_leaves_are_ignored() {
        let v = json!({ "n": 42, "b": true, "x": null });
        assert_eq!(find_mp4(&v), None);
    }
}
