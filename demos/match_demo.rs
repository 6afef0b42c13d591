use std::error::Error;

use anagram::AnagramMatcher;
use serde_json::json;

fn main() -> Result<(), Box<dyn Error>> {
    // Typed path: the caller already has strings.
    let matcher = AnagramMatcher::new("listen");
    let hits = matcher.match_words(["enlists", "google", "inlets", "banana"]);
    println!("reference: {}", matcher.reference());
    for (idx, hit) in hits.iter().enumerate() {
        println!("#{idx} {hit}");
    }

    // Untyped boundary: candidates arrive as loose JSON, e.g. from a config
    // file or an external feed. Non-strings are skipped, not errors.
    let matcher = AnagramMatcher::from_value(&json!("Listen"))?;
    let candidates = vec![json!("SILENT"), json!(7), json!(null), json!("tinsel")];
    let hits = matcher.match_values(Some(&candidates));
    println!("untyped hits: {hits:?}");

    Ok(())
}
