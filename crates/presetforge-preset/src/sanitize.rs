//! Bulk preset sanitizer.
//!
//! Scrubs embedded binary payloads from existing preset files on disk: the
//! sample payload is reset to the empty placeholder and every wavetable
//! keyframe's `wave_data` is emptied. Everything else is preserved verbatim,
//! which is why this operates on raw [`serde_json::Value`] trees rather than
//! the typed document model - foreign presets may carry fields the model does
//! not know about, and a batch job must not drop them.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use crate::error::PresetResult;

/// Scrubs sample and wavetable payloads from a parsed document in place.
///
/// Tolerates partial documents: missing `settings`, `sample`, or `wavetables`
/// sections are simply skipped, matching the lenient batch contract.
pub fn sanitize_value(doc: &mut Value) {
    let Some(settings) = doc.get_mut("settings") else {
        return;
    };

    if settings.get("sample").is_some() {
        settings["sample"] = json!({
            "length": 0,
            "name": "",
            "sample_rate": 44100,
            "samples": "",
        });
    }

    let Some(wavetables) = settings.get_mut("wavetables").and_then(Value::as_array_mut) else {
        return;
    };
    for table in wavetables {
        let Some(groups) = table.get_mut("groups").and_then(Value::as_array_mut) else {
            continue;
        };
        for group in groups {
            let Some(components) = group.get_mut("components").and_then(Value::as_array_mut)
            else {
                continue;
            };
            for component in components {
                let Some(keyframes) =
                    component.get_mut("keyframes").and_then(Value::as_array_mut)
                else {
                    continue;
                };
                for keyframe in keyframes {
                    keyframe["wave_data"] = Value::String(String::new());
                }
            }
        }
    }
}

/// Sanitizes one preset file in place, rewriting it pretty-printed.
///
/// Parse and I/O failures surface to the caller; the batch runner reports
/// them per file and continues with the next document.
pub fn sanitize_file(path: &Path) -> PresetResult<()> {
    let content = fs::read_to_string(path)?;
    let mut doc: Value = serde_json::from_str(&content)?;
    sanitize_value(&mut doc);
    fs::write(path, serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}
