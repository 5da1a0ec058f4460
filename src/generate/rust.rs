// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rust module dialect: table builders plus `LazyLock` statics

use super::{GeneratedModule, RenderOptions};
use crate::types::LcidMapping;

pub fn render(mapping: &LcidMapping, options: &RenderOptions) -> GeneratedModule {
    let mut module = GeneratedModule::default();
    let capacity = mapping.len();

    module.push(format!(
        "// @generated by lcid-gen from {}. Do not edit.",
        options.source
    ));
    module.push("");
    module.push("use std::collections::HashMap;");
    module.push("use std::sync::LazyLock;");
    module.push("");
    module.push("/// LCID to language tag, built on first access.");
    module.push("pub static LCID_TO_LANG_TAG: LazyLock<HashMap<u32, &'static str>> =");
    module.push("    LazyLock::new(load_lcid_to_lang_tag);");
    module.push("");
    module.push("/// Language tag to LCID, built on first access.");
    module.push("pub static LANG_TAG_TO_LCID: LazyLock<HashMap<&'static str, u32>> =");
    module.push("    LazyLock::new(load_lang_tag_to_lcid);");
    module.push("");

    module.push("pub fn load_lcid_to_lang_tag() -> HashMap<u32, &'static str> {");
    module.push(format!("    let mut data = HashMap::with_capacity({});", capacity));
    for (lcid, tag) in mapping.forward() {
        module.push(format!("    data.insert({}, {:?});", lcid, tag));
    }
    module.push("    data");
    module.push("}");
    module.push("");

    module.push("pub fn load_lang_tag_to_lcid() -> HashMap<&'static str, u32> {");
    module.push(format!("    let mut data = HashMap::with_capacity({});", capacity));
    for (tag, lcid) in mapping.inverse() {
        module.push(format!("    data.insert({:?}, {});", tag, lcid));
    }
    module.push("    data");
    module.push("}");

    module
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LcidRecord;

    #[test]
    fn test_forward_then_inverse_sections() {
        let mapping = LcidMapping::from_records(vec![
            LcidRecord::new(1036, "fr-FR"),
            LcidRecord::new(1033, "en-US"),
        ]);
        let module = render(&mapping, &RenderOptions::default());
        let entries: Vec<&str> = module
            .lines()
            .iter()
            .map(String::as_str)
            .filter(|line| line.contains("data.insert"))
            .collect();

        assert_eq!(
            entries,
            vec![
                r#"    data.insert(1033, "en-US");"#,
                r#"    data.insert(1036, "fr-FR");"#,
                r#"    data.insert("en-US", 1033);"#,
                r#"    data.insert("fr-FR", 1036);"#,
            ]
        );
    }

    #[test]
    fn test_builders_and_statics_present() {
        let module = render(&LcidMapping::default(), &RenderOptions::default());
        let text = module.text();
        assert!(text.contains("pub fn load_lcid_to_lang_tag() -> HashMap<u32, &'static str> {"));
        assert!(text.contains("pub fn load_lang_tag_to_lcid() -> HashMap<&'static str, u32> {"));
        assert!(text.contains("LazyLock::new(load_lcid_to_lang_tag)"));
        assert!(text.starts_with("// @generated"));
    }
}
