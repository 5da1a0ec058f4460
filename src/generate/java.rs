// SPDX-License-Identifier: PMPL-1.0-or-later

//! Java dialect: a package-private `Data` class of `Locale` tables

use super::{GeneratedModule, RenderOptions};
use crate::types::LcidMapping;

fn java_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            _ => escaped.push(c),
        }
    }
    escaped.push('"');
    escaped
}

fn locale_expr(tag: &str) -> String {
    format!("Locale.forLanguageTag({})", java_string(tag))
}

pub fn render(mapping: &LcidMapping, options: &RenderOptions) -> GeneratedModule {
    let mut module = GeneratedModule::default();

    module.push(format!(
        "// @generated by lcid-gen from {}. Do not edit.",
        options.source
    ));
    module.push(format!("package {};", options.java_package));
    module.push("");
    module.push("import java.util.HashMap;");
    module.push("import java.util.Locale;");
    module.push("import java.util.Map;");
    module.push("");
    module.push("class Data {");
    module.push("    static final Map<Integer, Locale> lcidToLocale = loadLcidToLocale();");
    module.push("    static final Map<Locale, Integer> localeToLcid = loadLocaleToLcid();");
    module.push("");

    module.push("    static Map<Integer, Locale> loadLcidToLocale() {");
    module.push("        Map<Integer, Locale> data = new HashMap<>();");
    for (lcid, tag) in mapping.forward() {
        module.push(format!("        data.put({}, {});", lcid, locale_expr(tag)));
    }
    module.push("        return data;");
    module.push("    }");
    module.push("");

    module.push("    static Map<Locale, Integer> loadLocaleToLcid() {");
    module.push("        Map<Locale, Integer> data = new HashMap<>();");
    for (tag, lcid) in mapping.inverse() {
        module.push(format!("        data.put({}, {});", locale_expr(tag), lcid));
    }
    module.push("        return data;");
    module.push("    }");
    module.push("}");

    module
}
