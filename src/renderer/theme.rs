//! Default stylesheet, scoped to one rendered tree.

const SCOPE_TOKEN: &str = "%SCOPE%";

const STYLESHEET: &str = r#"
<style>
#%SCOPE% {
  font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace;
  font-size: 13px; line-height: 1.45;
}
#%SCOPE% summary {
  cursor: pointer;
  list-style: none;
  display: inline-flex;
  align-items: baseline;
  gap: 0.25rem;
}
#%SCOPE% summary::-webkit-details-marker { display: none; }
#%SCOPE% .jt-summary::before {
  content: "▸";
  display: inline-block;
  width: 1em;
  color: #94a3b8;
}
#%SCOPE% details[open] > .jt-summary::before { content: "▾"; }
#%SCOPE% .jt-details { display: block; }
#%SCOPE% .jt-leaf    { padding-left: 1em; white-space: pre-wrap; word-break: break-all; }

#%SCOPE% .jt-key   { color: #1f2937; }
#%SCOPE% .jt-punct { color: #94a3b8; }
#%SCOPE% .jt-str   { color: #059669; }
#%SCOPE% .jt-trunc { color: #059669; font-style: italic; opacity: 0.85; }
#%SCOPE% .jt-num   { color: #b45309; }
#%SCOPE% .jt-bool  { color: #2563eb; }
#%SCOPE% .jt-null  { color: #dc2626; }
#%SCOPE% .jt-more  { color: #64748b; font-style: italic; }
@media (prefers-color-scheme: dark) {
  #%SCOPE% .jt-summary::before { color: #64748b; }
  #%SCOPE% .jt-key   { color: #e5e7eb; }
  #%SCOPE% .jt-punct { color: #64748b; }
  #%SCOPE% .jt-str   { color: #34d399; }
  #%SCOPE% .jt-trunc { color: #34d399; }
  #%SCOPE% .jt-num   { color: #fbbf24; }
  #%SCOPE% .jt-bool  { color: #60a5fa; }
  #%SCOPE% .jt-null  { color: #f87171; }
  #%SCOPE% .jt-more  { color: #94a3b8; }
  #%SCOPE% .jt-leaf, #%SCOPE% .jt-details { color: #e5e7eb; }
}
</style>
"#;

/// The stylesheet with every selector bound to `#scope`.
pub fn stylesheet(scope: &str) -> String {
    STYLESHEET.replace(SCOPE_TOKEN, scope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_selector_is_scoped() {
        let css = stylesheet("jt-test");
        assert!(!css.contains(SCOPE_TOKEN));
        for line in css.lines().filter(|l| l.trim_end().ends_with('{')) {
            let line = line.trim();
            if line.starts_with("@media") {
                continue;
            }
            assert!(line.starts_with("#jt-test"), "unscoped rule: {}", line);
        }
    }

    #[test]
    fn test_all_classes_have_dark_overrides() {
        let css = stylesheet("s");
        let (light, dark) = css
            .split_once("@media (prefers-color-scheme: dark)")
            .expect("dark mode block");
        for class in [
            "jt-key", "jt-punct", "jt-str", "jt-trunc", "jt-num", "jt-bool", "jt-null", "jt-more",
            "jt-leaf", "jt-details", "jt-summary",
        ] {
            let selector = format!(".{}", class);
            assert!(light.contains(&selector), "no light rule for {}", class);
            assert!(dark.contains(&selector), "no dark rule for {}", class);
        }
    }
}
