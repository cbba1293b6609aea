use crate::options::Limit;
use crate::renderer::components::*;
use crate::renderer::traits::*;
use crate::value::Primitive;

impl Render for Primitive {
    fn render(&self, context: &RenderContext<'_>) -> String {
        match self {
            Primitive::Str(s) => render_string(s, context.options.max_string_length),
            Primitive::Null => r#"<span class="jt-null">null</span>"#.to_string(),
            Primitive::Bool(b) => format!(r#"<span class="jt-bool">{}</span>"#, b),
            Primitive::Int(i) => format!(r#"<span class="jt-num">{}</span>"#, i),
            Primitive::Float(f) => format!(r#"<span class="jt-num">{}</span>"#, float_text(*f)),
            Primitive::Bytes(bytes) => format!(
                "<span>{}</span>",
                escape_html(&format!("b\"{}\"", bytes.escape_ascii()))
            ),
            Primitive::Opaque(value) => {
                format!("<span>{}</span>", escape_html(&format!("{:?}", value)))
            }
        }
    }
}

/// Shortest round-trip text of a float. Whole values keep a fractional
/// part ("1.0"); exponents are signed and at least two digits ("1e+21").
fn float_text(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

/// Quoted string, cut to `limit` characters with a trailing `…` when longer.
fn render_string(value: &str, limit: Limit) -> String {
    let cut = match limit {
        Limit::AtMost(max) => value.char_indices().nth(max).map(|(at, _)| at),
        Limit::Unlimited => None,
    };

    match cut {
        Some(at) => format!(
            r#"<span class="jt-trunc">"{}…"</span>"#,
            escape_html(&value[..at])
        ),
        None => format!(r#"<span class="jt-str">"{}"</span>"#, escape_html(value)),
    }
}
