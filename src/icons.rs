//! Icon registry - serves the indicator glyphs as standalone SVG.

use std::borrow::Cow;

use crate::theme::Glyph;

/// SVG markup for a named icon
pub fn icon_svg(name: &str) -> Option<&'static str> {
    Glyph::from_name(name).map(|g| g.svg())
}

/// Merge extra CSS classes into the root `<svg>` element.
pub fn add_classes_to_svg<'a>(svg: &'a str, classes: &str) -> Cow<'a, str> {
    let classes = classes.trim();
    if classes.is_empty() {
        return Cow::Borrowed(svg);
    }

    // Only the opening tag is considered; nested elements keep their own classes
    let Some(tag_end) = svg.find('>') else {
        return Cow::Borrowed(svg);
    };
    let open_tag = &svg[..tag_end];

    const CLASS_ATTR: &str = "class=\"";
    if let Some(attr) = open_tag.find(CLASS_ATTR) {
        let value_start = attr + CLASS_ATTR.len();
        if let Some(len) = open_tag[value_start..].find('"') {
            let mut out = String::with_capacity(svg.len() + classes.len() + 1);
            out.push_str(&svg[..value_start + len]);
            out.push(' ');
            out.push_str(classes);
            out.push_str(&svg[value_start + len..]);
            return Cow::Owned(out);
        }
        return Cow::Borrowed(svg);
    }

    // Self-closing root: keep the slash last
    let insert_at = if open_tag.ends_with('/') {
        tag_end - 1
    } else {
        tag_end
    };
    let mut out = String::with_capacity(svg.len() + classes.len() + 9);
    out.push_str(&svg[..insert_at]);
    out.push_str(&format!(" class=\"{}\"", classes));
    out.push_str(&svg[insert_at..]);
    Cow::Owned(out)
}
