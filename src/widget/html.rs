//! HTML fragment for the music section, built from the slot state.

use std::fmt::Write;

use super::targets::{Element, WidgetTargets};

impl WidgetTargets {
    pub fn to_html(&self) -> String {
        let mut out = String::from("<section class=\"music-section\">\n");

        if let Some(heading) = &self.heading {
            push_element(&mut out, "h2", "class=\"title\"", heading);
        }
        if let Some(loading) = &self.loading {
            push_element(&mut out, "div", "class=\"loading-indicator\"", loading);
        }
        if let Some(art) = &self.art {
            push_element(&mut out, "img", "id=\"trackart\"", art);
        }
        if let Some(title) = &self.title {
            push_element(&mut out, "a", "id=\"tracktitle\"", title);
        }
        if let Some(artist) = &self.artist {
            push_element(&mut out, "span", "id=\"trackartist\"", artist);
        }

        out.push_str("</section>\n");
        out
    }
}

fn push_element(out: &mut String, tag: &str, identity: &str, element: &Element) {
    out.push_str("  <");
    out.push_str(tag);
    out.push(' ');
    out.push_str(identity);

    let attributes = [
        ("src", &element.src),
        ("alt", &element.alt),
        ("href", &element.href),
        ("title", &element.title),
    ];
    for (name, value) in attributes {
        if let Some(value) = value {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
    }
    if element.hidden {
        out.push_str(" style=\"display:none\"");
    }

    // img is a void element
    if tag == "img" {
        out.push_str(">\n");
    } else {
        let _ = writeln!(out, ">{}</{}>", escape(&element.text), tag);
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
