//! Extraction of the SVG element from a raw model reply.
//!
//! Models tend to wrap markup in code fences or surround it with prose; this
//! strips everything outside the outermost `<svg>…</svg>` span. It does not
//! validate or sanitize the markup itself.

/// Return the `<svg>…</svg>` span of `raw`, or an error when the reply does
/// not contain one.
pub fn extract_svg(raw: &str) -> Result<String, String> {
    let start = raw
        .find("<svg")
        .ok_or_else(|| "The model reply did not contain an SVG element.".to_string())?;
    let end = raw
        .rfind("</svg>")
        .filter(|&end| end >= start)
        .ok_or_else(|| "The model reply contained an unterminated SVG element.".to_string())?;
    Ok(raw[start..end + "</svg>".len()].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_bare_markup_through() {
        let svg = "<svg viewBox=\"0 0 10 10\"><rect/></svg>";
        assert_eq!(extract_svg(svg).unwrap(), svg);
    }

    #[test]
    fn strips_code_fences_and_prose() {
        let reply = "Here is your icon:\n```svg\n<svg><circle r=\"4\"/></svg>\n```\nEnjoy!";
        assert_eq!(extract_svg(reply).unwrap(), "<svg><circle r=\"4\"/></svg>");
    }

    #[test]
    fn keeps_nested_svg_elements_intact() {
        let reply = "<svg><svg x=\"1\"/></svg>text</svg>";
        // rfind keeps the outermost closing tag
        assert_eq!(extract_svg(reply).unwrap(), reply);
    }

    #[test]
    fn errors_when_no_svg_is_present() {
        assert!(extract_svg("I cannot draw that.").is_err());
        assert!(extract_svg("</svg> before <svg").is_err());
    }
}
