//! OSC 8 hyperlinks for URLs found in plain output.

const OSC_PREFIX: &str = "\x1b]8;;";
const ST: &str = "\x1b\\";
const OSC_SUFFIX: &str = "\x1b]8;;\x1b\\";

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Wrap `text` as a hyperlink to `href`. `None` when either part is empty or
/// carries control bytes that would break the escape sequence.
pub fn encode_hyperlink(text: &str, href: &str) -> Option<String> {
    if text.is_empty() || href.is_empty() {
        return None;
    }
    if contains_disallowed_control(text) || contains_disallowed_control(href) {
        return None;
    }
    let mut out =
        String::with_capacity(OSC_PREFIX.len() + href.len() + ST.len() + text.len() + OSC_SUFFIX.len());
    out.push_str(OSC_PREFIX);
    out.push_str(href);
    out.push_str(ST);
    out.push_str(text);
    out.push_str(OSC_SUFFIX);
    Some(out)
}

fn contains_disallowed_control(input: &str) -> bool {
    input.bytes().any(|b| (b < 0x20 && b != b'\t') || b == 0x1b)
}

/// Rewrite every `http://` / `https://` URL in `text` as a clickable link.
/// Everything else passes through unchanged.
pub fn link_urls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = find_scheme(rest) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let len = url_len(tail);
        let url = &tail[..len];
        match encode_hyperlink(url, url) {
            Some(link) => out.push_str(&link),
            None => out.push_str(url),
        }
        rest = &tail[len..];
    }
    out.push_str(rest);
    out
}

/// Byte offset of the earliest scheme in `text`.
fn find_scheme(text: &str) -> Option<usize> {
    SCHEMES.iter().filter_map(|scheme| text.find(scheme)).min()
}

/// Length of the URL at the start of `text`, minus trailing punctuation.
fn url_len(text: &str) -> usize {
    let end = text
        .char_indices()
        .find(|&(_, c)| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>'))
        .map_or(text.len(), |(i, _)| i);
    text[..end]
        .trim_end_matches(['.', ',', ';', ':', '!', '?', ')'])
        .len()
}
