// src/core/html.rs
// Thin helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Html, Selector};

/// Compile a selector from a known-good constant. Returns `None` only
/// if the constant itself is broken, which callers treat as missing markup.
pub fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

pub fn first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let sel = selector(css)?;
    doc.select(&sel).next()
}

pub fn select_all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match selector(css) {
        Some(sel) => doc.select(&sel).collect(),
        None => Vec::new(),
    }
}

/// Direct element children, in document order. Text and comment nodes are skipped.
pub fn element_children<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children().filter_map(ElementRef::wrap)
}

/// Direct element children with the given tag name (ASCII case-insensitive).
pub fn children_named<'a>(el: ElementRef<'a>, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element_children(el).filter(move |c| c.value().name().eq_ignore_ascii_case(tag))
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// All descendant text, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    super::sanitize::normalize_ws(&raw)
}
