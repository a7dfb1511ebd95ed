// src/core/html.rs
// Small navigation helpers over `scraper` trees.
// All of them answer `None` instead of failing; callers decide what absence means.

use scraper::{ElementRef, Selector};

/// Parse a selector written into the source.
pub fn sel(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e:?}"))
}

/// First element under `el` matching `selector`.
pub fn find<'a>(el: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    el.select(selector).next()
}

/// `n`-th element under `el` matching `selector`, in document order.
pub fn nth<'a>(el: ElementRef<'a>, selector: &Selector, n: usize) -> Option<ElementRef<'a>> {
    el.select(selector).nth(n)
}

/// `n`-th direct child node, if it is a text node.
pub fn child_text<'a>(el: ElementRef<'a>, n: usize) -> Option<&'a str> {
    let node = el.children().nth(n)?;
    node.value().as_text().map(|t| &**t)
}

/// `n`-th direct child node, if it is an element.
pub fn child_element<'a>(el: ElementRef<'a>, n: usize) -> Option<ElementRef<'a>> {
    el.children().nth(n).and_then(ElementRef::wrap)
}

/// `n`-th direct child node as visible text: the text itself, or everything
/// under it when the child is an element.
pub fn child_content(el: ElementRef<'_>, n: usize) -> Option<String> {
    if let Some(t) = child_text(el, n) {
        return Some(s!(t));
    }
    child_element(el, n).map(|e| e.text().collect())
}

/// Text of the first child node of `el`, if that child is text.
pub fn first_text<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    child_text(el, 0)
}
