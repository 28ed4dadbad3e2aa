use super::*;

#[test]
fn remove_scroll_writes_overflow_on_html_and_body() -> Result<()> {
    let mut page = Page::from_html("<p>content</p>")?;
    let html = page
        .document_element()
        .ok_or_else(|| Error::HtmlParse("no document element".into()))?;
    let body = page.body().ok_or_else(|| Error::HtmlParse("no body".into()))?;

    page.remove_scroll(true);
    assert_eq!(page.overflow(html).as_deref(), Some("hidden"));
    assert_eq!(page.overflow(body).as_deref(), Some("hidden"));

    page.remove_scroll(false);
    assert_eq!(page.overflow(html).as_deref(), Some("visible"));
    assert_eq!(page.overflow(body).as_deref(), Some("visible"));
    Ok(())
}

#[test]
fn remove_scroll_keeps_other_inline_declarations() -> Result<()> {
    let mut page = Page::from_html("<body style='color: red; overflow: auto'></body>")?;
    let body = page.body().ok_or_else(|| Error::HtmlParse("no body".into()))?;
    page.remove_scroll(true);
    assert_eq!(page.attribute(body, "style"), Some("color: red; overflow: hidden;"));
    Ok(())
}

#[test]
fn is_visible_needs_a_non_empty_box_in_either_axis() -> Result<()> {
    let mut page = Page::from_html("<div id='box'></div>")?;
    let node = id(&page, "box")?;
    assert!(!page.is_visible(node));

    page.set_offset_size(node, 10, 0)?;
    assert!(page.is_visible(node));
    page.set_offset_size(node, 0, 3)?;
    assert!(page.is_visible(node));
    page.set_offset_size(node, 0, 0)?;
    assert!(!page.is_visible(node));
    page.set_offset_size(node, -5, -5)?;
    assert!(!page.is_visible(node));

    assert_eq!(page.offset_width(node)?, -5);
    assert_eq!(page.offset_height(node)?, -5);
    Ok(())
}

#[test]
fn layout_on_non_elements_is_rejected() -> Result<()> {
    let mut page = Page::from_html("<div id='box'>text</div>")?;
    let document = page.document();
    assert!(!page.is_visible(document));
    match page.set_offset_size(document, 1, 1) {
        Err(Error::NotAnElement(_)) => {}
        other => panic!("expected NotAnElement, got: {other:?}"),
    }
    assert!(page.offset_width(document).is_err());
    Ok(())
}
