use super::*;

#[test]
fn fragments_get_an_implied_html_and_body() -> Result<()> {
    let page = Page::from_html("<p id='p'>hi</p>")?;
    let html = page
        .document_element()
        .ok_or_else(|| Error::HtmlParse("no document element".into()))?;
    let body = page.body().ok_or_else(|| Error::HtmlParse("no body".into()))?;
    assert_eq!(page.tag_name(html), Some("html"));
    assert_eq!(page.parent(body), Some(html));
    assert_eq!(page.parent(id(&page, "p")?), Some(body));
    assert_eq!(page.parent(html), Some(page.document()));
    Ok(())
}

#[test]
fn head_stays_outside_the_implied_body() -> Result<()> {
    let page = Page::from_html("<html><head><title id='t'>x</title></head><div id='d'></div></html>")?;
    let body = page.body().ok_or_else(|| Error::HtmlParse("no body".into()))?;
    assert_eq!(page.parent(id(&page, "d")?), Some(body));
    let title_parent = page.parent(id(&page, "t")?);
    assert_eq!(title_parent.and_then(|head| page.tag_name(head)), Some("head"));
    Ok(())
}

#[test]
fn optional_end_tags_are_implied() -> Result<()> {
    let html = "<ul id='l'><li id='a'>one<li id='b'>two</ul><p id='p1'>x<p id='p2'>y";
    let page = Page::from_html(html)?;
    let list = id(&page, "l")?;
    assert_eq!(page.parent(id(&page, "a")?), Some(list));
    assert_eq!(page.parent(id(&page, "b")?), Some(list));
    assert_eq!(page.parent(id(&page, "p2")?), page.body());
    Ok(())
}

#[test]
fn entities_and_raw_text_are_decoded_as_text() -> Result<()> {
    let html = "<p id='p'>a &amp; b &lt;c&gt; &#65;</p><script id='s'>if (a < b) {}</script>";
    let page = Page::from_html(html)?;
    assert_eq!(page.text_content(id(&page, "p")?), "a & b <c> A");
    assert_eq!(page.text_content(id(&page, "s")?), "if (a < b) {}");
    Ok(())
}

#[test]
fn valueless_and_duplicate_attributes() -> Result<()> {
    let page = Page::from_html("<input id='i' disabled class='a' class='b'>")?;
    let input = id(&page, "i")?;
    assert_eq!(page.attribute(input, "disabled"), Some(""));
    assert_eq!(page.class_name(input), Some("a"));
    Ok(())
}

#[test]
fn malformed_markup_is_an_error() {
    for html in ["<div", "<!-- open", "<script>never closed"] {
        match Page::from_html(html) {
            Err(Error::HtmlParse(_)) => {}
            other => panic!("expected HtmlParse for {html:?}, got: {other:?}"),
        }
    }
}

#[test]
fn top_level_content_beside_html_moves_into_the_body() -> Result<()> {
    let html = "<p id='before'>a</p>\n<html><head></head><body><p id='inside'>b</p></body></html>\n<i id='after'>c</i>";
    let page = Page::from_html(html)?;
    let body = page.body().ok_or_else(|| Error::HtmlParse("no body".into()))?;
    let before = id(&page, "before")?;
    let inside = id(&page, "inside")?;
    let after = id(&page, "after")?;
    assert_eq!(page.parent(before), Some(body));
    assert_eq!(page.parent(after), Some(body));
    assert_eq!(page.get_by_node("body > p, body > i", None)?, vec![before, inside, after]);
    assert_eq!(page.get_parent_by_class(before, "missing", true), Some(body));
    Ok(())
}
