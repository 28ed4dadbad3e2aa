use super::*;

const FORM_HTML: &str = r#"
    <div id='wrapper' class='wrapper' name='outer'>
      <form id='form' name='signup'>
        <fieldset id='group' name='contact' class='group'>
          <div id='row' class='row'>
            <input id='email' name='email'>
          </div>
        </fieldset>
      </form>
    </div>
    "#;

#[test]
fn get_parent_by_name_skips_non_matching_ancestors() -> Result<()> {
    let page = Page::from_html(FORM_HTML)?;
    let email = id(&page, "email")?;
    assert_eq!(page.get_parent_by_name(email, "signup", false), Some(id(&page, "form")?));
    assert_eq!(page.get_parent_by_name(email, "outer", false), Some(id(&page, "wrapper")?));
    assert_eq!(page.get_parent_by_name(email, "contact", false), Some(id(&page, "group")?));
    Ok(())
}

#[test]
fn get_parent_by_name_does_not_consider_the_element_itself() -> Result<()> {
    let page = Page::from_html(FORM_HTML)?;
    let email = id(&page, "email")?;
    assert_eq!(page.get_parent_by_name(email, "email", false), None);
    Ok(())
}

#[test]
fn get_parent_by_name_miss_stops_at_body() -> Result<()> {
    let page = Page::from_html(FORM_HTML)?;
    let email = id(&page, "email")?;
    assert_eq!(page.get_parent_by_name(email, "nope", false), None);
    assert_eq!(page.get_parent_by_name(email, "nope", true), page.body());
    Ok(())
}

#[test]
fn get_parent_by_name_empty_name_returns_none() -> Result<()> {
    let page = Page::from_html(FORM_HTML)?;
    let email = id(&page, "email")?;
    assert_eq!(page.get_parent_by_name(email, "", true), None);

    let wrapper = id(&page, "wrapper")?;
    assert_eq!(page.get_parent_by_name(wrapper, "", true), page.body());
    Ok(())
}

#[test]
fn get_parent_by_class_walks_up_to_the_nearest_match() -> Result<()> {
    let page = Page::from_html(FORM_HTML)?;
    let email = id(&page, "email")?;
    assert_eq!(page.get_parent_by_class(email, "row", false), Some(id(&page, "row")?));
    assert_eq!(page.get_parent_by_class(email, "group", false), Some(id(&page, "group")?));
    assert_eq!(page.get_parent_by_class(email, "wrapper", false), Some(id(&page, "wrapper")?));
    assert_eq!(page.get_parent_by_class(email, "wrap", false), None);
    assert_eq!(page.get_parent_by_class(email, "wrap", true), page.body());
    Ok(())
}

#[test]
fn parent_traversal_outside_body_yields_none() -> Result<()> {
    let html = r#"
        <html>
          <head><title id='title'>t</title></head>
          <body><p id='p'>x</p></body>
        </html>
        "#;

    let page = Page::from_html(html)?;
    let title = id(&page, "title")?;
    assert_eq!(page.get_parent_by_name(title, "any", true), None);
    assert_eq!(page.get_parent_by_class(title, "any", true), None);

    let root = page.document();
    assert_eq!(page.get_parent_by_class(root, "any", true), None);

    let p = id(&page, "p")?;
    assert_eq!(page.get_parent_by_class(p, "any", true), page.body());
    Ok(())
}

#[test]
fn body_on_miss_is_the_first_body_in_the_document() -> Result<()> {
    let html = r#"
        <html><body id='main'>
          <div id='outer'><body id='nested'><span id='s'></span></body></div>
        </body></html>
        "#;

    let page = Page::from_html(html)?;
    let span = id(&page, "s")?;
    assert_eq!(page.get_parent_by_class(span, "none", true), Some(id(&page, "main")?));
    Ok(())
}
