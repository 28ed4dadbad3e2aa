use super::*;
use std::cell::Cell;

fn counter() -> (Rc<Cell<usize>>, EventHandler) {
    let hits = Rc::new(Cell::new(0));
    let seen = Rc::clone(&hits);
    let handler: EventHandler = Rc::new(move |_: &mut Page, _: &mut Event| {
        seen.set(seen.get() + 1);
    });
    (hits, handler)
}

#[test]
fn multi_listener_registers_each_event_type() -> Result<()> {
    let mut page = Page::from_html("<button id='b'>go</button>")?;
    let button = id(&page, "b")?;
    let (hits, handler) = counter();

    let added = page.add_event_multi_listener(button, "  click   keydown\ttouchstart ", handler);
    assert_eq!(added, 3);
    assert_eq!(page.listener_count(button, "click"), 1);
    assert_eq!(page.listener_count(button, "keydown"), 1);
    assert_eq!(page.listener_count(button, "touchstart"), 1);
    assert_eq!(page.listener_count(button, ""), 0);

    page.dispatch(button, "click")?;
    page.dispatch(button, "touchstart")?;
    page.dispatch(button, "mouseover")?;
    assert_eq!(hits.get(), 2);
    Ok(())
}

#[test]
fn same_handler_is_not_registered_twice_for_a_type() -> Result<()> {
    let mut page = Page::from_html("<button id='b'>go</button>")?;
    let button = id(&page, "b")?;
    let (hits, handler) = counter();

    assert_eq!(page.add_event_multi_listener(button, "click", Rc::clone(&handler)), 1);
    assert_eq!(page.add_event_multi_listener(button, "click focus", handler), 1);
    assert_eq!(page.listener_count(button, "click"), 1);

    assert_eq!(page.dispatch(button, "click")?, 1);
    assert_eq!(hits.get(), 1);
    Ok(())
}

#[test]
fn dispatch_bubbles_to_ancestors_until_stopped() -> Result<()> {
    let html = r#"
        <div id='outer'><div id='inner'><button id='b'>go</button></div></div>
        "#;

    let mut page = Page::from_html(html)?;
    let outer = id(&page, "outer")?;
    let inner = id(&page, "inner")?;
    let button = id(&page, "b")?;
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));

    for node in [outer, inner, button] {
        let order = Rc::clone(&order);
        let handler: EventHandler = Rc::new(move |_: &mut Page, event: &mut Event| {
            order.borrow_mut().push((event.current_target(), event.target()));
        });
        page.add_event_multi_listener(node, "click", handler);
    }

    assert_eq!(page.dispatch(button, "click")?, 3);
    assert_eq!(
        *order.borrow(),
        vec![(button, button), (inner, button), (outer, button)]
    );

    let stopper: EventHandler = Rc::new(|_: &mut Page, event: &mut Event| {
        event.stop_propagation();
    });
    page.add_event_multi_listener(inner, "click", stopper);
    order.borrow_mut().clear();
    assert_eq!(page.dispatch(button, "click")?, 3);
    assert_eq!(*order.borrow(), vec![(button, button), (inner, button)]);
    Ok(())
}

#[test]
fn listeners_added_during_dispatch_wait_for_the_next_one() -> Result<()> {
    let mut page = Page::from_html("<button id='b'>go</button>")?;
    let button = id(&page, "b")?;
    let (late_hits, late) = counter();

    let installer: EventHandler = Rc::new(move |page: &mut Page, event: &mut Event| {
        page.add_event_multi_listener(event.current_target(), "click", Rc::clone(&late));
    });
    page.add_event_multi_listener(button, "click", installer);

    assert_eq!(page.dispatch(button, "click")?, 1);
    assert_eq!(late_hits.get(), 0);
    assert_eq!(page.dispatch(button, "click")?, 2);
    assert_eq!(late_hits.get(), 1);
    Ok(())
}

#[test]
fn dispatch_to_unknown_node_is_an_error() -> Result<()> {
    let mut page = Page::from_html("<p></p>")?;
    let other = Page::from_html(&"<p></p>".repeat(20))?;
    let foreign = other.get_by_node("p", None)?;
    let far = foreign
        .last()
        .copied()
        .ok_or_else(|| Error::HtmlParse("fixture has no paragraphs".into()))?;

    match page.dispatch(far, "click") {
        Err(Error::UnknownNode(index)) => assert_eq!(index, far.index()),
        other => panic!("expected UnknownNode, got: {other:?}"),
    }
    let (_, handler) = counter();
    assert_eq!(page.add_event_multi_listener(far, "click", handler), 0);
    Ok(())
}

#[test]
fn trace_logs_record_quiet_fallthroughs() -> Result<()> {
    let mut page = Page::without_storage("<div id='box'></div>")?;
    page.set_trace_stderr(false);
    page.enable_trace(true);

    let node = id(&page, "box")?;
    assert_eq!(page.get_by_id("missing"), None);
    page.storage_set_item("k", "v");
    page.add_class(node, "open", false);
    page.remove_scroll(true);

    let logs = page.take_trace_logs();
    assert!(logs.iter().any(|line| line.starts_with("[dom] get_by_id miss")));
    assert!(logs.iter().any(|line| line == "[storage] set \"k\" unavailable"));
    assert!(logs.iter().any(|line| line.starts_with("[class] add \"open\" on div#box")));
    assert!(logs.iter().any(|line| line.starts_with("[scroll] body overflow=hidden")));
    assert!(page.take_trace_logs().is_empty());

    let document = page.document();
    page.remove_class(document, "a");
    assert!(!page.is_visible(document));
    assert!(page.storage_keys().is_empty());
    assert!(!page.has_class(document, "a"));

    let logs = page.take_trace_logs();
    assert_eq!(
        logs,
        vec![
            "[class] remove \"a\" skipped: not an element".to_string(),
            "[dom] is_visible on non-element document".to_string(),
            "[storage] keys unavailable".to_string(),
            "[class] has \"a\" on non-element".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn trace_is_off_by_default_and_bounded() -> Result<()> {
    let mut page = Page::from_html("<div></div>")?;
    page.set_trace_stderr(false);
    page.get_by_id("a");
    assert!(page.take_trace_logs().is_empty());

    page.enable_trace(true);
    page.set_trace_log_limit(2)?;
    for key in ["a", "b", "c"] {
        page.get_by_id(key);
    }
    let logs = page.take_trace_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].contains("\"b\""));
    assert!(logs[1].contains("\"c\""));

    match page.set_trace_log_limit(0) {
        Err(Error::InvalidConfig(_)) => {}
        other => panic!("expected InvalidConfig, got: {other:?}"),
    }
    Ok(())
}
