use htmr::{
    convert, Children, Converted, DefaultTransform, HtmrConfig, Overrides, PartialOptions,
    PropValue, Props, Rendered, VElement, INNER_HTML_PROP,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn single(converted: Converted<VElement>) -> VElement {
    match converted {
        Converted::Single(Rendered::Element(element)) => element,
        other => panic!("expected a single element, got {:?}", other),
    }
}

#[test]
fn div_with_class_and_entity() {
    let converted = convert(r#"<div class="a">Hi &amp; bye</div>"#, PartialOptions::new());

    assert_eq!(
        converted.to_json(),
        json!({
            "tag": "div",
            "props": { "className": "a", "key": "0" },
            "children": ["Hi & bye"]
        })
    );
}

#[test]
fn style_block_is_raw_content() {
    let style = single(convert("<style>.a{color:red}</style>", PartialOptions::new()));

    assert_eq!(style.tag, "style");
    assert_eq!(style.children, None);
    assert_eq!(
        style.prop(INNER_HTML_PROP).and_then(PropValue::as_inner_html),
        Some(".a{color:red}")
    );
}

#[test]
fn table_whitespace_is_dropped() {
    let converted = convert("<table><tr>\n  <td>x</td>\n</tr></table>", PartialOptions::new());

    assert_eq!(
        converted.to_json(),
        json!({
            "tag": "table",
            "props": { "key": "0" },
            "children": [{
                "tag": "tr",
                "props": { "key": "0" },
                "children": [{
                    "tag": "td",
                    "props": { "key": "1" },
                    "children": ["x"]
                }]
            }]
        })
    );
}

#[test]
fn sibling_roots_become_a_sequence() {
    let converted = convert("<div>A</div><div>B</div>", PartialOptions::new());

    let roots = match converted {
        Converted::Many(roots) => roots,
        other => panic!("expected a sequence, got {:?}", other),
    };
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0].as_element().unwrap().text_content(), "A");
    assert_eq!(roots[1].as_element().unwrap().text_content(), "B");
}

#[test]
fn anchor_override_is_used_unchanged() {
    let overrides = Overrides::new().with_tag("a", |tag, props, children| {
        Rendered::Element(VElement {
            tag: "RouterLink".to_string(),
            props: {
                let mut props = props;
                props.insert("to".to_string(), PropValue::from(tag));
                props
            },
            children,
        })
    });

    let converted = convert(
        r#"<p>See <a href="/docs">docs</a> and <a href="/api">api</a></p>"#,
        PartialOptions::new().transform(overrides),
    );
    let p = single(converted);

    let links: Vec<_> = p
        .children()
        .iter()
        .filter_map(Rendered::as_element)
        .collect();
    assert_eq!(links.len(), 2);
    for link in links {
        assert_eq!(link.tag, "RouterLink");
        assert_eq!(link.prop("to"), Some(&PropValue::from("a")));
    }
}

#[test]
fn preserved_attributes_stay_verbatim() {
    let converted = convert(
        r#"<label for="name" class="x" tabindex="2">Name</label>"#,
        PartialOptions::new().preserve_attributes(["class"]),
    );
    let label = single(converted);

    let names: Vec<_> = label.props.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["htmlFor", "class", "tabIndex", "key"]);
}

#[test]
fn nested_markup_round_trips_structure() {
    let html = r#"<article id="post"><h1>Title</h1><p>First <em>emphasis</em> &lt;ok&gt;</p><img src="a.png" alt="A"></article>"#;
    let article = single(convert(html, PartialOptions::new()));

    let tags: Vec<_> = article
        .children()
        .iter()
        .filter_map(Rendered::as_element)
        .map(|child| child.tag.as_str())
        .collect();
    assert_eq!(tags, vec!["h1", "p", "img"]);

    let p = article.children()[1].as_element().unwrap();
    assert_eq!(p.text_content(), "First emphasis <ok>");

    let img = article.children()[2].as_element().unwrap();
    assert_eq!(img.children, None);
    assert_eq!(img.prop("alt"), Some(&PropValue::from("A")));
}

struct Tagged;

impl DefaultTransform<VElement> for Tagged {
    fn element(&self, tag: &str, mut props: Props, children: Children<VElement>) -> Rendered<VElement> {
        props.insert("data-source".to_string(), PropValue::from("html"));
        Rendered::Element(VElement {
            tag: tag.to_string(),
            props,
            children,
        })
    }
}

#[test]
fn wildcard_transform_sees_every_tag() {
    let converted = convert(
        "<ul><li>one</li><li>two</li></ul>",
        PartialOptions::new().transform(Overrides::new().with_default(Tagged)),
    );
    let ul = single(converted);

    assert_eq!(ul.prop("data-source"), Some(&PropValue::from("html")));
    for li in ul.children().iter().filter_map(Rendered::as_element) {
        assert_eq!(li.prop("data-source"), Some(&PropValue::from("html")));
    }
}

#[test]
fn options_from_config() {
    let config = HtmrConfig::from_toml_str(
        r#"
preserve_attributes = ["/^v-/"]
dangerously_set_children = ["code"]
"#,
    )
    .unwrap();

    let converted = convert(
        r#"<code v-pre="">  &lt;b&gt;  </code><style>p{}</style>"#,
        config.into_options().unwrap(),
    );
    let roots = converted.into_vec();

    let code = roots[0].as_element().unwrap();
    assert_eq!(code.prop("v-pre"), Some(&PropValue::Boolean(true)));
    assert_eq!(
        code.prop(INNER_HTML_PROP).and_then(PropValue::as_inner_html),
        Some("&lt;b&gt;")
    );

    // `style` is no longer in the configured set, so its text is a plain child
    let style = roots[1].as_element().unwrap();
    assert_eq!(style.prop(INNER_HTML_PROP), None);
    assert_eq!(style.children(), &[Rendered::Text("p{}".to_string())]);
}

#[test]
fn empty_input_serializes_to_null() {
    assert_eq!(convert("", PartialOptions::new()).to_json(), json!(null));
}
