//! Mapping of HTML attributes to framework props.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

use htmr_parser::Attributes;

use crate::element::{PropValue, Props};
use crate::options::PreserveAttribute;

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-:](\w)").expect("Invalid separator regex"));

static STYLE_HYPHEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(\w)").expect("Invalid style hyphen regex"));

/// Translate attributes into props.
///
/// Inline event handlers (`on*`) are dropped. `data-*`, `aria-*` and preserved
/// names are kept verbatim; everything else is camel-cased and renamed through
/// [`react_name`]. `style` is parsed into declarations and valueless attributes
/// become `true`.
pub fn map_attributes(attributes: &Attributes, preserve: &[PreserveAttribute]) -> Props {
    let mut props = Props::new();

    for (attr, value) in attributes {
        if attr.starts_with("on") {
            continue;
        }

        let verbatim = attr.starts_with("data-")
            || attr.starts_with("aria-")
            || preserve.iter().any(|rule| rule.matches(attr));

        let camel = if verbatim {
            attr.clone()
        } else {
            to_camel_case(attr)
        };

        let name = if verbatim {
            camel.clone()
        } else {
            react_name(&camel).map_or_else(|| camel.clone(), str::to_string)
        };

        let value = if name == "style" {
            PropValue::Style(parse_style(value))
        } else if value.is_empty() || value.eq_ignore_ascii_case(&camel) {
            PropValue::Boolean(true)
        } else {
            PropValue::String(value.clone())
        };

        props.insert(name, value);
    }

    props
}

/// Convert `accept-charset` or `xlink:href` style names to camelCase.
pub fn to_camel_case(name: &str) -> String {
    SEPARATOR_RE
        .replace_all(name, |caps: &regex::Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Parse an inline style attribute into camel-cased declarations.
///
/// `-ms-` becomes `ms`, other vendor prefixes are capitalized (`-webkit-` to
/// `Webkit`). Declarations without a `:` are skipped; values keep any further
/// colons (`url(http://...)`).
pub fn parse_style(style: &str) -> IndexMap<String, String> {
    let mut declarations = IndexMap::new();

    for declaration in style.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };

        let property = property.trim();
        if property.is_empty() {
            continue;
        }

        let property = match property.strip_prefix("-ms-") {
            Some(rest) => format!("ms-{rest}"),
            None => property.to_string(),
        };
        let property = STYLE_HYPHEN_RE
            .replace_all(&property, |caps: &regex::Captures| caps[1].to_uppercase())
            .into_owned();

        declarations.insert(property, value.trim().to_string());
    }

    declarations
}

/// Framework prop name for a camel-cased HTML attribute, if it differs.
pub fn react_name(name: &str) -> Option<&'static str> {
    let mapped = match name {
        "class" => "className",
        "for" => "htmlFor",
        "accesskey" => "accessKey",
        "allowfullscreen" => "allowFullScreen",
        "autocomplete" => "autoComplete",
        "autofocus" => "autoFocus",
        "autoplay" => "autoPlay",
        "cellpadding" => "cellPadding",
        "cellspacing" => "cellSpacing",
        "charset" => "charSet",
        "classid" => "classID",
        "colspan" => "colSpan",
        "contenteditable" => "contentEditable",
        "contextmenu" => "contextMenu",
        "crossorigin" => "crossOrigin",
        "datetime" => "dateTime",
        "enctype" => "encType",
        "formaction" => "formAction",
        "formenctype" => "formEncType",
        "formmethod" => "formMethod",
        "formnovalidate" => "formNoValidate",
        "formtarget" => "formTarget",
        "frameborder" => "frameBorder",
        "hreflang" => "hrefLang",
        "inputmode" => "inputMode",
        "itemid" => "itemID",
        "itemprop" => "itemProp",
        "itemref" => "itemRef",
        "itemscope" => "itemScope",
        "itemtype" => "itemType",
        "keyparams" => "keyParams",
        "keytype" => "keyType",
        "marginheight" => "marginHeight",
        "marginwidth" => "marginWidth",
        "maxlength" => "maxLength",
        "mediagroup" => "mediaGroup",
        "minlength" => "minLength",
        "nomodule" => "noModule",
        "novalidate" => "noValidate",
        "playsinline" => "playsInline",
        "radiogroup" => "radioGroup",
        "readonly" => "readOnly",
        "referrerpolicy" => "referrerPolicy",
        "rowspan" => "rowSpan",
        "spellcheck" => "spellCheck",
        "srcdoc" => "srcDoc",
        "srclang" => "srcLang",
        "srcset" => "srcSet",
        "tabindex" => "tabIndex",
        "usemap" => "useMap",
        // SVG
        "attributename" => "attributeName",
        "basefrequency" => "baseFrequency",
        "clippathunits" => "clipPathUnits",
        "gradienttransform" => "gradientTransform",
        "gradientunits" => "gradientUnits",
        "markerheight" => "markerHeight",
        "markerunits" => "markerUnits",
        "markerwidth" => "markerWidth",
        "maskcontentunits" => "maskContentUnits",
        "maskunits" => "maskUnits",
        "pathlength" => "pathLength",
        "patterncontentunits" => "patternContentUnits",
        "patterntransform" => "patternTransform",
        "patternunits" => "patternUnits",
        "preserveaspectratio" => "preserveAspectRatio",
        "repeatcount" => "repeatCount",
        "spreadmethod" => "spreadMethod",
        "stddeviation" => "stdDeviation",
        "textlength" => "textLength",
        "viewbox" => "viewBox",
        _ => return None,
    };
    Some(mapped)
}
