//! Transform options and per-tag overrides.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::element::{Children, Props, Rendered};
use crate::error::HtmrError;

/// Tags whose first child is injected raw unless configured otherwise.
pub const DEFAULT_DANGEROUS_TAGS: &[&str] = &["style"];

/// Replacement renderer for one tag name.
///
/// Called with the tag name, mapped props and transformed children; its
/// result is used unchanged.
pub type TagTransform<E> = Arc<dyn Fn(&str, Props, Children<E>) -> Rendered<E> + Send + Sync>;

/// Fallback renderer used for tags without a specific override, and for text.
pub trait DefaultTransform<E>: Send + Sync {
    /// Render an element.
    fn element(&self, tag: &str, props: Props, children: Children<E>) -> Rendered<E>;

    /// Render decoded text.
    fn text(&self, text: String) -> Rendered<E> {
        Rendered::Text(text)
    }
}

/// Per-tag overrides plus an optional wildcard fallback.
pub struct Overrides<E> {
    tags: HashMap<String, TagTransform<E>>,
    fallback: Option<Arc<dyn DefaultTransform<E>>>,
}

impl<E> Overrides<E> {
    /// Create an empty override table.
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
            fallback: None,
        }
    }

    /// Register an override for a tag name.
    pub fn with_tag<F>(mut self, tag: impl Into<String>, render: F) -> Self
    where
        F: Fn(&str, Props, Children<E>) -> Rendered<E> + Send + Sync + 'static,
    {
        self.insert(tag, render);
        self
    }

    /// Set the wildcard fallback.
    pub fn with_default<T>(mut self, fallback: T) -> Self
    where
        T: DefaultTransform<E> + 'static,
    {
        self.fallback = Some(Arc::new(fallback));
        self
    }

    /// Register an override for a tag name, replacing any previous one.
    pub fn insert<F>(&mut self, tag: impl Into<String>, render: F)
    where
        F: Fn(&str, Props, Children<E>) -> Rendered<E> + Send + Sync + 'static,
    {
        self.tags.insert(tag.into(), Arc::new(render));
    }

    /// Override registered for a tag name.
    pub fn get(&self, tag: &str) -> Option<&TagTransform<E>> {
        self.tags.get(tag)
    }

    /// The wildcard fallback, if any.
    pub fn default_transform(&self) -> Option<&dyn DefaultTransform<E>> {
        self.fallback.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.fallback.is_none()
    }
}

impl<E> Default for Overrides<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Overrides<E> {
    fn clone(&self) -> Self {
        Self {
            tags: self.tags.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

impl<E> fmt::Debug for Overrides<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.tags.keys().collect();
        tags.sort();
        f.debug_struct("Overrides")
            .field("tags", &tags)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

/// An attribute name rule exempt from name translation.
#[derive(Debug, Clone)]
pub enum PreserveAttribute {
    /// Exact attribute name
    Name(String),
    /// Regular expression matched against the attribute name
    Pattern(Regex),
}

impl PreserveAttribute {
    /// Compile a pattern rule.
    pub fn pattern(pattern: &str) -> Result<Self, HtmrError> {
        Regex::new(pattern)
            .map(PreserveAttribute::Pattern)
            .map_err(|source| HtmrError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Parse a configuration entry; `/.../` denotes a pattern.
    pub fn parse(entry: &str) -> Result<Self, HtmrError> {
        match entry
            .strip_prefix('/')
            .and_then(|rest| rest.strip_suffix('/'))
        {
            Some(pattern) if !pattern.is_empty() => Self::pattern(pattern),
            _ => Ok(PreserveAttribute::Name(entry.to_string())),
        }
    }

    pub fn matches(&self, attr: &str) -> bool {
        match self {
            PreserveAttribute::Name(name) => name == attr,
            PreserveAttribute::Pattern(re) => re.is_match(attr),
        }
    }
}

impl From<&str> for PreserveAttribute {
    fn from(name: &str) -> Self {
        PreserveAttribute::Name(name.to_string())
    }
}

impl From<String> for PreserveAttribute {
    fn from(name: String) -> Self {
        PreserveAttribute::Name(name)
    }
}

/// Fully resolved options for one conversion.
#[derive(Debug, Clone)]
pub struct TransformOptions<E> {
    /// Per-tag overrides and wildcard fallback
    pub transform: Overrides<E>,

    /// Attribute names passed through without translation
    pub preserve_attributes: Vec<PreserveAttribute>,

    /// Tags whose first child's raw text is injected as inner HTML
    pub dangerously_set_children: HashSet<String>,
}

impl<E> TransformOptions<E> {
    /// Check whether a tag's content is injected raw.
    pub fn sets_children_dangerously(&self, tag: &str) -> bool {
        self.dangerously_set_children.contains(tag)
    }
}

impl<E> Default for TransformOptions<E> {
    fn default() -> Self {
        PartialOptions::default().normalize()
    }
}

/// Caller-supplied options; missing fields take defaults.
#[derive(Debug, Clone)]
pub struct PartialOptions<E> {
    pub transform: Option<Overrides<E>>,
    pub preserve_attributes: Option<Vec<PreserveAttribute>>,
    pub dangerously_set_children: Option<HashSet<String>>,
}

impl<E> PartialOptions<E> {
    pub fn new() -> Self {
        Self {
            transform: None,
            preserve_attributes: None,
            dangerously_set_children: None,
        }
    }

    /// Set the override table.
    pub fn transform(mut self, overrides: Overrides<E>) -> Self {
        self.transform = Some(overrides);
        self
    }

    /// Set the attribute names exempt from translation.
    pub fn preserve_attributes<I, P>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PreserveAttribute>,
    {
        self.preserve_attributes = Some(rules.into_iter().map(Into::into).collect());
        self
    }

    /// Set the tags whose content is injected raw. Replaces the default.
    pub fn dangerously_set_children<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dangerously_set_children = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Merge with defaults.
    pub fn normalize(self) -> TransformOptions<E> {
        TransformOptions {
            transform: self.transform.unwrap_or_default(),
            preserve_attributes: self.preserve_attributes.unwrap_or_default(),
            dangerously_set_children: self.dangerously_set_children.unwrap_or_else(|| {
                DEFAULT_DANGEROUS_TAGS
                    .iter()
                    .map(|tag| tag.to_string())
                    .collect()
            }),
        }
    }
}

impl<E> Default for PartialOptions<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<PartialOptions<E>> for TransformOptions<E> {
    fn from(options: PartialOptions<E>) -> Self {
        options.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::VElement;

    struct Uppercase;

    impl DefaultTransform<VElement> for Uppercase {
        fn element(&self, tag: &str, _props: Props, _children: Children<VElement>) -> Rendered<VElement> {
            Rendered::Text(tag.to_uppercase())
        }
    }

    #[test]
    fn defaults_fill_missing_options() {
        let options: TransformOptions<VElement> = PartialOptions::new().normalize();

        assert!(options.transform.is_empty());
        assert!(options.preserve_attributes.is_empty());
        assert!(options.sets_children_dangerously("style"));
        assert_eq!(options.dangerously_set_children.len(), 1);
    }

    #[test]
    fn explicit_dangerous_tags_replace_default() {
        let options: TransformOptions<VElement> = PartialOptions::new()
            .dangerously_set_children(["script-template"])
            .normalize();

        assert!(options.sets_children_dangerously("script-template"));
        assert!(!options.sets_children_dangerously("style"));
    }

    #[test]
    fn overrides_resolve_by_tag() {
        let overrides = Overrides::<VElement>::new()
            .with_tag("a", |_, _, _| Rendered::Text("link".to_string()))
            .with_default(Uppercase);

        let link = overrides.get("a").unwrap();
        assert_eq!(link("a", Props::new(), None), Rendered::Text("link".to_string()));
        assert!(overrides.get("b").is_none());

        let fallback = overrides.default_transform().unwrap();
        assert_eq!(
            fallback.element("b", Props::new(), None),
            Rendered::Text("B".to_string())
        );
        assert_eq!(fallback.text("x".to_string()), Rendered::Text("x".to_string()));
    }

    #[test]
    fn parses_preserve_entries() {
        let name = PreserveAttribute::parse("ng-if").unwrap();
        assert!(name.matches("ng-if"));
        assert!(!name.matches("ng-show"));

        let pattern = PreserveAttribute::parse("/^ng-/").unwrap();
        assert!(pattern.matches("ng-show"));
        assert!(!pattern.matches("data-ng"));

        assert!(matches!(
            PreserveAttribute::parse("/[/"),
            Err(HtmrError::InvalidPattern { .. })
        ));
    }
}
