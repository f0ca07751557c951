//! Wrapper markup applied to registered widget areas.

/// Markup the host wraps around every widget area it renders.
///
/// The `%1$s` and `%2$s` placeholders are substituted by the host with the
/// widget id and its generated class list. Every area is registered with
/// [`AreaTemplate::STANDARD`]; themes that restyle containers do so in CSS,
/// not by swapping the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaTemplate {
    /// Opening markup emitted before each widget.
    pub before_widget: &'static str,
    /// Closing markup emitted after each widget.
    pub after_widget: &'static str,
    /// Opening markup emitted before the widget title.
    pub before_title: &'static str,
    /// Closing markup emitted after the widget title.
    pub after_title: &'static str,
}

impl AreaTemplate {
    /// The one template every area registration carries.
    pub const STANDARD: AreaTemplate = AreaTemplate {
        before_widget: r#"<div id="%1$s" class="col-md widget-container align-self-center %2$s">"#,
        after_widget: "</div>",
        before_title: r#"<h3 class="widget-title">"#,
        after_title: "</h3>",
    };
}

impl Default for AreaTemplate {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_markup_is_fixed() {
        let t = AreaTemplate::STANDARD;
        assert_eq!(
            t.before_widget,
            r#"<div id="%1$s" class="col-md widget-container align-self-center %2$s">"#
        );
        assert_eq!(t.after_widget, "</div>");
        assert_eq!(t.before_title, r#"<h3 class="widget-title">"#);
        assert_eq!(t.after_title, "</h3>");
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(AreaTemplate::default(), AreaTemplate::STANDARD);
    }
}
