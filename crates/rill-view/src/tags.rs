//! Named tag constructors.
//!
//! Pure boilerplate over [`Ui::build`]: one thin method per HTML tag name,
//! generated by the `tags!` macro. Nothing here carries logic of its own.

use rill_dom::Element;

use crate::builder::Ui;
use crate::error::ViewError;
use crate::props::{Child, Props};

macro_rules! tags {
    ($($tag:ident),* $(,)?) => {
        impl Ui {
            $(
                #[doc = concat!("Build a `<", stringify!($tag), ">` element.")]
                ///
                /// # Errors
                ///
                /// Same conditions as [`Ui::build`].
                pub fn $tag(&self, props: Props, children: Vec<Child>) -> Result<Element, ViewError> {
                    self.build(stringify!($tag), props, children)
                }
            )*
        }
    };
}

tags!(
    a, article, aside, b, blockquote, body, br, button, code, details, div, em,
    fieldset, footer, form, h1, h2, h3, h4, h5, h6, header, hr, i, img, input,
    label, legend, li, main, nav, ol, optgroup, option, p, pre, progress,
    section, select, small, span, strong, summary, table, tbody, td, textarea,
    tfoot, th, thead, tr, ul,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrappers_forward_to_build() {
        let ui = Ui::headless();
        let el = ui.div(Props::new().prop("id", "x"), Vec::new()).unwrap();
        assert_eq!(el.tag(), "div");

        let item = ui.li(Props::new(), Vec::new()).unwrap();
        let list = ui.ul(Props::new(), vec![Child::Node(item)]).unwrap();
        assert_eq!(list.tag(), "ul");
        assert_eq!(list.child_count(), 1);
    }
}
