use masthead_nodes::{style, Document, Node};

/// Global CSS that is installed into the document head once, before mounting.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stylesheet {
    name: &'static str,
    css: &'static str,
}

impl Stylesheet {
    pub const fn new(name: &'static str, css: &'static str) -> Self {
        Self { name, css }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Appends a `<style>` element to the document head. Does nothing without a head.
    pub fn install<D: Document>(&self, document: &D) -> Option<D::Node> {
        let Some(head) = document.head() else {
            log::debug!("no document head, skipping stylesheet `{}`", self.name);
            return None;
        };

        let css = <D::Node as Node>::raw();
        css.set_text(self.css);

        let node: D::Node = style! {
            "data-stylesheet" => self.name;
            css;
        };
        head.insert(&node, None);

        log::debug!("installed stylesheet `{}`", self.name);
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use masthead_nodes::{Document, Node};
    use masthead_render::RenderDocument;

    use super::Stylesheet;

    const INDEX: Stylesheet = Stylesheet::new("index", "body { margin: 0 }");
    const HEADER: Stylesheet = Stylesheet::new("header", ".heading > span { color: red }");

    #[test]
    fn installs_in_order() {
        let document = RenderDocument::new();

        INDEX.install(&document).unwrap();
        HEADER.install(&document).unwrap();

        let head = document.head().unwrap();
        let names = head
            .children()
            .iter()
            .map(|node| node.attr("data-stylesheet").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(names, ["index", "header"]);
        assert_eq!(
            head.to_string(),
            "<head>\
             <style data-stylesheet=\"index\">body { margin: 0 }</style>\
             <style data-stylesheet=\"header\">.heading > span { color: red }</style>\
             </head>"
        );
    }
}

#[cfg(all(test, target_family = "wasm"))]
mod browser_tests {
    use masthead_web::WebDocument;
    use wasm_bindgen_test::*;

    use super::Stylesheet;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn installs_into_page_head() {
        let document = WebDocument::current().unwrap();
        let sheet = Stylesheet::new("browser", ".a > .b { color: red }");

        sheet.install(&document).unwrap();

        let head = document.native().head().unwrap();
        let style = head.last_element_child().unwrap();
        assert_eq!(style.local_name(), "style");
        assert_eq!(style.get_attribute("data-stylesheet").as_deref(), Some("browser"));
        assert_eq!(style.text_content().as_deref(), Some(".a > .b { color: red }"));

        style.remove();
    }
}
