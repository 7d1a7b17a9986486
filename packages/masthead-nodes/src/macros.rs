// Body syntax shared by every node macro:
//
//   name => value;   sets an attribute (`"data-x" => value;` for names that aren't identifiers)
//   "literal";       appends a text node
//   expr;            inserts an existing node

#[doc(hidden)]
#[macro_export]
macro_rules! node_body {
    ($parent:expr;) => {};
    ($parent:expr; $name:literal => $value:expr; $($rest:tt)*) => {
        $crate::Node::set_attr($parent, $name, &::std::string::ToString::to_string(&$value));
        $crate::node_body!($parent; $($rest)*);
    };
    ($parent:expr; $name:ident => $value:expr; $($rest:tt)*) => {
        $crate::Node::set_attr(
            $parent,
            ::std::stringify!($name),
            &::std::string::ToString::to_string(&$value),
        );
        $crate::node_body!($parent; $($rest)*);
    };
    ($parent:expr; $text:literal; $($rest:tt)*) => {
        $crate::append_text($parent, &::std::string::ToString::to_string(&$text));
        $crate::node_body!($parent; $($rest)*);
    };
    ($parent:expr; $child:expr; $($rest:tt)*) => {
        $crate::Node::insert($parent, &$child, None);
        $crate::node_body!($parent; $($rest)*);
    };
}

#[macro_export]
macro_rules! element {
    ($name:expr $(, $($body:tt)*)?) => {{
        let name = ::std::string::ToString::to_string(&$name);
        let element = $crate::Node::element(None, &name);

        $($crate::node_body!(&element; $($body)*);)?
        element
    }};
}

#[macro_export]
macro_rules! fragment {
    ($($body:tt)*) => {{
        let fragment = $crate::Node::fragment();

        $crate::node_body!(&fragment; $($body)*);
        fragment
    }};
}

#[macro_export]
macro_rules! div {
    ($($body:tt)*) => {
        $crate::element!("div", $($body)*)
    };
}

#[macro_export]
macro_rules! style {
    ($($body:tt)*) => {
        $crate::element!("style", $($body)*)
    };
}

#[macro_export]
macro_rules! base {
    ($($body:tt)*) => {
        $crate::element!("base", $($body)*)
    };
}

#[macro_export]
macro_rules! meta {
    ($($body:tt)*) => {
        $crate::element!("meta", $($body)*)
    };
}

#[macro_export]
macro_rules! title {
    ($($body:tt)*) => {
        $crate::element!("title", $($body)*)
    };
}
