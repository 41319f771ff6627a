// Utility functions for CoreUI kit components

/// Class-name composition
pub mod class_names {
    /// Ordered list of CSS class names.
    ///
    /// Entries keep insertion order; blank and repeated names are dropped.
    ///
    /// ```
    /// use coreui::kit::utils::class_names::ClassList;
    ///
    /// let classes = ClassList::new()
    ///     .add("input")
    ///     .add_opt(Some("wide"))
    ///     .toggle("error", false)
    ///     .build();
    /// assert_eq!(classes, "input wide");
    /// ```
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct ClassList {
        classes: Vec<String>,
    }

    impl ClassList {
        /// Create an empty class list
        pub fn new() -> Self {
            Self::default()
        }

        /// Append one or more whitespace-separated class names
        pub fn add(mut self, classes: &str) -> Self {
            for class in classes.split_whitespace() {
                if !self.classes.iter().any(|existing| existing == class) {
                    self.classes.push(class.to_string());
                }
            }
            self
        }

        /// Append class names when present
        pub fn add_opt<S: AsRef<str>>(self, classes: Option<S>) -> Self {
            match classes {
                Some(classes) => self.add(classes.as_ref()),
                None => self,
            }
        }

        /// Append class names when `enabled`
        pub fn toggle(self, classes: &str, enabled: bool) -> Self {
            if enabled {
                self.add(classes)
            } else {
                self
            }
        }

        /// Whether no class was added
        pub fn is_empty(&self) -> bool {
            self.classes.is_empty()
        }

        /// Join into a `class` attribute value
        pub fn build(&self) -> String {
            self.classes.join(" ")
        }
    }

    impl std::fmt::Display for ClassList {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.build())
        }
    }

}

/// String utilities
pub mod string {
    /// Escape text for use in HTML text content and attribute values
    pub fn escape_html(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                c => out.push(c),
            }
        }
        out
    }

}
