//! A translator that renders query documents as a readable, SQL-like outline.
//! It exists for inspection only; nothing executes the output.

use query_builder::Translator;
use query_model::{And, Equal, In, Or, QueryDocument};
use std::convert::Infallible;

#[derive(Debug, Default)]
pub struct OutlineTranslator {
    rendered: Option<String>,
}

impl OutlineTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The outline produced by the last successful build.
    pub fn rendered(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    fn group(children: Vec<String>, joiner: &str) -> String {
        match children.len() {
            1 => children.concat(),
            _ => format!("({})", children.join(joiner)),
        }
    }
}

impl Translator for OutlineTranslator {
    type Fragment = String;
    type Error = Infallible;

    fn visit_equal(&mut self, node: &Equal) -> Result<String, Infallible> {
        Ok(format!("{} = {}", node.key(), node.value()))
    }

    fn visit_in(&mut self, node: &In) -> Result<String, Infallible> {
        let values: Vec<String> = node.values().iter().map(ToString::to_string).collect();
        Ok(format!("{} IN [{}]", node.key(), values.join(", ")))
    }

    fn visit_and(&mut self, _node: &And, children: Vec<String>) -> Result<String, Infallible> {
        Ok(Self::group(children, " AND "))
    }

    fn visit_or(&mut self, _node: &Or, children: Vec<String>) -> Result<String, Infallible> {
        Ok(Self::group(children, " OR "))
    }

    fn finalize(&mut self, fragment: String, doc: &QueryDocument) -> Result<(), Infallible> {
        let mut parts = Vec::new();

        if !fragment.is_empty() {
            parts.push(format!("WHERE {fragment}"));
        }
        if !doc.sort.is_empty() {
            let keys: Vec<String> = doc
                .sort
                .iter()
                .map(|s| format!("{} {}", s.key, s.order))
                .collect();
            parts.push(format!("ORDER BY {}", keys.join(", ")));
        }
        if doc.page.limit > 0 {
            parts.push(format!("LIMIT {}", doc.page.limit));
        }
        if let Some(token) = &doc.page.token {
            parts.push(format!("AFTER {token:?}"));
        }

        self.rendered = Some(if parts.is_empty() {
            "ALL".to_string()
        } else {
            parts.join(" ")
        });
        Ok(())
    }
}
