//! Defines the `Translator` trait implemented by each storage backend.

use query_model::{And, Equal, In, Or, QueryDocument};

/// Turns filter-tree nodes into fragments of a backend's native query
/// language and assembles the final query.
///
/// The builder visits nodes in post-order: by the time `visit_and` or
/// `visit_or` is called, every child has already been translated and the
/// fragments are passed in child order. How they are joined (`AND`, `&&`,
/// a `$and` array, parentheses for precedence) is entirely up to the
/// implementation.
///
/// - A SQL backend might use `String` fragments such as `"age" = $1`.
/// - A document store might use `serde_json::Value` fragments such as
///   `{"age": {"$eq": 1}}`.
pub trait Translator {
    /// A piece of native query. `Default` is the fragment for "no filter".
    type Fragment: Default;

    type Error: std::error::Error + 'static;

    fn visit_equal(&mut self, node: &Equal) -> Result<Self::Fragment, Self::Error>;

    fn visit_in(&mut self, node: &In) -> Result<Self::Fragment, Self::Error>;

    fn visit_and(
        &mut self,
        node: &And,
        children: Vec<Self::Fragment>,
    ) -> Result<Self::Fragment, Self::Error>;

    fn visit_or(
        &mut self,
        node: &Or,
        children: Vec<Self::Fragment>,
    ) -> Result<Self::Fragment, Self::Error>;

    /// Receives the translated filter and the whole document, so sorting and
    /// pagination can be folded into the native query.
    fn finalize(&mut self, fragment: Self::Fragment, doc: &QueryDocument)
    -> Result<(), Self::Error>;
}
