//! Walks a filter tree and drives a [`Translator`] over it.

use crate::{error::BuildError, translator::Translator};
use query_model::{FilterNode, NodePath, PathSegment, QueryDocument};
use tracing::{debug, trace};

/// Translates `doc` with `translator` in one call.
pub fn build_query<T: Translator>(
    translator: &mut T,
    doc: &QueryDocument,
) -> Result<(), BuildError<T::Error>> {
    QueryBuilder::new(translator).build(doc)
}

/// Drives a translator over query documents.
///
/// The builder holds nothing but the borrowed translator, so it can be reused
/// for any number of documents in sequence.
pub struct QueryBuilder<'a, T: Translator> {
    translator: &'a mut T,
}

impl<'a, T: Translator> QueryBuilder<'a, T> {
    pub fn new(translator: &'a mut T) -> Self {
        Self { translator }
    }

    /// Translates the filter tree, then hands the resulting fragment and the
    /// document to [`Translator::finalize`]. The first error aborts the build
    /// and `finalize` is not called.
    pub fn build(&mut self, doc: &QueryDocument) -> Result<(), BuildError<T::Error>> {
        let fragment = self.build_filter(doc.filter.as_ref())?;

        debug!(
            translator = std::any::type_name::<T>(),
            sort_keys = doc.sort.len(),
            limit = doc.page.limit,
            "Finalizing native query"
        );
        self.translator
            .finalize(fragment, doc)
            .map_err(BuildError::Finalize)
    }

    /// Translates a filter tree on its own. An absent tree yields the
    /// default (empty) fragment without calling the translator.
    pub fn build_filter(
        &mut self,
        filter: Option<&FilterNode>,
    ) -> Result<T::Fragment, BuildError<T::Error>> {
        let Some(node) = filter else {
            trace!("No filter to translate");
            return Ok(T::Fragment::default());
        };

        let mut path = NodePath::root();
        self.visit(node, &mut path)
    }

    fn visit(
        &mut self,
        node: &FilterNode,
        path: &mut NodePath,
    ) -> Result<T::Fragment, BuildError<T::Error>> {
        let operator = node.kind();
        path.push(PathSegment::Operator(operator));
        trace!(%path, "Visiting filter node");

        let result = match node {
            FilterNode::Equal(eq) => self.translator.visit_equal(eq),
            FilterNode::In(node) => self.translator.visit_in(node),
            FilterNode::And(and) => {
                let children = self.visit_children(and.children(), path)?;
                self.translator.visit_and(and, children)
            }
            FilterNode::Or(or) => {
                let children = self.visit_children(or.children(), path)?;
                self.translator.visit_or(or, children)
            }
        };

        let fragment = result.map_err(|source| {
            debug!(%path, "Translator rejected filter node: {}", source);
            BuildError::Translation {
                operator,
                path: path.clone(),
                source,
            }
        })?;

        path.pop();
        Ok(fragment)
    }

    fn visit_children(
        &mut self,
        children: &[FilterNode],
        path: &mut NodePath,
    ) -> Result<Vec<T::Fragment>, BuildError<T::Error>> {
        let mut fragments = Vec::with_capacity(children.len());
        for (i, child) in children.iter().enumerate() {
            path.push(PathSegment::Index(i));
            fragments.push(self.visit(child, path)?);
            path.pop();
        }
        Ok(fragments)
    }
}
