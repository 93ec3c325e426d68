//! Label to vertex-id mapping.

use std::collections::HashMap;

use spantree_core::Graph;

use crate::{errors::JsonProviderError, schema::InputGraph};

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Maps vertex labels to dense ids in `[0, n)` and back.
#[derive(Clone, Debug)]
pub struct LabelIndex {
    labels: Vec<String>,
    ids: HashMap<String, usize>,
}

impl LabelIndex {
    /// Indexes `labels` by position.
    ///
    /// # Errors
    /// Returns [`JsonProviderError::DuplicateLabel`] when a label repeats.
    ///
    /// # Examples
    /// ```
    /// use spantree_providers_json::LabelIndex;
    ///
    /// let index = LabelIndex::new(&["A".into(), "B".into()])?;
    /// assert_eq!(index.id("B"), Some(1));
    /// assert_eq!(index.label(0), Some("A"));
    /// # Ok::<(), spantree_providers_json::JsonProviderError>(())
    /// ```
    pub fn new(labels: &[String]) -> Result<Self, JsonProviderError> {
        let mut ids = HashMap::with_capacity(labels.len());
        for (id, label) in labels.iter().enumerate() {
            if ids.insert(label.clone(), id).is_some() {
                return Err(JsonProviderError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }
        Ok(Self {
            labels: labels.to_vec(),
            ids,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn id(&self, label: &str) -> Option<usize> {
        self.ids.get(label).copied()
    }

    #[must_use]
    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Builds the core graph for `input`, whose nodes must be the labels this
    /// index was built from.
    ///
    /// # Errors
    /// Returns [`JsonProviderError::UnknownLabel`] for an endpoint outside the
    /// index and [`JsonProviderError::InvalidEdge`] when the core rejects an
    /// edge.
    pub fn to_graph(&self, input: &InputGraph) -> Result<Graph, JsonProviderError> {
        let mut graph = Graph::new(self.len());
        for edge in &input.edges {
            let u = self.resolve(input.id, &edge.from)?;
            let v = self.resolve(input.id, &edge.to)?;
            graph
                .add_edge(u, v, edge.weight)
                .map_err(|source| JsonProviderError::InvalidEdge {
                    graph_id: input.id,
                    source,
                })?;
        }
        Ok(graph)
    }

    fn resolve(&self, graph_id: u64, label: &str) -> Result<usize, JsonProviderError> {
        let unknown = || JsonProviderError::UnknownLabel {
            graph_id,
            label: label.to_owned(),
        };
        self.id(label).ok_or_else(unknown)
    }
}

/// Returns the spreadsheet-style label for `index`: `A..Z`, then `AA`, `AB`.
///
/// # Examples
/// ```
/// use spantree_providers_json::alphabet_label;
///
/// assert_eq!(alphabet_label(0), "A");
/// assert_eq!(alphabet_label(25), "Z");
/// assert_eq!(alphabet_label(26), "AA");
/// assert_eq!(alphabet_label(702), "AAA");
/// ```
#[must_use]
pub fn alphabet_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index + 1;
    while remaining > 0 {
        remaining -= 1;
        letters.push(char::from(ALPHABET[remaining % 26]));
        remaining /= 26;
    }
    letters.iter().rev().collect()
}
