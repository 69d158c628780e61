/// How a selection's options are ordered for display.
///
/// A closed union dispatched through one pure function in the engine's
/// sorter. `Metadata` carries the metadata key to order by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SortMethod {
    /// Ascending by stored number. The default.
    #[default]
    Number,
    /// Uniform random permutation.
    Random,
    /// Ascending by display content, byte-lexicographic, case-sensitive.
    Alphabetical,
    /// Ascending by the value under the given metadata key.
    Metadata(String),
}

impl SortMethod {
    /// Map the wire representation (method string + optional sort key) onto
    /// the union. Unknown or empty methods fall back to `Number`.
    pub fn from_wire(method: &str, sort_key: &str) -> Self {
        match method {
            "number" => SortMethod::Number,
            "random" => SortMethod::Random,
            "alphabetical" => SortMethod::Alphabetical,
            "metadata" => SortMethod::Metadata(sort_key.to_string()),
            _ => SortMethod::Number,
        }
    }
}
