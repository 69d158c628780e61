/// Malformed or unresolvable user input. Message text is shown verbatim to
/// the end user, so it names the offending token and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("input may only contain numeric values")]
    NonNumericContent,

    #[error("input `{token}` is not a valid selection")]
    UnknownNumber { token: String },
}
