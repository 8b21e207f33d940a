/// One publication entry extracted from a listing page
///
/// A field is `Some` only when its source block exists in the entry's markup.
/// `Some(String::new())` and `None` are different: the former means the block
/// was there but held nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// External identifier, e.g. `arXiv:2501.01234`
    pub identifier: Option<String>,

    pub title: Option<String>,

    /// Author names joined with `", "`, in document order
    pub authors: Option<String>,

    /// `YYYY-MM-DD`, or the raw date text when it could not be normalized
    pub first_submission: Option<String>,

    /// `YYYY-MM`, or the raw month text when it could not be normalized
    pub first_announcement: Option<String>,

    /// Category labels joined with `", "`, in document order
    pub categories: Option<String>,

    pub abstract_text: Option<String>,
}

impl Record {
    /// Returns true when no field was found at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
