#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUp {
    pub activity_name: String,
    /// Taken verbatim, no format check.
    pub email: String,
}
