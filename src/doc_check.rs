//! Documentation-length checking.
//!
//! A [`DocCheck`] owns a minimum-length threshold fixed at construction time
//! and classifies functions by whether their attached documentation text
//! strictly exceeds it. Rust functions carry no runtime documentation
//! attribute, so the checker operates on explicit [`FnMeta`] metadata
//! supplied by the caller.

/// Default minimum documentation length, in characters.
pub const DEFAULT_MIN_LENGTH: usize = 50;

/// Metadata for a function under inspection: its name and optional doc text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnMeta {
    /// Function name, used verbatim in the verdict message
    pub name: String,
    /// Attached documentation text, if any
    pub doc: Option<String>,
}

impl FnMeta {
    /// Create metadata for an undocumented function.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    /// Attach documentation text.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Documentation-length checker with an enclosed threshold.
///
/// The threshold is immutable after construction; classification is a pure
/// string computation with no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocCheck {
    min_length: usize,
}

impl DocCheck {
    /// Create a checker with the default 50-character threshold.
    pub fn new() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    /// Create a checker with a custom threshold.
    pub fn with_threshold(min_length: usize) -> Self {
        Self { min_length }
    }

    /// The enclosed threshold.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Whether the function's documentation strictly exceeds the threshold.
    ///
    /// Missing documentation classifies the same as documentation at or
    /// under the threshold.
    pub fn is_long_enough(&self, func: &FnMeta) -> bool {
        func.doc
            .as_deref()
            .map(|doc| doc.chars().count() > self.min_length)
            .unwrap_or(false)
    }

    /// Produce the human-readable verdict for `func`.
    pub fn report(&self, func: &FnMeta) -> String {
        if self.is_long_enough(func) {
            format!(
                "The function '{}' has a docstring longer than {} characters.",
                func.name, self.min_length
            )
        } else {
            format!(
                "The function '{}' does not have a docstring longer than {} characters.",
                func.name, self.min_length
            )
        }
    }

    /// Bind the checker to one function, yielding a zero-argument closure
    /// that produces the verdict on demand.
    pub fn wrap(&self, func: FnMeta) -> impl Fn() -> String {
        let check = *self;
        move || check.report(&func)
    }
}

impl Default for DocCheck {
    fn default() -> Self {
        Self::new()
    }
}

/// Closure form of the checker: the threshold lives as captured state
/// rather than a struct field.
pub fn docstring_checker() -> impl Fn(&FnMeta) -> String {
    let check = DocCheck::new();
    move |func| check.report(func)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documented(len: usize) -> FnMeta {
        FnMeta::new("sample").with_doc("x".repeat(len))
    }

    #[test]
    fn test_long_doc_reports_positive() {
        let check = DocCheck::new();
        assert_eq!(
            check.report(&documented(51)),
            "The function 'sample' has a docstring longer than 50 characters."
        );
    }

    #[test]
    fn test_doc_at_threshold_reports_negative() {
        // Strictly exceeds: exactly 50 characters is not enough
        let check = DocCheck::new();
        assert_eq!(
            check.report(&documented(50)),
            "The function 'sample' does not have a docstring longer than 50 characters."
        );
    }

    #[test]
    fn test_missing_doc_reports_negative() {
        let check = DocCheck::new();
        let func = FnMeta::new("bare");
        assert_eq!(
            check.report(&func),
            "The function 'bare' does not have a docstring longer than 50 characters."
        );
    }

    #[test]
    fn test_missing_and_short_docs_classify_identically() {
        let check = DocCheck::new();
        let missing = FnMeta::new("f");
        let short = FnMeta::new("f").with_doc("short");
        assert_eq!(check.report(&missing), check.report(&short));
    }

    #[test]
    fn test_custom_threshold() {
        let check = DocCheck::with_threshold(5);
        assert!(check.is_long_enough(&FnMeta::new("f").with_doc("six ch")));
        assert!(!check.is_long_enough(&FnMeta::new("f").with_doc("five!")));
        assert_eq!(
            check.report(&FnMeta::new("f").with_doc("five!")),
            "The function 'f' does not have a docstring longer than 5 characters."
        );
    }

    #[test]
    fn test_threshold_counts_characters_not_bytes() {
        let check = DocCheck::with_threshold(3);
        // Four multi-byte characters exceed a threshold of three
        let func = FnMeta::new("f").with_doc("αβγδ");
        assert!(check.is_long_enough(&func));
    }

    #[test]
    fn test_wrap_defers_the_verdict() {
        let check = DocCheck::new();
        let verdict = check.wrap(documented(60));
        assert_eq!(
            verdict(),
            "The function 'sample' has a docstring longer than 50 characters."
        );
        // The wrapper is reusable and stable
        assert_eq!(verdict(), verdict());
    }

    #[test]
    fn test_docstring_checker_closure_form() {
        let checker = docstring_checker();
        assert_eq!(
            checker(&documented(100)),
            "The function 'sample' has a docstring longer than 50 characters."
        );
        assert_eq!(
            checker(&FnMeta::new("sample")),
            "The function 'sample' does not have a docstring longer than 50 characters."
        );
    }
}
