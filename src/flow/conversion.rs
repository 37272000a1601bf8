use super::model::Flow;
use crate::error::FlowConversionError;

/// A trait for custom data models that can be converted into a Branchly `Flow`.
///
/// Implement it on your own structs when flows are authored in another format
/// (a CMS export, a spreadsheet, a different JSON shape). The layout and navigation
/// engines only ever see the canonical `Flow`.
///
/// # Example
///
/// ```rust,no_run
/// use branchly::error::FlowConversionError;
/// use branchly::flow::{Flow, FlowBuilder, IntoFlow};
///
/// // A questionnaire where every question simply leads to the next one.
/// struct Questionnaire { questions: Vec<String> }
///
/// impl IntoFlow for Questionnaire {
///     fn into_flow(self) -> Result<Flow, FlowConversionError> {
///         if self.questions.is_empty() {
///             return Err(FlowConversionError::ValidationError("no questions".to_string()));
///         }
///         let count = self.questions.len();
///         let mut builder = FlowBuilder::new("questionnaire", "Questionnaire");
///         for (i, question) in self.questions.into_iter().enumerate() {
///             let id = format!("q{}", i);
///             let next = (i + 1 < count).then(|| format!("q{}", i + 1));
///             builder = builder.decision(&id, &question, |node| match next {
///                 Some(next) => node.option("Next", &next),
///                 None => node,
///             });
///         }
///         Ok(builder.start("q0").build())
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a Branchly flow.
    fn into_flow(self) -> Result<Flow, FlowConversionError>;
}

impl IntoFlow for Flow {
    fn into_flow(self) -> Result<Flow, FlowConversionError> {
        Ok(self)
    }
}
