/// Calculator errors.
///
/// Defines every failure the pipeline can report, from unrecognised
/// characters in the input to arithmetic results that leave the representable
/// range. Each error carries the offset of the character it is anchored to
/// whenever one is known.
pub mod calc_error;
/// Error presentation.
///
/// Renders an error together with the expression it came from, drawing a `^`
/// marker underneath the offending character.
pub mod report;

pub use calc_error::{CalcError, CalcResult};
pub use report::{Report, mark_error};
