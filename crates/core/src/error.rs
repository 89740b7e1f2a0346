use thiserror::Error;

/// Errors surfaced by the fallible typed conversion helpers.
///
/// Plain lookups and conversions report absence with `None`; this enum exists
/// for callers that want to distinguish "the text did not parse" from "the
/// resolved converter produced a value of the wrong type" (a converter bug
/// that should not be silently swallowed).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
	/// The converter declined the text or failed to parse it.
	#[error("cannot parse text as {type_name}")]
	Unparsable {
		/// Name of the requested target type.
		type_name: &'static str,
	},
	/// The converter produced a value that is not the requested type.
	#[error("converter produced a value that is not {expected}")]
	TypeMismatch {
		/// Name of the requested target type.
		expected: &'static str,
	},
}
