use thiserror::Error;

/// Stable error taxonomy for both the recognizer and the value model.
///
/// Every variant here is one of the outcomes a grammar rule or a `Value`
/// operation can raise; callers are expected to match on the variant rather
/// than the message text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("a top-level element of this kind is forbidden by the active parse policy")]
    ForbiddenRootElement,

    #[error("string closed by end of input before its opening quote was matched")]
    UnbalancedQuote,

    #[error("unrecognized escape sequence in string")]
    BadEscapedChar,

    #[error("\\u escape was not followed by exactly four hex digits")]
    BadEncodedChar,

    #[error("array body ended without a closing ']'")]
    UnbalancedArrayBracket,

    #[error("object body ended without a closing '}}'")]
    UnbalancedObjectBracket,

    #[error("object member name was empty or not a string")]
    BadMemberName,

    #[error("no grammar alternative matched where a value was required")]
    BadJsonSequence,

    #[error("operation is not defined for the value's current kind")]
    IncompatibleType,

    #[error("get::<T>() coercion is not defined for the value's current kind")]
    TypeCast,

    #[error("invalid argument")]
    InvalidArgument,
}

pub type Result<T> = std::result::Result<T, Error>;
