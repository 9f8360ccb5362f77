use bitflags::bitflags;

bitflags! {
    /// Grammar relaxations and root-element acceptance, all off by default.
    ///
    /// A fresh [`ParsePolicy::empty()`] accepts only RFC 8259 at the root
    /// (no root element at all, in fact, until at least one
    /// `ALLOW_*_ROOT_ELEMENT` bit is set) with no JSON5 relaxations. Use one
    /// of the named presets instead of building a policy bit-by-bit unless
    /// you have a specific reason not to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ParsePolicy: u32 {
        const ALLOW_OBJECT_ROOT_ELEMENT    = 1 << 0;
        const ALLOW_ARRAY_ROOT_ELEMENT     = 1 << 1;
        const ALLOW_NUMBER_ROOT_ELEMENT    = 1 << 2;
        const ALLOW_STRING_ROOT_ELEMENT    = 1 << 3;
        const ALLOW_BOOLEAN_ROOT_ELEMENT   = 1 << 4;
        const ALLOW_NULL_ROOT_ELEMENT      = 1 << 5;
        const ALLOW_SINGLE_QUOTE_MARK      = 1 << 6;
        const ALLOW_ANY_CHAR_ESCAPED       = 1 << 7;
        const ALLOW_POSITIVE_SIGNED_NUMBER = 1 << 8;
    }
}

impl ParsePolicy {
    const ALL_ROOT_ELEMENTS: ParsePolicy = ParsePolicy::ALLOW_OBJECT_ROOT_ELEMENT
        .union(ParsePolicy::ALLOW_ARRAY_ROOT_ELEMENT)
        .union(ParsePolicy::ALLOW_NUMBER_ROOT_ELEMENT)
        .union(ParsePolicy::ALLOW_STRING_ROOT_ELEMENT)
        .union(ParsePolicy::ALLOW_BOOLEAN_ROOT_ELEMENT)
        .union(ParsePolicy::ALLOW_NULL_ROOT_ELEMENT);

    /// `object / array` roots only, as required by RFC 4627.
    pub const RFC4627: ParsePolicy = ParsePolicy::ALLOW_OBJECT_ROOT_ELEMENT
        .union(ParsePolicy::ALLOW_ARRAY_ROOT_ELEMENT);

    /// Any of the six JSON value kinds is legal at the root, per RFC 7159/8259.
    pub const RFC7159: ParsePolicy = ParsePolicy::ALL_ROOT_ELEMENTS;

    /// RFC 7159 roots plus JSON5 single-quoted strings.
    pub const JSON5: ParsePolicy =
        ParsePolicy::ALL_ROOT_ELEMENTS.union(ParsePolicy::ALLOW_SINGLE_QUOTE_MARK);

    /// Alias for [`ParsePolicy::RFC7159`].
    pub const STRICT: ParsePolicy = ParsePolicy::RFC7159;

    /// JSON5 plus a leading `+` on numbers and `\X` escapes of unknown `X`.
    pub const RELAXED: ParsePolicy = ParsePolicy::JSON5
        .union(ParsePolicy::ALLOW_POSITIVE_SIGNED_NUMBER)
        .union(ParsePolicy::ALLOW_ANY_CHAR_ESCAPED);
}

impl Default for ParsePolicy {
    fn default() -> Self {
        ParsePolicy::RELAXED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc4627_allows_only_object_and_array_roots() {
        assert!(ParsePolicy::RFC4627.contains(ParsePolicy::ALLOW_OBJECT_ROOT_ELEMENT));
        assert!(ParsePolicy::RFC4627.contains(ParsePolicy::ALLOW_ARRAY_ROOT_ELEMENT));
        assert!(!ParsePolicy::RFC4627.contains(ParsePolicy::ALLOW_NUMBER_ROOT_ELEMENT));
        assert!(!ParsePolicy::RFC4627.contains(ParsePolicy::ALLOW_SINGLE_QUOTE_MARK));
    }

    #[test]
    fn rfc7159_and_strict_are_the_same_bits() {
        assert_eq!(ParsePolicy::RFC7159, ParsePolicy::STRICT);
        assert!(ParsePolicy::RFC7159.contains(ParsePolicy::ALLOW_NULL_ROOT_ELEMENT));
        assert!(!ParsePolicy::RFC7159.contains(ParsePolicy::ALLOW_SINGLE_QUOTE_MARK));
    }

    #[test]
    fn json5_adds_single_quote_to_rfc7159() {
        assert!(ParsePolicy::JSON5.contains(ParsePolicy::RFC7159));
        assert!(ParsePolicy::JSON5.contains(ParsePolicy::ALLOW_SINGLE_QUOTE_MARK));
        assert!(!ParsePolicy::JSON5.contains(ParsePolicy::ALLOW_POSITIVE_SIGNED_NUMBER));
    }

    #[test]
    fn relaxed_is_the_default_and_is_the_most_permissive_preset() {
        assert_eq!(ParsePolicy::default(), ParsePolicy::RELAXED);
        assert!(ParsePolicy::RELAXED.contains(ParsePolicy::JSON5));
        assert!(ParsePolicy::RELAXED.contains(ParsePolicy::ALLOW_POSITIVE_SIGNED_NUMBER));
        assert!(ParsePolicy::RELAXED.contains(ParsePolicy::ALLOW_ANY_CHAR_ESCAPED));
    }
}
