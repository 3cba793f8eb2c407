//! String transformation utilities for code generation
//!
//! These utilities turn type expressions into fragments that can be embedded
//! in generated identifiers.

/// Prefix marking a slice type expression.
const SLICE_PREFIX: &str = "[]";

/// Suffix appended for every stripped slice prefix.
const SLICE_SUFFIX: &str = "Slice";

/// Creates a capitalized identifier fragment from a type expression.
///
/// A leading `[]` is rewritten as a `Slice` suffix (recursively, so nested
/// slices stack up), qualifier dots and stray brackets become underscores,
/// and the result is title-cased.
///
/// # Examples
/// ```
/// use specialize::generation::utils::derive_name;
///
/// assert_eq!(derive_name("int"), "Int");
/// assert_eq!(derive_name("[]byte"), "ByteSlice");
/// assert_eq!(derive_name("[][]int"), "IntSliceSlice");
/// assert_eq!(derive_name("foo.Baz"), "Foo_Baz");
/// ```
pub fn derive_name(type_expr: &str) -> String {
    if let Some(elem) = type_expr.strip_prefix(SLICE_PREFIX) {
        return derive_name(&format!("{elem}{SLICE_SUFFIX}"));
    }

    let replaced: String = type_expr
        .chars()
        .map(|ch| match ch {
            '.' | '[' | ']' => '_',
            other => other,
        })
        .collect();
    to_title_case(&replaced)
}

/// Upper-cases the first letter of every word.
///
/// Letters and digits continue a word; `_`, whitespace and other ASCII
/// punctuation start a new one. Characters that are not word starts keep
/// their case, so `"a_b_c"` becomes `"A_B_C"` and `"Int"` is unchanged.
///
/// # Examples
/// ```
/// use specialize::generation::utils::to_title_case;
///
/// assert_eq!(to_title_case("chan int"), "Chan Int");
/// assert_eq!(to_title_case("*node"), "*Node");
/// assert_eq!(to_title_case("map_string_int"), "Map_String_Int");
/// ```
pub fn to_title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev = ' ';

    for ch in s.chars() {
        if is_word_separator(prev) {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        prev = ch;
    }

    result
}

fn is_word_separator(ch: char) -> bool {
    if ch.is_ascii() {
        return !ch.is_ascii_alphanumeric();
    }
    if ch.is_alphanumeric() {
        return false;
    }
    ch.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_name_primitives() {
        assert_eq!(derive_name("int"), "Int");
        assert_eq!(derive_name("uint64"), "Uint64");
        assert_eq!(derive_name("float32"), "Float32");
    }

    #[test]
    fn test_derive_name_already_capitalized() {
        assert_eq!(derive_name("Int"), "Int");
        assert_eq!(derive_name("MyType"), "MyType");
    }

    #[test]
    fn test_derive_name_slices() {
        assert_eq!(derive_name("[]byte"), "ByteSlice");
        assert_eq!(derive_name("[][]int"), "IntSliceSlice");
        assert_eq!(derive_name("[]foo.Bar"), "Foo_BarSlice");
    }

    #[test]
    fn test_derive_name_qualified() {
        assert_eq!(derive_name("foo.Baz"), "Foo_Baz");
        assert_eq!(derive_name("a.b.c"), "A_B_C");
    }

    #[test]
    fn test_derive_name_every_qualifier_capitalized() {
        assert_eq!(derive_name("a.b.c"), "A_B_C");
        assert_eq!(derive_name("pkg.sub.type"), "Pkg_Sub_Type");
        assert_eq!(derive_name("foo_bar"), "Foo_Bar");
    }

    #[test]
    fn test_derive_name_residual_brackets() {
        // Only a leading slice prefix becomes "Slice"; other brackets are replaced
        assert_eq!(derive_name("map[string]int"), "Map_String_Int");
        assert_eq!(derive_name("[4]int"), "_4_Int");
    }

    #[test]
    fn test_derive_name_has_no_illegal_characters() {
        for ty in ["[]pkg.T", "x[y]", "a.b[c].d", "[][]z.Q"] {
            let name = derive_name(ty);
            assert!(!name.is_empty());
            assert!(!name.contains(['.', '[', ']']), "{ty} produced {name}");
        }
    }

    #[test]
    fn test_to_title_case_word_boundaries() {
        assert_eq!(to_title_case(""), "");
        assert_eq!(to_title_case("chan int"), "Chan Int");
        assert_eq!(to_title_case("*node"), "*Node");
        assert_eq!(to_title_case("foo_baz"), "Foo_Baz");
        assert_eq!(to_title_case("x1y"), "X1y");
        assert_eq!(to_title_case("élan vital"), "Élan Vital");
    }
}
