//! Type list parsing and macro expansion

/// A named group of built-in types that expands in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMacro {
    pub name: &'static str,
    pub types: &'static [&'static str],
}

static MACROS: &[TypeMacro] = &[
    TypeMacro {
        name: "integers",
        types: &[
            "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32",
            "uint64",
        ],
    },
    TypeMacro {
        name: "floats",
        types: &["float32", "float64"],
    },
];

/// All registered macros, in declaration order
pub fn macros() -> &'static [TypeMacro] {
    MACROS
}

/// Finds the macro named `name`, ignoring ASCII case
pub fn lookup_macro(name: &str) -> Option<&'static TypeMacro> {
    MACROS.iter().find(|m| m.name.eq_ignore_ascii_case(name))
}

/// Help text listing every macro and what it expands to
pub fn describe_macros() -> String {
    let mut text = String::from("Type macros (case-insensitive):");
    for m in MACROS {
        text.push_str(&format!("\n  {:<10} {}", m.name, m.types.join(", ")));
    }
    text
}

/// Parses, cleans up and expands macros for a comma-separated list.
///
/// Pieces are trimmed and empty pieces dropped. A piece naming a macro is
/// replaced by the macro's types; anything else is kept verbatim. Order is
/// preserved and nothing is deduplicated.
///
/// # Examples
/// ```
/// use specialize::generation::expand::expand;
///
/// assert_eq!(expand(" int , ,float32"), vec!["int", "float32"]);
/// assert_eq!(expand("Floats,[]byte"), vec!["float32", "float64", "[]byte"]);
/// ```
pub fn expand(list: &str) -> Vec<String> {
    let mut ret = Vec::new();
    for piece in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match lookup_macro(piece) {
            Some(m) => ret.extend(m.types.iter().map(|t| t.to_string())),
            None => ret.push(piece.to_string()),
        }
    }
    ret
}
