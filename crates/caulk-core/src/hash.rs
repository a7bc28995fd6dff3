use xxhash_rust::xxh64::xxh64;

use crate::types::{ClassDeclaration, MemberDeclaration, MemberKind};

const BASE62_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encode a u64 value as a base62 string (11 chars, zero-padded).
fn base62_encode(mut value: u64) -> String {
    let mut buf = [b'0'; 11];
    let mut i = buf.len();
    while value > 0 && i > 0 {
        i -= 1;
        buf[i] = BASE62_CHARS[(value % 62) as usize];
        value /= 62;
    }
    String::from_utf8(buf.to_vec()).expect("base62 chars are valid UTF-8")
}

/// Canonical signature text for a member declaration.
///
/// Formats as `name(T1,T2) -> R` for methods, `name: R` for properties,
/// and `name(T1,T2)` for events. Parameter names are excluded: the
/// checker compares shapes, and renaming a parameter is not a shape
/// change.
pub fn member_signature(member: &MemberDeclaration) -> String {
    let params = member
        .parameters
        .iter()
        .map(|p| p.type_name.as_str())
        .collect::<Vec<_>>()
        .join(",");
    match member.kind {
        MemberKind::Property => format!("{}: {}", member.name, member.return_type),
        MemberKind::Event => format!("{}({})", member.name, params),
        MemberKind::Method if member.return_type.is_empty() => {
            format!("{}({})", member.name, params)
        }
        MemberKind::Method => format!("{}({}) -> {}", member.name, params, member.return_type),
    }
}

/// Compute the content hash for a class declaration.
///
/// hash = base62(xxhash64(name + base types + attributes + member signatures))
///
/// Stable across runs and across parameter renames; changes whenever the
/// class's conformance-relevant shape changes. Diagnostics carry this
/// value so hosts can detect that a diagnostic is stale.
pub fn class_hash(class: &ClassDeclaration) -> String {
    let mut input = String::with_capacity(64 + class.members.len() * 32);
    input.push_str(&class.name);
    for base in &class.base_types {
        input.push('\0');
        input.push_str(base);
    }
    for attr in &class.attributes {
        input.push('\0');
        input.push_str(&attr.name);
        input.push('(');
        input.push_str(&attr.argument);
        input.push(')');
    }
    for member in &class.members {
        input.push('\0');
        input.push_str(&member_signature(member));
        for attr in &member.attributes {
            input.push('|');
            input.push_str(&attr.name);
        }
    }
    base62_encode(xxh64(input.as_bytes(), 0))
}
