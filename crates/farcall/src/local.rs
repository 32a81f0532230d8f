use farcall_core::MethodSignature;

/// The operations every stand-in answers without a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalOp {
    /// `equals(any) -> bool`
    Equals,
    /// `to_string() -> string`
    ToString,
    /// `hash_code() -> i64`
    HashCode,
}

impl LocalOp {
    pub const ALL: [LocalOp; 3] = [LocalOp::Equals, LocalOp::ToString, LocalOp::HashCode];

    pub fn signature(self) -> MethodSignature {
        match self {
            LocalOp::Equals => MethodSignature::new("equals").param("any").returns("bool"),
            LocalOp::ToString => MethodSignature::new("to_string").returns("string"),
            LocalOp::HashCode => MethodSignature::new("hash_code").returns("i64"),
        }
    }

    /// Resolves `signature` against the local surface by exact match.
    pub fn resolve(signature: &MethodSignature) -> Option<LocalOp> {
        let op = match (signature.name(), signature.params()) {
            ("equals", [param]) if param == "any" => LocalOp::Equals,
            ("to_string", []) => LocalOp::ToString,
            ("hash_code", []) => LocalOp::HashCode,
            _ => return None,
        };
        (op.signature().return_type() == signature.return_type()).then_some(op)
    }
}
