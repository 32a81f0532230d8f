use crate::kind::FaultKind;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type name used for methods that return nothing.
pub const UNIT: &str = "unit";

/// The identity of a method: name, parameter types and return type.
///
/// Classification matches signatures exactly, so `fetch(i64) -> string` and
/// `fetch(string) -> string` are different methods.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    name: String,
    params: Vec<String>,
    returns: String,
}

impl MethodSignature {
    /// Starts a signature with no parameters returning [`UNIT`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: UNIT.to_string(),
        }
    }

    /// Appends a parameter type.
    pub fn param(mut self, ty: impl Into<String>) -> Self {
        self.params.push(ty.into());
        self
    }

    /// Sets the return type.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = ty.into();
        self
    }

    /// Declares this method with `kind` as its first permitted fault.
    pub fn throws(self, kind: &'static FaultKind) -> MethodDescriptor {
        MethodDescriptor::new(self).throws(kind)
    }

    /// Declares this method with no permitted faults.
    pub fn declare(self) -> MethodDescriptor {
        MethodDescriptor::new(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn return_type(&self) -> &str {
        &self.returns
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) -> {}", self.name, self.params.join(", "), self.returns)
    }
}

/// A declared method: its signature plus the fault kinds it may raise, in
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescriptor {
    signature: MethodSignature,
    throws: Vec<&'static FaultKind>,
}

impl MethodDescriptor {
    pub fn new(signature: MethodSignature) -> Self {
        Self {
            signature,
            throws: Vec::new(),
        }
    }

    /// Appends a permitted fault kind. Declaration order is kept.
    pub fn throws(mut self, kind: &'static FaultKind) -> Self {
        self.throws.push(kind);
        self
    }

    pub fn signature(&self) -> &MethodSignature {
        &self.signature
    }

    pub fn name(&self) -> &str {
        self.signature.name()
    }

    pub fn declared_faults(&self) -> &[&'static FaultKind] {
        &self.throws
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signature)?;
        if !self.throws.is_empty() {
            let names: Vec<_> = self.throws.iter().map(|k| k.name()).collect();
            write!(f, " throws {}", names.join(", "))?;
        }
        Ok(())
    }
}

/// One invocation attempt on a stand-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub method: MethodSignature,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl Call {
    pub fn new(method: MethodSignature, args: Vec<Value>) -> Self {
        Self { method, args }
    }

    /// A call with no arguments.
    pub fn nullary(method: MethodSignature) -> Self {
        Self::new(method, Vec::new())
    }
}
