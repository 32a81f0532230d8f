use crate::signature::{MethodDescriptor, MethodSignature};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while building an [`InterfaceDescriptor`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DescriptorError {
    /// The token describes a concrete type, not a contract.
    #[error("'{0}' is not an interface type")]
    NotAnInterface(String),

    /// The token has an empty name.
    #[error("Type token has an empty name")]
    UnnamedType,

    /// Two declarations of one signature disagree on their faults.
    #[error("Interface '{interface}' declares {method} more than once with different faults")]
    DuplicateMethod {
        interface: String,
        method: MethodSignature,
    },
}

/// Whether a token names a contract or a concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Interface,
    Concrete,
}

/// A type as seen by the stub generator: a name, a kind, the methods it
/// declares itself and the interfaces it extends.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeToken {
    name: String,
    kind: TypeKind,
    methods: Vec<MethodDescriptor>,
    supertypes: Vec<TypeToken>,
}

impl TypeToken {
    pub fn interface(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Interface)
    }

    pub fn concrete(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Concrete)
    }

    fn with_kind(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            methods: Vec::new(),
            supertypes: Vec::new(),
        }
    }

    /// Declares a method on this type.
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Adds a super-interface whose methods this type inherits.
    pub fn extends(mut self, parent: TypeToken) -> Self {
        self.supertypes.push(parent);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn declared_methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    pub fn supertypes(&self) -> &[TypeToken] {
        &self.supertypes
    }
}

/// The fixed method set of one remote interface.
///
/// Built once by [`InterfaceDescriptor::introspect`] and never mutated.
/// Includes inherited methods; a redeclaration in a sub-interface overrides
/// the inherited one.
#[derive(Debug, Clone)]
pub struct InterfaceDescriptor {
    name: String,
    methods: Vec<MethodDescriptor>,
    index: HashMap<MethodSignature, usize>,
}

impl InterfaceDescriptor {
    pub fn introspect(token: &TypeToken) -> Result<Self, DescriptorError> {
        if token.name.is_empty() {
            return Err(DescriptorError::UnnamedType);
        }
        if !token.is_interface() {
            return Err(DescriptorError::NotAnInterface(token.name.clone()));
        }

        let mut descriptor = Self {
            name: token.name.clone(),
            methods: Vec::with_capacity(token.methods.len()),
            index: HashMap::with_capacity(token.methods.len()),
        };

        for method in &token.methods {
            descriptor.insert(method.clone())?;
        }
        let own = descriptor.methods.len();

        for parent in &token.supertypes {
            let inherited = Self::introspect(parent)?;
            for method in inherited.methods {
                let overridden = matches!(
                    descriptor.index.get(method.signature()),
                    Some(&slot) if slot < own
                );
                if !overridden {
                    descriptor.insert(method)?;
                }
            }
        }

        Ok(descriptor)
    }

    /// Adds `method`, merging an identical earlier declaration.
    fn insert(&mut self, method: MethodDescriptor) -> Result<(), DescriptorError> {
        if let Some(&slot) = self.index.get(method.signature()) {
            if self.methods[slot] == method {
                return Ok(());
            }
            return Err(DescriptorError::DuplicateMethod {
                interface: self.name.clone(),
                method: method.signature().clone(),
            });
        }
        self.index.insert(method.signature().clone(), self.methods.len());
        self.methods.push(method);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared methods, own declarations first, in declaration order.
    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    pub fn lookup(&self, signature: &MethodSignature) -> Option<&MethodDescriptor> {
        self.index.get(signature).map(|&slot| &self.methods[slot])
    }

    pub fn contains(&self, signature: &MethodSignature) -> bool {
        self.index.contains_key(signature)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
