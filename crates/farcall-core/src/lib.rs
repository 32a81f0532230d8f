mod descriptor;
mod fault;
mod kind;
mod signature;
mod traits;
mod value;

pub use descriptor::{DescriptorError, InterfaceDescriptor, TypeKind, TypeToken};
pub use fault::Fault;
pub use kind::{
    FAULT, FaultKind, ILLEGAL_ARGUMENT, INVOCATION_TARGET, IO_FAULT, Lineage, REMOTE_FAULT,
    UNCHECKED_FAULT, UNSUPPORTED_OPERATION,
};
pub use signature::{Call, MethodDescriptor, MethodSignature, UNIT};
pub use traits::RemoteInterface;
pub use value::{HandleId, Value};
