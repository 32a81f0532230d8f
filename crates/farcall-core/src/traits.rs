use crate::descriptor::TypeToken;

/// A contract whose calls may be carried to a remote target.
///
/// Implemented by the marker type a stub generator emits for each remote
/// interface. The dispatcher introspects the returned token once, at
/// construction.
pub trait RemoteInterface {
    /// Name of the interface, as reported in diagnostics.
    const NAME: &'static str;

    /// The interface's type token, with every method it declares.
    fn type_token() -> TypeToken;
}
