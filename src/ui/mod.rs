/// Console UI layer
///
/// `region` owns the output sinks the actions write into; `actions` binds
/// the two user-triggered operations to the backend client.
pub mod actions;
pub mod region;
