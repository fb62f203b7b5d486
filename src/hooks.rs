/// API fetch state enum
///
/// Dispatch happens by matching the variants directly (see
/// `common::fetch_render` and the model detail card).
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}
