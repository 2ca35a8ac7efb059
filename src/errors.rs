use crate::components::group::BandKey;

pub type Result<T> = std::result::Result<T, RastermetaError>;

#[derive(thiserror::Error, Debug)]
pub enum RastermetaError {
    #[error("invalid source: field `{field}`: {reason}")]
    InvalidSource { field: &'static str, reason: String },
    #[error("alias `{alias}` refers to band `{key}` which is not in the group")]
    UnresolvedAlias { alias: String, key: BandKey },
    #[error("coord `{coord}` has {got} values but dim `{dim}` has size {expected}")]
    MismatchedCoordLength {
        coord: String,
        dim: String,
        expected: usize,
        got: usize,
    },
}
