#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("infimum {inf} is greater than supremum {sup}")]
    ReversedBounds { inf: f64, sup: f64 },
}
