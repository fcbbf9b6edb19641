use super::EquityEstimate;
use super::EquityRequest;

/// Anything that can answer an equity request.
///
/// The local [`Engine`] never fails; remote or cached implementations may,
/// and callers are expected to degrade rather than stop.
///
/// [`Engine`]: super::Engine
pub trait Estimator {
    fn estimate(&self, request: &EquityRequest) -> anyhow::Result<EquityEstimate>;
}

impl<T: Estimator + ?Sized> Estimator for std::sync::Arc<T> {
    fn estimate(&self, request: &EquityRequest) -> anyhow::Result<EquityEstimate> {
        (**self).estimate(request)
    }
}
