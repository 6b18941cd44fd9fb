use crate::dsn::Dsn;
use crate::error::TransportError;
use crate::transport::DynTransport;

/// Factory turning a connection descriptor into a transport.
///
/// Object-safe and synchronous: construction is pure, performs no I/O, and
/// binds the descriptor's host and credentials into the returned transport.
pub trait TransportFactory: Send + Sync {
    /// Scheme tokens this factory recognizes.
    fn supported_schemes(&self) -> &[&'static str];

    /// Whether this factory can build a transport for `dsn`.
    ///
    /// Matches on exact scheme equality; subscheme suffixes (`scheme+foo`)
    /// are not recognized.
    fn supports(&self, dsn: &Dsn) -> bool {
        self.supported_schemes().contains(&dsn.scheme.as_str())
    }

    /// Build a transport for `dsn`.
    fn create(&self, dsn: &Dsn) -> Result<Box<dyn DynTransport>, TransportError>;
}
