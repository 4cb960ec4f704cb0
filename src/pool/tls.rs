use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;

use super::error::PoolResult;

/// TLS connector for DSQL.
///
/// Mirrors libpq's `sslmode=require`: the channel is encrypted but neither the
/// certificate chain nor the hostname is verified. With `sslmode=disable` the
/// driver never invokes it.
pub fn make_tls_connector() -> PoolResult<MakeTlsConnector> {
    let connector = TlsConnector::builder()
        .danger_accept_invalid_certs(true)
        .danger_accept_invalid_hostnames(true)
        .build()?;
    Ok(MakeTlsConnector::new(connector))
}
