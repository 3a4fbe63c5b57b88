//! TLS certificate probe
//!
//! Opens its own TCP connection to the host, completes a TLS handshake
//! against the Mozilla root set, and reads the issuer, expiry, protocol
//! version and cipher suite. The probe only needs the host name, so it runs
//! alongside the page fetch. Any failure is folded into a `TlsInfo` and the
//! inspection carries on.

use crate::inspector::{ProbeFailure, ProbeFailureKind, ProbeResult};
use crate::report::{TlsDetails, TlsInfo};
use chrono::{DateTime, Utc};
use rustls::pki_types::ServerName;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_rustls::rustls::{CipherSuite, ClientConfig, ProtocolVersion, RootCertStore};
use tokio_rustls::TlsConnector;
use x509_parser::certificate::X509Certificate;
use x509_parser::objects::{oid2abbrev, oid_registry};
use x509_parser::prelude::FromDer;

/// Port the probe connects to
pub const HTTPS_PORT: u16 = 443;

/// Probes `host:443` and folds the outcome into a `TlsInfo`
pub async fn tls_info(host: &str, timeout: Duration) -> TlsInfo {
    match probe_tls(host, timeout).await {
        Ok(details) => {
            tracing::info!(
                "TLS handshake with {} succeeded ({}, {})",
                host,
                details.protocol_version,
                details.cipher_suite
            );
            TlsInfo::success(details)
        }
        Err(failure) => {
            tracing::warn!("TLS probe for {} failed: {}", host, failure);
            TlsInfo::failure(failure.to_string())
        }
    }
}

/// Probes `host:443`
pub async fn probe_tls(host: &str, timeout: Duration) -> ProbeResult<TlsDetails> {
    probe_tls_at(host, HTTPS_PORT, timeout).await
}

/// Probes `host:port`; `timeout` bounds resolution, connect and handshake together
pub async fn probe_tls_at(host: &str, port: u16, timeout: Duration) -> ProbeResult<TlsDetails> {
    match tokio::time::timeout(timeout, handshake(host, port)).await {
        Ok(result) => result,
        Err(_) => Err(ProbeFailure::new(
            ProbeFailureKind::Timeout,
            format!(
                "TLS handshake with {}:{} timed out after {}s",
                host,
                port,
                timeout.as_secs()
            ),
        )),
    }
}

async fn handshake(host: &str, port: u16) -> ProbeResult<TlsDetails> {
    let server_name = ServerName::try_from(host.to_string()).map_err(|e| {
        ProbeFailure::new(
            ProbeFailureKind::InvalidHost,
            format!("Invalid host name {}: {}", host, e),
        )
    })?;

    tracing::debug!("Resolving {}:{} for TLS probe", host, port);
    let addrs: Vec<_> = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| {
            ProbeFailure::new(
                ProbeFailureKind::Dns,
                format!("Failed to resolve {}: {}", host, e),
            )
        })?
        .collect();

    let sock = TcpStream::connect(&addrs[..]).await.map_err(|e| {
        ProbeFailure::new(
            ProbeFailureKind::Connect,
            format!("Failed to connect to {}:{}: {}", host, port, e),
        )
    })?;

    let connector = TlsConnector::from(Arc::new(client_config()));
    let tls_stream = connector.connect(server_name, sock).await.map_err(|e| {
        ProbeFailure::new(
            ProbeFailureKind::Handshake,
            format!("TLS handshake with {} failed: {}", host, e),
        )
    })?;

    let (_, session) = tls_stream.get_ref();

    let protocol_version = protocol_name(session.protocol_version());
    let cipher_suite = cipher_name(session.negotiated_cipher_suite().map(|cs| cs.suite()));

    let leaf = session
        .peer_certificates()
        .and_then(|certs| certs.first())
        .ok_or_else(|| {
            ProbeFailure::new(
                ProbeFailureKind::Certificate,
                format!("{} presented no certificate", host),
            )
        })?;

    let (issuer, expires) = certificate_fields(leaf.as_ref(), host)?;

    Ok(TlsDetails {
        issuer,
        expires,
        protocol_version,
        cipher_suite,
    })
}

/// Issuer attributes and formatted not-after of a DER certificate
fn certificate_fields(der: &[u8], host: &str) -> ProbeResult<(BTreeMap<String, String>, String)> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| {
        ProbeFailure::new(
            ProbeFailureKind::Certificate,
            format!("Failed to parse certificate from {}: {}", host, e),
        )
    })?;

    let expires = format_not_after(cert.validity().not_after.timestamp()).ok_or_else(|| {
        ProbeFailure::new(
            ProbeFailureKind::Certificate,
            format!("Certificate from {} has an out-of-range expiry", host),
        )
    })?;

    Ok((issuer_attributes(&cert), expires))
}

fn protocol_name(version: Option<ProtocolVersion>) -> String {
    version
        .map(|v| format!("{v:?}"))
        .unwrap_or_else(|| "Unknown".to_string())
}

fn cipher_name(suite: Option<CipherSuite>) -> String {
    suite
        .map(|cs| format!("{cs:?}"))
        .unwrap_or_else(|| "Unknown".to_string())
}

fn client_config() -> ClientConfig {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth()
}

/// Issuer RDN attributes keyed by abbreviation (`CN`, `O`, `C`), registry
/// short name, or dotted OID when unnamed
fn issuer_attributes(cert: &X509Certificate<'_>) -> BTreeMap<String, String> {
    let registry = oid_registry();
    let mut issuer = BTreeMap::new();

    for attr in cert.issuer().iter_attributes() {
        let key = oid2abbrev(attr.attr_type(), registry)
            .map(str::to_string)
            .unwrap_or_else(|_| attr.attr_type().to_id_string());

        if let Ok(value) = attr.as_str() {
            issuer.insert(key, value.to_string());
        }
    }

    issuer
}

/// Formats a Unix timestamp like `Jun  1 12:00:00 2025 GMT`
fn format_not_after(timestamp: i64) -> Option<String> {
    let not_after: DateTime<Utc> = DateTime::from_timestamp(timestamp, 0)?;
    Some(not_after.format("%b %e %H:%M:%S %Y GMT").to_string())
}
