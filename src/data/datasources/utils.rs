use openssl::{
    hash::MessageDigest,
    pkey::Id,
    rsa::Padding,
    sign::Verifier,
    x509::X509,
};
use quick_xml::{events::Event, Reader};
use serde::de::DeserializeOwned;

use crate::{
    domain::entities::sns_notification::SnsNotification,
    errors::{SubscriptionError, VerificationError},
};

/// Builds the exact byte string SNS signed for this notification.
///
/// Keys are visited in a fixed order; a key whose value is absent or empty
/// is left out entirely, key line included.
pub(crate) fn build_signable_string(notification: &SnsNotification) -> Vec<u8> {
    let fields: [(&str, Option<&str>); 8] = [
        ("Message", notification.message.as_deref()),
        ("MessageId", notification.message_id.as_deref()),
        ("Subject", notification.subject.as_deref()),
        ("SubscribeURL", notification.subscribe_url.as_deref()),
        ("Timestamp", notification.timestamp.as_deref()),
        ("Token", notification.token.as_deref()),
        ("TopicArn", notification.topic_arn.as_deref()),
        ("Type", Some(notification.notification_type.as_str())),
    ];

    let mut signable = Vec::new();
    for (key, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            signable.extend_from_slice(key.as_bytes());
            signable.push(b'\n');
            signable.extend_from_slice(value.as_bytes());
            signable.push(b'\n');
        }
    }
    signable
}

/// Decodes the first PEM block of the body and parses it as an X.509
/// certificate.
pub(crate) fn decode_certificate(body: &[u8]) -> Result<X509, VerificationError> {
    let block = pem::parse(body).map_err(VerificationError::InvalidCertificateEncoding)?;
    X509::from_der(block.contents()).map_err(VerificationError::CertificateParseFailed)
}

/// Checks an RSA PKCS#1 v1.5 / SHA-1 signature (SignatureVersion 1) against
/// the certificate's public key.
pub(crate) fn validate_signature(
    certificate: &X509,
    signable: &[u8],
    signature: &[u8],
) -> Result<(), VerificationError> {
    let mismatch = |reason: String| VerificationError::SignatureMismatch { reason };

    let public_key = certificate
        .public_key()
        .map_err(|e| mismatch(format!("certificate public key is unusable: {e}")))?;
    if public_key.id() != Id::RSA {
        return Err(mismatch("certificate public key is not RSA".to_string()));
    }

    let mut verifier = Verifier::new(MessageDigest::sha1(), &public_key)
        .map_err(|e| mismatch(format!("failed to initialize verifier: {e}")))?;
    verifier
        .set_rsa_padding(Padding::PKCS1)
        .map_err(|e| mismatch(format!("failed to set padding: {e}")))?;
    verifier
        .update(signable)
        .map_err(|e| mismatch(format!("failed to digest signable string: {e}")))?;
    match verifier.verify(signature) {
        Ok(true) => Ok(()),
        Ok(false) => Err(mismatch("signature verification failed".to_string())),
        Err(e) => Err(mismatch(format!("signature verification failed: {e}"))),
    }
}

/// Parses an SNS query API response body, requiring the given root element.
pub(crate) fn parse_xml_response<T: DeserializeOwned>(
    body: &str,
    expected_root: &str,
) -> Result<T, SubscriptionError> {
    let parse_failed = |reason: String| SubscriptionError::ResponseParseFailed { reason };

    let mut reader = Reader::from_str(body);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() != expected_root.as_bytes() {
                    return Err(parse_failed(format!(
                        "expected element <{expected_root}> but have <{}>",
                        String::from_utf8_lossy(e.local_name().as_ref())
                    )));
                }
                break;
            }
            Ok(Event::Eof) => {
                return Err(parse_failed(format!(
                    "no <{expected_root}> element in response"
                )))
            }
            Ok(_) => {}
            Err(e) => return Err(parse_failed(format!("malformed XML: {e}"))),
        }
    }

    quick_xml::de::from_str(body).map_err(|e| parse_failed(format!("malformed XML: {e}")))
}
