//! Shared helpers for integration tests: throwaway RSA keys, self-signed
//! certificates, and notifications signed the way SNS signs them.

#![allow(dead_code)]

use base64::{prelude::BASE64_STANDARD, Engine as _};
use fractic_sns::domain::entities::sns_notification::{NotificationType, SnsNotification};
use openssl::{
    asn1::Asn1Time,
    bn::BigNum,
    hash::MessageDigest,
    nid::Nid,
    pkey::{PKey, Private},
    rsa::Rsa,
    sign::Signer,
    x509::{X509Builder, X509NameBuilder},
};
use serde_json::json;

pub(crate) struct TestSigner {
    key: PKey<Private>,
}

impl TestSigner {
    pub(crate) fn generate() -> Self {
        Self {
            key: PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap(),
        }
    }

    /// Self-signed certificate for this key, PEM-encoded.
    pub(crate) fn certificate_pem(&self) -> String {
        let mut name = X509NameBuilder::new().unwrap();
        name.append_entry_by_nid(Nid::COMMONNAME, "sns.us-east-1.amazonaws.com")
            .unwrap();
        let name = name.build();

        let mut builder = X509Builder::new().unwrap();
        builder.set_version(2).unwrap();
        let serial = BigNum::from_u32(7).unwrap().to_asn1_integer().unwrap();
        builder.set_serial_number(&serial).unwrap();
        builder.set_subject_name(&name).unwrap();
        builder.set_issuer_name(&name).unwrap();
        builder.set_pubkey(&self.key).unwrap();
        builder
            .set_not_before(&Asn1Time::days_from_now(0).unwrap())
            .unwrap();
        builder
            .set_not_after(&Asn1Time::days_from_now(30).unwrap())
            .unwrap();
        builder.sign(&self.key, MessageDigest::sha256()).unwrap();
        String::from_utf8(builder.build().to_pem().unwrap()).unwrap()
    }

    /// Sets `Signature` to the RSA-SHA1 signature over the canonical string.
    pub(crate) fn sign(&self, notification: &mut SnsNotification) {
        let mut signer = Signer::new(MessageDigest::sha1(), &self.key).unwrap();
        signer.update(canonical_string(notification).as_bytes()).unwrap();
        notification.signature = Some(BASE64_STANDARD.encode(signer.sign_to_vec().unwrap()));
    }
}

/// The documented SNS SignatureVersion 1 string-to-sign.
pub(crate) fn canonical_string(n: &SnsNotification) -> String {
    let fields = [
        ("Message", n.message.clone()),
        ("MessageId", n.message_id.clone()),
        ("Subject", n.subject.clone()),
        ("SubscribeURL", n.subscribe_url.clone()),
        ("Timestamp", n.timestamp.clone()),
        ("Token", n.token.clone()),
        ("TopicArn", n.topic_arn.clone()),
        ("Type", Some(n.notification_type.as_str().to_string())),
    ];
    fields
        .into_iter()
        .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
        .map(|(key, value)| format!("{key}\n{value}\n"))
        .collect()
}

pub(crate) fn notification(cert_url: &str) -> SnsNotification {
    let mut n = SnsNotification::new(NotificationType::Notification);
    n.message = Some("{\"order\":42}".to_string());
    n.message_id = Some("22b80b92-fdea-4c2c-8f9d-bdfb0c7bf324".to_string());
    n.subject = Some("Order placed".to_string());
    n.timestamp = Some("2024-05-01T12:00:00.000Z".to_string());
    n.topic_arn = Some("arn:aws:sns:us-east-1:123456789012:orders".to_string());
    n.signature_version = Some("1".to_string());
    n.signing_cert_url = Some(cert_url.to_string());
    n.unsubscribe_url = Some(format!(
        "{}/?Action=Unsubscribe&SubscriptionArn=arn:aws:sns:us-east-1:123456789012:orders:sub",
        base_of(cert_url)
    ));
    n
}

pub(crate) fn subscription_confirmation(cert_url: &str, subscribe_url: &str) -> SnsNotification {
    let mut n = SnsNotification::new(NotificationType::SubscriptionConfirmation);
    n.message = Some(
        "You have chosen to subscribe to the topic arn:aws:sns:us-east-1:123456789012:orders."
            .to_string(),
    );
    n.message_id = Some("165545c9-2a5c-472c-8df2-7ff2be2b3b1b".to_string());
    n.token = Some("2336412f37fb687f5d51e6e241d09c805a5a57b30d712f794cc5f6a988666d92".to_string());
    n.timestamp = Some("2024-05-01T12:00:00.000Z".to_string());
    n.topic_arn = Some("arn:aws:sns:us-east-1:123456789012:orders".to_string());
    n.signature_version = Some("1".to_string());
    n.signing_cert_url = Some(cert_url.to_string());
    n.subscribe_url = Some(subscribe_url.to_string());
    n
}

/// JSON body as SNS would POST it.
pub(crate) fn to_body(n: &SnsNotification) -> String {
    json!({
        "Type": n.notification_type.as_str(),
        "Message": n.message,
        "MessageId": n.message_id,
        "Signature": n.signature,
        "SignatureVersion": n.signature_version,
        "SigningCertURL": n.signing_cert_url,
        "SubscribeURL": n.subscribe_url,
        "Subject": n.subject,
        "Timestamp": n.timestamp,
        "Token": n.token,
        "TopicArn": n.topic_arn,
        "UnsubscribeURL": n.unsubscribe_url,
    })
    .to_string()
}

fn base_of(url: &str) -> &str {
    url.rsplit_once('/').map(|(base, _)| base).unwrap_or(url)
}

pub(crate) const CONFIRM_SUBSCRIPTION_XML: &str = "<ConfirmSubscriptionResponse>\
<ConfirmSubscriptionResult><SubscriptionArn>arn:aws:sns:...</SubscriptionArn></ConfirmSubscriptionResult>\
<ResponseMetadata><RequestId>abc-123</RequestId></ResponseMetadata>\
</ConfirmSubscriptionResponse>";

pub(crate) const UNSUBSCRIBE_XML: &str = r#"<UnsubscribeResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <ResponseMetadata>
    <RequestId>18e0ac39-3776-11df-84c0-b93cc1666b84</RequestId>
  </ResponseMetadata>
</UnsubscribeResponse>"#;
