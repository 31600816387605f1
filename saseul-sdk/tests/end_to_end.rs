//! Account creation through submission against a mocked node.

use saseul_sdk::transaction::{ProtocolVersion, SendCoin};
use saseul_sdk::{Account, Address, ApiConfig, SaseulClient};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_create_sign_and_submit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transaction"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {"transaction": {"result": "accepted"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sender = Account::create(None).unwrap();
    let receiver = Account::generate();
    assert!(Address::from_string(sender.address().as_str()).is_ok());

    let tx = SendCoin::new(
        ProtocolVersion::V1_0,
        sender.address().as_str(),
        receiver.address().as_str(),
        "10",
        "0.001",
    );
    let signed = saseul_sdk::sign_transaction(&tx, &sender).unwrap();
    assert!(signed.verify().unwrap());

    let client = SaseulClient::new(ApiConfig {
        base_url: server.uri(),
        ..ApiConfig::default()
    })
    .unwrap();
    let receipt = client.send_transaction(&tx, &sender).await.unwrap();

    // Same payload, same key: the receipt hash matches the offline signature.
    assert_eq!(receipt.thash, signed.thash);
    assert_eq!(receipt.transaction, json!({"result": "accepted"}));
}
