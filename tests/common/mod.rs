use httpmock::MockServer;
use sogou_p4p::P4pClient;
use url::Url;

/// Client with both the identity and portal hosts pointed at one mock server.
pub fn mock_client(server: &MockServer) -> P4pClient {
    P4pClient::builder()
        .base_auth(Url::parse(&server.base_url()).unwrap())
        .base_portal(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}
