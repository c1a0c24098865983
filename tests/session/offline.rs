use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use sogou_p4p::P4pError;

#[tokio::test]
async fn check_logined_passes_when_the_landing_page_is_served_directly() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/cpcadindex/init.action")
            .header("upgrade-insecure-requests", "1");
        then.status(200).body("<html>dashboard</html>");
    });

    let client = crate::common::mock_client(&server);
    client.check_logined().await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn a_redirect_means_not_logged_in() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/cpcadindex/init.action");
        then.status(302)
            .header("location", format!("{}/login", server.base_url()));
    });

    let client = crate::common::mock_client(&server);
    let err = client.check_logined().await.unwrap_err();

    mock.assert();
    match err {
        P4pError::NotLoggedIn => {}
        other => panic!("expected NotLoggedIn, got {other:?}"),
    }
}

#[tokio::test]
async fn keep_logined_mimics_the_portal_xhr_call() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/report/account/overview.action")
            .query_param_exists("t")
            .header(
                "content-type",
                "application/x-www-form-urlencoded;charset=UTF-8",
            )
            .header("sogou-hash", "#datareport/account/list")
            .header("sogou-request-type", "XMLHTTPRequest");
        then.status(200).body("{}");
    });

    let client = crate::common::mock_client(&server);
    client.keep_logined().await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn keep_logined_only_cares_about_the_transport_outcome() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/report/account/overview.action");
        then.status(500);
    });

    let client = crate::common::mock_client(&server);
    client.keep_logined().await.unwrap();
}
