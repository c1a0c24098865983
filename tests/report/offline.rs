use std::time::Duration;

use httpmock::Method::POST;
use httpmock::MockServer;
use sogou_p4p::{P4pClient, P4pError, QueryReportParam};
use url::Url;

fn sample_param() -> QueryReportParam {
    QueryReportParam {
        time_select: "5".into(),
        start_date: "2016-02-15".into(),
        end_date: "2016-02-21".into(),
        stat_type: "0".into(),
        report_type: "3".into(),
        device_type: "0".into(),
    }
}

#[tokio::test]
async fn download_report_posts_the_exact_json_str_body() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/report/common/downloadReport.action")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(concat!(
                r#"jsonStr={"timeSelect":"5","startDate":"2016-02-15","#,
                r#""endDate":"2016-02-21","statType":"0","reportType":"3","#,
                r#""deviceType":"0"}"#
            ));
        then.status(200).body("ok");
    });

    let client = crate::common::mock_client(&server);
    let report = client.download_report(&sample_param()).await.unwrap();

    mock.assert();
    assert_eq!(report, b"ok");
}

#[tokio::test]
async fn gbk_report_bytes_are_transcoded_to_utf8() {
    let server = MockServer::start();

    // "CPC\u{62a5}\u{8868}" ("CPC报表") in GBK.
    let gbk: &[u8] = &[0x43, 0x50, 0x43, 0xB1, 0xA8, 0xB1, 0xED];
    server.mock(|when, then| {
        when.method(POST).path("/report/common/downloadReport.action");
        then.status(200)
            .header("content-type", "application/octet-stream")
            .body(gbk);
    });

    let client = crate::common::mock_client(&server);
    let report = client.download_report(&sample_param()).await.unwrap();

    assert_eq!(report, "CPC报表".as_bytes());
}

#[tokio::test]
async fn a_stalled_endpoint_fails_with_a_timeout_instead_of_hanging() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/report/common/downloadReport.action");
        then.status(200).delay(Duration::from_secs(2)).body("late");
    });

    let client = P4pClient::builder()
        .base_auth(Url::parse(&server.base_url()).unwrap())
        .base_portal(Url::parse(&server.base_url()).unwrap())
        .timeout(Duration::from_millis(250))
        .build()
        .unwrap();

    let err = client.download_report(&sample_param()).await.unwrap_err();
    match err {
        P4pError::Http(e) => assert!(e.is_timeout(), "expected timeout, got {e:?}"),
        other => panic!("expected Http error, got {other:?}"),
    }
}
